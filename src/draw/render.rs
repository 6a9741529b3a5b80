//! Cairo-based rasterisation of strokes.

use super::frame::StrokeList;
use super::stroke::{Point, StrokeStyle};
use super::surface::Surface;
use log::warn;

/// Renders all strokes onto a surface, replacing its previous content.
///
/// Strokes are drawn in list order (first stroke = bottom layer), followed by
/// `current`, the in-progress stroke, if any. Erase strokes clear pixels, so
/// they only affect what was drawn before them.
///
/// # Arguments
/// * `surface` - Drawing layer to render to
/// * `strokes` - Sealed strokes in drawing order
/// * `current` - Live points and style of the stroke being drawn
pub fn render(surface: &Surface, strokes: &StrokeList, current: Option<(&[Point], StrokeStyle)>) {
    if surface.is_empty() {
        return;
    }

    let ctx = match surface.context() {
        Ok(ctx) => ctx,
        Err(err) => {
            warn!("Failed to open drawing context: {}", err);
            return;
        }
    };

    clear(&ctx);
    render_strokes(&ctx, strokes);

    if let Some((points, style)) = current {
        render_stroke(&ctx, points, style);
    }
}

/// Renders every stroke of the list in order.
pub fn render_strokes(ctx: &cairo::Context, strokes: &StrokeList) {
    for stroke in strokes {
        render_stroke(ctx, stroke.points(), stroke.style());
    }
}

/// Renders one polyline with the given style.
///
/// A single point is drawn as a round dot of the stroke width.
pub fn render_stroke(ctx: &cairo::Context, points: &[Point], style: StrokeStyle) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    let _ = ctx.save();

    match style {
        StrokeStyle::Ink { color, .. } => {
            ctx.set_operator(cairo::Operator::Over);
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        }
        StrokeStyle::Erase { .. } => {
            ctx.set_operator(cairo::Operator::Clear);
        }
    }
    ctx.set_line_width(style.width());
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    if rest.is_empty() {
        // Zero-length segment; the round cap turns it into a dot
        ctx.line_to(first.x, first.y);
    }
    for point in rest {
        ctx.line_to(point.x, point.y);
    }

    let _ = ctx.stroke();
    let _ = ctx.restore();
}

/// Wipes the whole surface to transparent.
fn clear(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}
