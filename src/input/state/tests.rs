use super::*;
use crate::config::Config;
use crate::draw::{BLUE, ComposeError, GREEN, Image, Point, RED, StrokeStyle, WHITE};
use crate::input::{DrawingMode, GestureEvent, StyleState};
use crate::session::SessionState;

fn create_test_canvas() -> Canvas {
    Canvas::new(40, 30, StyleState::new(RED, 4.0)).unwrap()
}

fn draw_line(canvas: &mut Canvas, session: &mut SessionState, from: (f64, f64), to: (f64, f64)) {
    canvas.handle_gesture(GestureEvent::start(from.0, from.1), session);
    canvas.handle_gesture(
        GestureEvent::moved((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0),
        session,
    );
    canvas.handle_gesture(GestureEvent::moved(to.0, to.1), session);
    canvas.handle_gesture(GestureEvent::End, session);
}

#[test]
fn test_stroke_count_matches_completed_gestures() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    for i in 0..3 {
        let y = 5.0 + i as f64 * 5.0;
        draw_line(&mut canvas, &mut session, (2.0, y), (30.0, y));
        assert_eq!(canvas.strokes().len(), i + 1);
    }

    // An in-progress stroke is not counted
    canvas.handle_gesture(GestureEvent::start(1.0, 1.0), &mut session);
    assert!(canvas.is_drawing());
    assert_eq!(canvas.strokes().len(), 3);
    assert_eq!(canvas.current_stroke().unwrap().points().len(), 1);
}

#[test]
fn test_style_is_captured_at_gesture_start() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    canvas.handle_gesture(GestureEvent::start(0.0, 0.0), &mut session);
    canvas.style.set_color(BLUE);
    canvas.style.set_width(25.0);
    canvas.style.set_mode(DrawingMode::Erase);
    canvas.handle_gesture(GestureEvent::moved(10.0, 10.0), &mut session);
    canvas.handle_gesture(GestureEvent::End, &mut session);

    assert_eq!(
        canvas.strokes().strokes()[0].style(),
        StrokeStyle::Ink {
            color: RED,
            width: 4.0
        }
    );

    // The next stroke picks up the new style
    canvas.handle_gesture(GestureEvent::start(5.0, 5.0), &mut session);
    canvas.handle_gesture(GestureEvent::End, &mut session);
    assert_eq!(
        canvas.strokes().strokes()[1].style(),
        StrokeStyle::Erase { width: 50.0 }
    );
}

#[test]
fn test_truncated_stroke_survives_view_recreation() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    canvas.handle_gesture(GestureEvent::start(1.0, 1.0), &mut session);
    canvas.handle_gesture(GestureEvent::moved(9.0, 9.0), &mut session);
    canvas.handle_gesture(GestureEvent::start(20.0, 20.0), &mut session);

    // View torn down before the second gesture ends
    let mut restored = create_test_canvas();
    restored.restore(&session);
    assert_eq!(restored.strokes().len(), 1);
    assert_eq!(
        restored.strokes().strokes()[0].points(),
        &[Point::new(1.0, 1.0), Point::new(9.0, 9.0)]
    );
}

#[test]
fn test_move_and_end_while_idle_are_ignored() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    canvas.handle_gesture(GestureEvent::moved(3.0, 3.0), &mut session);
    canvas.handle_gesture(GestureEvent::End, &mut session);

    assert!(!canvas.is_drawing());
    assert!(canvas.strokes().is_empty());
    assert!(session.strokes().is_empty());
}

#[test]
fn test_start_while_drawing_seals_truncated_stroke() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    canvas.handle_gesture(GestureEvent::start(1.0, 1.0), &mut session);
    canvas.handle_gesture(GestureEvent::moved(2.0, 2.0), &mut session);
    // End event lost; a new gesture begins
    canvas.handle_gesture(GestureEvent::start(20.0, 20.0), &mut session);

    assert_eq!(canvas.strokes().len(), 1);
    // The truncated stroke is already visible to the session
    assert_eq!(session.strokes(), canvas.strokes());
    assert_eq!(
        canvas.strokes().strokes()[0].points(),
        &[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]
    );
    assert_eq!(
        canvas.current_stroke().unwrap().points(),
        &[Point::new(20.0, 20.0)]
    );

    canvas.handle_gesture(GestureEvent::End, &mut session);
    assert_eq!(canvas.strokes().len(), 2);
    assert_eq!(session.strokes().len(), 2);
}

#[test]
fn test_duplicate_points_are_kept() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    canvas.handle_gesture(GestureEvent::start(4.0, 4.0), &mut session);
    canvas.handle_gesture(GestureEvent::moved(4.0, 4.0), &mut session);
    canvas.handle_gesture(GestureEvent::moved(4.0, 4.0), &mut session);
    canvas.handle_gesture(GestureEvent::End, &mut session);

    assert_eq!(canvas.strokes().strokes()[0].points().len(), 3);
}

#[test]
fn test_gesture_end_exports_to_session() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    draw_line(&mut canvas, &mut session, (0.0, 0.0), (10.0, 10.0));
    assert_eq!(session.strokes(), canvas.strokes());

    canvas.handle_gesture(GestureEvent::start(5.0, 5.0), &mut session);
    // Session is only updated when a stroke completes
    assert_eq!(session.strokes().len(), 1);
}

#[test]
fn test_clear_is_idempotent() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();
    draw_line(&mut canvas, &mut session, (0.0, 0.0), (10.0, 10.0));
    draw_line(&mut canvas, &mut session, (0.0, 10.0), (10.0, 0.0));

    canvas.clear(&mut session);
    assert!(canvas.strokes().is_empty());
    assert!(session.strokes().is_empty());
    assert!(canvas.needs_redraw);

    canvas.clear(&mut session);
    assert!(canvas.strokes().is_empty());
    assert!(session.strokes().is_empty());
}

#[test]
fn test_clear_keeps_stroke_in_progress() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    canvas.handle_gesture(GestureEvent::start(1.0, 1.0), &mut session);
    canvas.clear(&mut session);
    assert!(canvas.is_drawing());

    canvas.handle_gesture(GestureEvent::End, &mut session);
    assert_eq!(canvas.strokes().len(), 1);
}

#[test]
fn test_export_restore_round_trip() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    draw_line(&mut canvas, &mut session, (0.0, 0.0), (10.0, 10.0));
    canvas.style.set_mode(DrawingMode::Erase);
    draw_line(&mut canvas, &mut session, (5.0, 0.0), (5.0, 20.0));
    canvas.style.set_mode(DrawingMode::Ink);
    canvas.style.set_color(GREEN);
    draw_line(&mut canvas, &mut session, (0.0, 20.0), (30.0, 20.0));

    // The view is recreated after navigation
    let mut restored = create_test_canvas();
    restored.restore(&session);
    assert_eq!(restored.strokes(), canvas.strokes());
    assert!(restored.needs_redraw);
}

#[test]
fn test_restore_replaces_existing_strokes() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();
    draw_line(&mut canvas, &mut session, (0.0, 0.0), (10.0, 10.0));
    draw_line(&mut canvas, &mut session, (0.0, 5.0), (10.0, 5.0));

    let empty = SessionState::new();
    canvas.restore(&empty);
    assert!(canvas.strokes().is_empty());
}

#[test]
fn test_stroke_limit_discards_new_strokes() {
    let mut canvas = create_test_canvas();
    canvas.max_strokes = 2;
    let mut session = SessionState::new();

    for i in 0..4 {
        let y = i as f64 * 3.0;
        draw_line(&mut canvas, &mut session, (0.0, y), (10.0, y));
    }

    assert_eq!(canvas.strokes().len(), 2);
    assert_eq!(canvas.strokes().strokes()[1].points()[0], Point::new(0.0, 3.0));
}

#[test]
fn test_restore_truncates_to_stroke_limit() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();
    for i in 0..3 {
        let y = i as f64 * 3.0;
        draw_line(&mut canvas, &mut session, (0.0, y), (10.0, y));
    }

    let mut limited = create_test_canvas();
    limited.max_strokes = 1;
    limited.restore(&session);
    assert_eq!(limited.strokes().len(), 1);
}

#[test]
fn test_redraw_renders_current_stroke() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    canvas.handle_gesture(GestureEvent::start(5.0, 15.0), &mut session);
    canvas.handle_gesture(GestureEvent::moved(35.0, 15.0), &mut session);
    canvas.redraw();
    assert!(!canvas.needs_redraw);

    let image = canvas.surface().to_image().unwrap();
    assert_eq!(image.pixel(20, 15), Some(0xFFFF0000));
    assert_eq!(image.alpha(20, 2), Some(0));
}

#[test]
fn test_erase_reveals_transparency_on_layer() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    draw_line(&mut canvas, &mut session, (0.0, 15.0), (40.0, 15.0));
    canvas.style.set_mode(DrawingMode::Erase);
    draw_line(&mut canvas, &mut session, (20.0, 0.0), (20.0, 30.0));
    canvas.redraw();

    let image = canvas.surface().to_image().unwrap();
    assert_eq!(image.alpha(20, 15), Some(0));
    assert_eq!(image.pixel(5, 15), Some(0xFFFF0000));
}

#[test]
fn test_flattened_input_requires_background() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();
    draw_line(&mut canvas, &mut session, (0.0, 0.0), (10.0, 10.0));

    let err = canvas.create_flattened_input(&mut session).unwrap_err();
    assert!(matches!(err, ComposeError::MissingBackground));
    assert!(session.output().is_none());
}

#[test]
fn test_flattened_input_uses_background_dimensions() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();
    draw_line(&mut canvas, &mut session, (0.0, 15.0), (40.0, 15.0));

    session.set_background(Some(Image::filled(160, 120, WHITE).unwrap()));
    canvas.create_flattened_input(&mut session).unwrap();

    let output = session.output().unwrap();
    assert_eq!(output.dimensions(), (160, 120));
    // Stroke at y=15 of 30 lands at y=60 of 120
    assert_eq!(output.pixel(80, 60), Some(0xFFFF0000));
    assert_eq!(output.pixel(80, 5), Some(0xFFFFFFFF));
}

#[test]
fn test_flattened_input_prefers_frozen_snapshot() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();

    session.set_background(Some(Image::filled(8, 6, GREEN).unwrap()));
    assert!(session.freeze());
    session.set_background(Some(Image::filled(8, 6, BLUE).unwrap()));

    canvas.create_flattened_input(&mut session).unwrap();
    assert_eq!(session.output().unwrap().pixel(0, 0), Some(0xFF00FF00));

    session.unfreeze();
    canvas.create_flattened_input(&mut session).unwrap();
    assert_eq!(session.output().unwrap().pixel(0, 0), Some(0xFF0000FF));
}

#[test]
fn test_resize_keeps_strokes() {
    let mut canvas = create_test_canvas();
    let mut session = SessionState::new();
    draw_line(&mut canvas, &mut session, (0.0, 0.0), (10.0, 10.0));

    canvas.redraw();
    canvas.resize(80, 60).unwrap();
    assert_eq!(canvas.surface().dimensions(), (80, 60));
    assert_eq!(canvas.strokes().len(), 1);
    assert!(canvas.needs_redraw);
}

#[test]
fn test_from_config_applies_settings() {
    let mut config = Config::default();
    config.drawing.default_width = 7.0;
    config.drawing.eraser_width_multiplier = 3.0;
    config.canvas.width = 120;
    config.canvas.height = 90;
    config.session.max_strokes = 5;

    let mut canvas = Canvas::from_config(&config).unwrap();
    assert_eq!(canvas.surface().dimensions(), (120, 90));
    assert_eq!(canvas.max_strokes, 5);
    assert_eq!(canvas.style.width(), 7.0);

    assert_eq!(canvas.style.mode(), DrawingMode::Ink);

    canvas.style.set_mode(DrawingMode::Erase);
    assert_eq!(canvas.style.snapshot(), StrokeStyle::Erase { width: 21.0 });
}

#[test]
fn test_from_config_starts_in_configured_mode() {
    let mut config = Config::default();
    config.drawing.default_mode = DrawingMode::Erase;

    let canvas = Canvas::from_config(&config).unwrap();
    assert_eq!(canvas.style.mode(), DrawingMode::Erase);
    assert_eq!(canvas.style.snapshot(), StrokeStyle::Erase { width: 20.0 });
}
