use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use hairsketch::config::Config;
use hairsketch::draw::Image;
use hairsketch::input::Canvas;
use hairsketch::session::{SessionState, load_document, options_from_config};
use hairsketch::util::parse_dimensions;

#[derive(Parser, Debug)]
#[command(name = "hairsketch")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("HAIRSKETCH_GIT_HASH"), ")"),
    about = "Hairstyle sketch compositor"
)]
struct Cli {
    /// Use this config file instead of ~/.config/hairsketch/config.toml
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flatten a stroke document over a background image
    Compose {
        /// Stroke document (path, or a name inside the session storage directory)
        #[arg(long, short = 's', value_name = "FILE")]
        strokes: String,

        /// Background PNG; the output has its dimensions
        #[arg(long, short = 'b', value_name = "PNG")]
        background: PathBuf,

        /// Where to write the flattened PNG
        #[arg(long, short = 'o', value_name = "PNG")]
        output: PathBuf,

        /// Size of the view the strokes were drawn in (defaults to the
        /// document's recorded size, then the configured canvas size)
        #[arg(long, value_name = "WxH", value_parser = parse_view)]
        view: Option<(i32, i32)>,
    },

    /// Write a commented default config file (refuses to overwrite)
    InitConfig,
}

fn parse_view(raw: &str) -> Result<(i32, i32), String> {
    parse_dimensions(raw).ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{raw}'"))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Compose {
            strokes,
            background,
            output,
            view,
        }) => {
            let config_path = resolve_config_path(cli.config)?;
            let config = Config::load_from(&config_path)?;
            compose(&config, &config_path, &strokes, &background, &output, view)?;
        }
        Some(Command::InitConfig) => {
            let config_path = resolve_config_path(cli.config)?;
            Config::create_default_file(&config_path)?;
            println!("Wrote default config to {}", config_path.display());
        }
        None => {
            // No subcommand: show usage
            println!("hairsketch: Hairstyle sketch compositor");
            println!();
            println!("Usage:");
            println!(
                "  hairsketch compose --strokes <FILE> --background <PNG> --output <PNG> \
                 [--view WxH]"
            );
            println!("  hairsketch init-config  Write a default config file");
            println!("  hairsketch --help       Show help");
            println!();
            println!("The output image has the background's dimensions; strokes are scaled");
            println!("from the view size onto it. Erase strokes reveal the background.");
        }
    }

    Ok(())
}

fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Config::get_config_path(),
    }
}

fn compose(
    config: &Config,
    config_path: &Path,
    strokes: &str,
    background: &Path,
    output: &Path,
    view: Option<(i32, i32)>,
) -> Result<()> {
    let config_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let options = options_from_config(&config.session, config_dir)?;

    let document_path = options.document_path(strokes);
    let document = load_document(&document_path, &options)?
        .ok_or_else(|| anyhow!("No stroke document at {}", document_path.display()))?;

    let (width, height) = view
        .or(document.view_size)
        .unwrap_or((config.canvas.width, config.canvas.height));
    log::info!(
        "Composing {} strokes drawn in a {}x{} view",
        document.strokes.len(),
        width,
        height
    );

    let mut canvas = Canvas::from_config(config)?;
    canvas.resize(width, height)?;

    let mut session = SessionState::new();
    session.set_strokes(document.strokes);
    canvas.restore(&session);

    let file = File::open(background)
        .with_context(|| format!("Failed to open background {}", background.display()))?;
    let frame = Image::read_png(&mut BufReader::new(file))
        .with_context(|| format!("Failed to decode background {}", background.display()))?;
    session.set_background(Some(frame));

    canvas.create_flattened_input(&mut session)?;
    let flattened = session
        .take_output()
        .ok_or_else(|| anyhow!("Flattening produced no output"))?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    flattened
        .write_png(&mut BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!(
        "Wrote {}x{} image to {}",
        flattened.width(),
        flattened.height(),
        output.display()
    );
    session.teardown();
    Ok(())
}
