use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use glyphcast::demo::{generate_demo_image, DEMO_HEIGHT, DEMO_WIDTH};
use glyphcast::output::{Output, DEFAULT_HTML_FONT, DEFAULT_HTML_PATH};
use glyphcast::raster::manipulate::pad_to_power_of_two;
use glyphcast::raster::{load_image_file, Image};
use glyphcast::shell::{Session, SessionSettings, ShellStyle, DEFAULT_CHARSET, DEFAULT_RESOLUTION};
use glyphcast::terminal_setup::{init_tracing, stdin_is_interactive, use_color};
use glyphcast::AppResult;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Parser)]
#[command(name = "glyphcast", version, about = "Turn images into ASCII art from an interactive shell")]
struct Cli {
    /// Image file to convert (PNG or JPEG; runs on a generated demo image if omitted)
    input: Option<PathBuf>,
    #[arg(long, help = "Use the generated demo image", conflicts_with = "input")]
    demo: bool,
    #[arg(long, value_name = "N", help = "Seed for the demo image")]
    seed: Option<u64>,
    #[arg(
        long,
        env = "GLYPHCAST_CHARS",
        default_value = DEFAULT_CHARSET,
        help = "Initial palette"
    )]
    chars: String,
    #[arg(
        long,
        env = "GLYPHCAST_RESOLUTION",
        value_name = "N",
        default_value_t = DEFAULT_RESOLUTION,
        help = "Initial number of cells per row (a power of two)"
    )]
    resolution: usize,
    #[arg(
        long,
        env = "GLYPHCAST_ROUND",
        default_value = "abs",
        value_parser = ["abs", "up", "down"],
        help = "Initial rounding policy"
    )]
    round: String,
    #[arg(
        long,
        env = "GLYPHCAST_OUTPUT",
        default_value = "console",
        value_parser = ["console", "html"],
        help = "Initial output method"
    )]
    output: String,
    #[arg(long, env = "GLYPHCAST_HTML_PATH", default_value = DEFAULT_HTML_PATH)]
    html_path: PathBuf,
    #[arg(long, env = "GLYPHCAST_HTML_FONT", default_value = DEFAULT_HTML_FONT)]
    html_font: String,
    #[arg(long, value_name = "FILE", help = "Read shell commands from a file instead of stdin")]
    script: Option<PathBuf>,
    #[arg(long, help = "Render once with the initial settings and exit", conflicts_with = "script")]
    once: bool,
    #[arg(long, env = "GLYPHCAST_LOG", help = "Log filter when RUST_LOG is unset (e.g. debug)")]
    log_level: Option<String>,
}

fn load_image_from_cli(cli: &Cli) -> AppResult<Image> {
    match cli.input.as_ref() {
        Some(path) if !cli.demo => Ok(load_image_file(path)?),
        _ => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            Ok(generate_demo_image(DEMO_WIDTH, DEMO_HEIGHT, &mut rng))
        }
    }
}

fn settings_from_cli(cli: &Cli) -> AppResult<SessionSettings> {
    Ok(SessionSettings {
        charset: cli.chars.chars().collect(),
        resolution: cli.resolution,
        rounding: cli.round.parse()?,
        output: Output {
            kind: cli.output.parse()?,
            html_path: cli.html_path.clone(),
            html_font: cli.html_font.clone(),
        },
    })
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let image = load_image_from_cli(&cli)?;
    let padded = pad_to_power_of_two(&image);
    let mut session = Session::new(padded, settings_from_cli(&cli)?)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.once {
        session.ascii_art(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    let color = use_color();
    match cli.script.as_ref() {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                format!("failed to open script '{}': {}", path.display(), e)
            })?;
            let style = ShellStyle {
                prompt: false,
                color,
            };
            session.run(BufReader::new(file), &mut out, style)?;
        }
        None => {
            let style = ShellStyle {
                prompt: stdin_is_interactive(),
                color,
            };
            session.run(io::stdin().lock(), &mut out, style)?;
        }
    }

    Ok(())
}
