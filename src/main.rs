use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sketchpad::settings::Config;
use sketchpad::{init_logging, load_script, render, save_image, BUILD_DATE, VERSION};
use tracing::info;

/// Replays a recorded drawing session and saves the canvas as an image.
#[derive(Parser, Debug)]
#[command(name = "sketchpad", version, about)]
struct Cli {
    /// Input script with click, mouse and key directives.
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Where to write the rendered canvas. The extension picks the format.
    #[arg(short, long, value_name = "FILE", default_value = "sketch.png")]
    output: PathBuf,

    /// Configuration file (TOML or JSON). Defaults to the user config dir.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    info!("sketchpad {} (built {})", VERSION, BUILD_DATE);

    let config = match cli.config.or_else(|| Config::default_path().ok()) {
        Some(path) => Config::load_or_default(&path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => Config::default(),
    };

    let events = load_script(&cli.script)
        .with_context(|| format!("failed to read script {}", cli.script.display()))?;
    let rendering = render(events, &config).await?;
    save_image(&rendering.frame, &cli.output)?;

    info!(
        "wrote {} ({} shapes)",
        cli.output.display(),
        rendering.shapes
    );
    Ok(())
}
