//! # Sketchpad
//!
//! A raster vector-drawing canvas driven by a click stream and a key
//! stream. Shapes are drawn pixel by pixel into a surface while a per-pixel
//! index remembers which shape owns what, so shapes can be picked, moved,
//! rotated, mirrored, grouped and erased without redrawing the whole
//! canvas.
//!
//! ## Architecture
//!
//! Sketchpad is organized as a workspace with multiple crates:
//!
//! 1. **sketchpad-core** - Geometry, colors and style, input streams, surfaces, errors
//! 2. **sketchpad-settings** - Configuration files and validation
//! 3. **sketchpad-designer** - Shapes, pixel index, render pipeline, command dispatcher
//! 4. **sketchpad** - Logging, input scripts and the headless renderer binary

pub mod script;
pub mod session;

pub use sketchpad_designer as designer;
pub use sketchpad_settings as settings;

pub use script::{load_script, parse_script};
pub use session::{canvas_options, render, save_image, Rendering};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
