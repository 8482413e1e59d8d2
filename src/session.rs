//! One headless drawing session: replay events into a dispatcher, draw
//! into a framebuffer, and write the result out.

use std::path::Path;

use anyhow::Context;
use sketchpad_core::input::play;
use sketchpad_core::{Error, FrameBuffer, InputEvent};
use sketchpad_designer::{render_channel, Canvas, CanvasOptions, Compositor, Dispatcher, InputStreams};
use sketchpad_settings::Config;
use tokio::sync::mpsc;
use tracing::info;

/// Outcome of a session.
#[derive(Debug)]
pub struct Rendering {
    pub frame: FrameBuffer,
    /// Shapes left on the canvas at the end.
    pub shapes: usize,
    /// Events that reached the dispatcher.
    pub events: usize,
}

/// Canvas geometry from the configuration.
pub fn canvas_options(config: &Config) -> CanvasOptions {
    CanvasOptions {
        width: config.canvas.width,
        height: config.canvas.height,
        background: config.canvas.background,
        search_radius: config.input.search_radius,
    }
}

/// Plays `events` through a dispatcher and returns the drawn frame.
pub async fn render(events: Vec<InputEvent>, config: &Config) -> sketchpad_core::Result<Rendering> {
    let options = canvas_options(config);
    let (sink, stream) = render_channel();
    let compositor = Compositor::spawn(
        FrameBuffer::new(options.width, options.height, options.background),
        stream,
    );

    // capacity 1 keeps clicks and keys in script order
    let (click_tx, click_rx) = mpsc::channel(1);
    let (key_tx, key_rx) = mpsc::channel(1);
    let feeder = tokio::spawn(play(events, click_tx, key_tx));

    let mut canvas = Dispatcher::new(
        Canvas::new(options, sink),
        config.drawing.style_context(),
        InputStreams::new(click_rx, key_rx),
    )
    .with_max_polygon_vertices(config.input.max_polygon_vertices)
    .run()
    .await;

    let events = feeder
        .await
        .map_err(|e| Error::other(format!("input feeder failed: {}", e)))?;
    let shapes = canvas.len();
    canvas.close_render_sink();
    let frame = compositor.finish().await?;

    info!("session done: {} events, {} shapes", events, shapes);
    Ok(Rendering {
        frame,
        shapes,
        events,
    })
}

/// Writes `frame` as an image; the format follows the extension.
pub fn save_image(frame: &FrameBuffer, path: &Path) -> anyhow::Result<()> {
    let image = image::RgbaImage::from_raw(frame.width(), frame.height(), frame.to_rgba_bytes())
        .context("framebuffer size does not match its pixel data")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
