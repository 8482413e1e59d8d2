//! # Sketchpad Designer
//!
//! The drawing engine: shapes, the per-pixel index that keeps track of
//! which shape is drawn where, and the command handlers that turn clicks
//! and key presses into shapes on the canvas.
//!
//! ## Core Components
//!
//! - **Model**: lines, polygons, regular polygons, circles, arcs and groups,
//!   each producing a lazy stream of colored pixels
//! - **Matrix**: a stack of entries per pixel, used for hit-testing and for
//!   repainting what lies under an erased shape
//! - **Pipeline**: bounds filtering, registration into the matrix, and the
//!   compositor task that writes batches to a surface
//! - **Canvas**: shape store plus matrix, kept consistent by every operation
//! - **Dispatcher**: one async task reading both input streams and running
//!   the command bound to each key
//!
//! ## Architecture
//!
//! ```text
//! key/click streams ──► Dispatcher ──► Canvas ──► Matrix
//!                                        │
//!                                        └── PointBatch ──► Compositor ──► Surface
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sketchpad_designer::{render_channel, Canvas, CanvasOptions, Compositor, Dispatcher, InputStreams};
//!
//! let (sink, stream) = render_channel();
//! let compositor = Compositor::spawn(FrameBuffer::new(800, 600, Rgba::BLACK), stream);
//! let canvas = Canvas::new(CanvasOptions::default(), sink);
//! let canvas = Dispatcher::new(canvas, StyleContext::default(), InputStreams::new(clicks, keys))
//!     .run()
//!     .await;
//! drop(canvas);
//! let frame = compositor.finish().await?;
//! ```

pub mod canvas;
pub mod dispatcher;
pub mod matrix;
pub mod model;
pub mod pipeline;

pub use canvas::{Canvas, CanvasOptions};
pub use dispatcher::{Command, Dispatcher, Input, InputStreams};
pub use matrix::Matrix;
pub use model::{
    Circle, CircleArc, ColoredPoint, Drawable, Grouping, Line, LineRaster, Polygon, PointStream,
    Reflection, RegularPolygon, Shape, ShapeId, ShapeKind,
};
pub use pipeline::{
    compose, register_into, render_channel, unregister_from, within_bounds, Compositor,
    PointBatch, RenderSink, RenderStream,
};
