//! Rendering pipeline.
//!
//! Shapes produce lazy point streams. Registration filters a stream to the
//! canvas, tags each point with its owner, pushes it into the [`Matrix`]
//! and collects the batch that goes to the compositor. Unregistration
//! walks the same stream, pops the owner's entries and collects whatever is
//! now visible underneath.
//!
//! The compositor runs as its own task and is the only code that touches
//! the [`Surface`]. It receives whole batches over an unbounded channel and
//! flushes once per batch.

use sketchpad_core::{RenderError, Surface};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::matrix::Matrix;
use crate::model::{ColoredPoint, ShapeId};

/// Pixels the compositor writes in one go before flushing.
pub type PointBatch = Vec<ColoredPoint>;

/// Receiving half of the batch stream, owned by the compositor.
pub type RenderStream = mpsc::UnboundedReceiver<PointBatch>;

/// Forwards only the points inside `[0, width) x [0, height)`.
pub fn within_bounds<I>(points: I, width: u32, height: u32) -> impl Iterator<Item = ColoredPoint>
where
    I: IntoIterator<Item = ColoredPoint>,
{
    let (width, height) = (i64::from(width), i64::from(height));
    points.into_iter().filter(move |p| {
        let (x, y) = (i64::from(p.point.x), i64::from(p.point.y));
        (0..width).contains(&x) && (0..height).contains(&y)
    })
}

/// Registers `points` under `owner` and returns the batch to draw.
pub fn register_into<I>(matrix: &mut Matrix, owner: ShapeId, points: I) -> PointBatch
where
    I: IntoIterator<Item = ColoredPoint>,
{
    let (width, height) = (matrix.width(), matrix.height());
    within_bounds(points, width, height)
        .map(|p| {
            let entry = p.owned_by(owner);
            matrix.push(entry);
            entry
        })
        .collect()
}

/// Removes `owner`'s entries for `points` and returns, per point, the entry
/// that is visible once it is gone.
pub fn unregister_from<I>(matrix: &mut Matrix, owner: ShapeId, points: I) -> PointBatch
where
    I: IntoIterator<Item = ColoredPoint>,
{
    let (width, height) = (matrix.width(), matrix.height());
    within_bounds(points, width, height)
        .map(|p| {
            if !matrix.remove_owned(p.point, owner) {
                tracing::trace!("no entry of {} at {}", owner, p.point);
            }
            matrix.top_colored_point(p.point)
        })
        .collect()
}

/// Sending half of the batch stream.
///
/// A detached sink drops every batch, which is what a canvas without a
/// display wants.
#[derive(Debug, Clone, Default)]
pub struct RenderSink {
    tx: Option<mpsc::UnboundedSender<PointBatch>>,
}

impl RenderSink {
    pub fn new(tx: mpsc::UnboundedSender<PointBatch>) -> Self {
        Self { tx: Some(tx) }
    }

    pub fn detached() -> Self {
        Self { tx: None }
    }

    pub fn is_detached(&self) -> bool {
        self.tx.is_none()
    }

    /// Queues `batch` for the compositor. Empty batches are not sent.
    /// Returns false if the compositor has gone away.
    pub fn send(&self, batch: PointBatch) -> bool {
        let Some(tx) = &self.tx else {
            return true;
        };
        if batch.is_empty() {
            return true;
        }
        match tx.send(batch) {
            Ok(()) => true,
            Err(_) => {
                warn!("render sink closed, dropping batch");
                false
            }
        }
    }
}

/// Creates a connected sink and stream.
pub fn render_channel() -> (RenderSink, RenderStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    (RenderSink::new(tx), rx)
}

/// Draws every batch from `stream` onto `surface`, flushing after each,
/// and hands the surface back once all senders are gone.
pub async fn compose<S: Surface>(mut surface: S, mut stream: RenderStream) -> S {
    let mut batches = 0usize;
    let mut pixels = 0usize;
    while let Some(batch) = stream.recv().await {
        for p in &batch {
            surface.set(p.point.x, p.point.y, p.color);
        }
        surface.flush();
        batches += 1;
        pixels += batch.len();
    }
    debug!(batches, pixels, "render stream closed");
    surface
}

/// Handle to a spawned [`compose`] task.
#[derive(Debug)]
pub struct Compositor<S> {
    handle: JoinHandle<S>,
}

impl<S: Surface + 'static> Compositor<S> {
    /// Spawns the compositor on the current runtime.
    pub fn spawn(surface: S, stream: RenderStream) -> Self {
        Self {
            handle: tokio::spawn(compose(surface, stream)),
        }
    }

    /// Waits for the stream to close and returns the surface.
    pub async fn finish(self) -> Result<S, RenderError> {
        self.handle
            .await
            .map_err(|e| RenderError::CompositorFailed {
                reason: e.to_string(),
            })
    }
}
