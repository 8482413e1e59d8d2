//! Canvas engine: the shape store, the spatial index and the render sink,
//! kept consistent with each other.

mod operations;

use std::collections::BTreeMap;

use sketchpad_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, SEARCH_RADIUS};
use sketchpad_core::{Point, Rgba};
use tracing::{debug, warn};

use crate::matrix::Matrix;
use crate::model::{ColoredPoint, Drawable, Shape, ShapeId};
use crate::pipeline::{register_into, unregister_from, RenderSink};

/// Dimensions and lookup parameters of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasOptions {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    /// Exclusive upper bound of the ring radius scanned when picking.
    pub search_radius: u32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background: Rgba::BLACK,
            search_radius: SEARCH_RADIUS,
        }
    }
}

/// Shapes on the canvas plus the pixel index describing how they are drawn.
///
/// Every stored shape has exactly one index entry per point its stream
/// emits inside the canvas, and every change to the index is forwarded to
/// the render sink.
#[derive(Debug, Clone)]
pub struct Canvas {
    options: CanvasOptions,
    matrix: Matrix,
    shapes: BTreeMap<ShapeId, Shape>,
    next_id: u64,
    sink: RenderSink,
}

impl Canvas {
    /// Creates an empty canvas drawing through `sink`.
    pub fn new(options: CanvasOptions, sink: RenderSink) -> Self {
        Self {
            options,
            matrix: Matrix::new(
                options.width,
                options.height,
                options.background,
                options.search_radius,
            ),
            shapes: BTreeMap::new(),
            next_id: 0,
            sink,
        }
    }

    /// Creates a canvas whose drawing goes nowhere.
    pub fn headless(options: CanvasOptions) -> Self {
        Self::new(options, RenderSink::detached())
    }

    pub fn options(&self) -> &CanvasOptions {
        &self.options
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Hands out the next id. Ids are never reused.
    pub fn reserve_id(&mut self) -> ShapeId {
        self.next_id += 1;
        ShapeId(self.next_id)
    }

    /// Draws `shape`, indexes its pixels and stores it. A shape without an
    /// id gets a fresh one. A shape already stored under the same id is
    /// erased first.
    pub fn register(&mut self, mut shape: Shape) -> ShapeId {
        self.index(&mut shape);
        let id = shape.id();
        self.shapes.insert(id, shape);
        id
    }

    /// Like [`Canvas::register`], but a shape that lands on no canvas pixel
    /// is not stored, since nothing could ever pick it.
    pub fn register_visible(&mut self, mut shape: Shape) -> Option<ShapeId> {
        if self.index(&mut shape) == 0 {
            debug!("{} covers no canvas pixel, not stored", shape.kind());
            return None;
        }
        let id = shape.id();
        self.shapes.insert(id, shape);
        Some(id)
    }

    /// Draws and indexes `points` under `id` without storing a shape. Used
    /// for shapes whose outline is committed piece by piece.
    pub fn register_points<I>(&mut self, id: ShapeId, points: I) -> usize
    where
        I: IntoIterator<Item = ColoredPoint>,
    {
        let batch = register_into(&mut self.matrix, id, points);
        let count = batch.len();
        self.sink.send(batch);
        count
    }

    /// Stores a shape whose pixels were already registered under its id.
    /// A shape already stored under that id is erased first.
    pub fn adopt(&mut self, mut shape: Shape) -> ShapeId {
        if !shape.id().is_assigned() {
            let id = self.reserve_id();
            shape.set_id(id);
        }
        let id = shape.id();
        self.evict(id);
        self.shapes.insert(id, shape);
        id
    }

    /// Removes a shape and repaints its pixels with whatever lies beneath.
    pub fn delete(&mut self, id: ShapeId) -> Option<Shape> {
        let shape = self.shapes.remove(&id)?;
        self.erase(&shape);
        Some(shape)
    }

    /// Shape drawn nearest to `point` and the pixel where it was found.
    pub fn pick(&self, point: Point) -> Option<(ShapeId, Point)> {
        self.matrix.nearest_shape(point)
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Stored shapes in id order, which is the order they were created in.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Drops the render sink so the compositor can finish. Later changes
    /// still update the index but are no longer drawn.
    pub fn close_render_sink(&mut self) {
        self.sink = RenderSink::detached();
    }

    /// Assigns an id if needed, then draws and indexes the shape without
    /// storing it. Returns the number of pixels indexed.
    fn index(&mut self, shape: &mut Shape) -> usize {
        if !shape.id().is_assigned() {
            let id = self.reserve_id();
            shape.set_id(id);
        }
        let id = shape.id();
        self.evict(id);
        let batch = register_into(&mut self.matrix, id, shape.points());
        let count = batch.len();
        debug!("registered {} {} ({} pixels)", shape.kind(), id, count);
        self.sink.send(batch);
        count
    }

    fn evict(&mut self, id: ShapeId) {
        if let Some(stale) = self.shapes.remove(&id) {
            warn!("{} already stored, erasing the old {}", id, stale.kind());
            self.erase(&stale);
        }
    }

    fn erase(&mut self, shape: &Shape) {
        let batch = unregister_from(&mut self.matrix, shape.id(), shape.points());
        debug!("unregistered {} {} ({} pixels)", shape.kind(), shape.id(), batch.len());
        self.sink.send(batch);
    }
}
