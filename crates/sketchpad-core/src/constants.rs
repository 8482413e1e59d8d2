//! Fixed defaults shared across the workspace.

/// Default canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 800;

/// Default canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 600;

/// Largest radius, exclusive, scanned when picking a shape near a click.
pub const SEARCH_RADIUS: u32 = 10;

/// Maximum number of clicks accepted while drawing one polygon.
pub const MAX_POLYGON_VERTICES: usize = 50;

/// Sides used to approximate a circle, per pixel of radius.
pub const CIRCLE_SIDES_PER_RADIUS: f64 = 0.4;

/// Fewest sides a polygon approximation may have.
pub const MIN_POLYGON_SIDES: u32 = 3;

/// Initial value of the regular polygon side counter.
pub const DEFAULT_POLYGON_SIDES: u32 = 5;

/// Largest coordinate magnitude accepted from input. Clicks beyond it are
/// pulled back onto the limit.
pub const COORDINATE_LIMIT: i32 = 1 << 16;

/// Most sides used to approximate a circle, however large.
pub const MAX_CIRCLE_SIDES: u32 = 1 << 12;
