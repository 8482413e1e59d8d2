//! Per-pixel spatial index.
//!
//! Every registered pixel of every shape is pushed onto the stack of the
//! cell it lands in. The top of a stack is what the surface currently
//! shows at that pixel, which makes both hit-testing (who is drawn here?)
//! and erasure (what was drawn underneath?) a constant-time lookup.

use smallvec::SmallVec;
use sketchpad_core::{Point, Rgba};

use crate::model::{ColoredPoint, ShapeId};

/// Entries of one pixel, bottom first. Most pixels hold one or two.
type Cell = SmallVec<[ColoredPoint; 2]>;

/// Fixed-size grid of per-pixel LIFO stacks.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    width: u32,
    height: u32,
    background: Rgba,
    search_radius: u32,
    cells: Vec<Cell>,
}

impl Matrix {
    /// Creates an empty grid. `search_radius` bounds (exclusively) the
    /// ring search done by [`Matrix::nearest_shape`].
    pub fn new(width: u32, height: u32, background: Rgba, search_radius: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            background,
            search_radius,
            cells: vec![Cell::new(); len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn search_radius(&self) -> u32 {
        self.search_radius
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        self.offset(point).is_some()
    }

    /// Pushes `entry` on top of its cell. Points off the grid are ignored.
    pub fn push(&mut self, entry: ColoredPoint) {
        match self.offset(entry.point) {
            Some(i) => self.cells[i].push(entry),
            None => tracing::trace!("ignoring out-of-bounds entry at {}", entry.point),
        }
    }

    /// Owner of the topmost entry at `point`.
    pub fn top_owner(&self, point: Point) -> Option<ShapeId> {
        self.cell(point)
            .and_then(|cell| cell.last())
            .and_then(|entry| entry.owner)
    }

    /// The entry currently visible at `point`, or a background entry when
    /// the cell is empty or off the grid.
    pub fn top_colored_point(&self, point: Point) -> ColoredPoint {
        self.cell(point)
            .and_then(|cell| cell.last().copied())
            .unwrap_or_else(|| ColoredPoint::new(point, self.background))
    }

    /// Removes the topmost entry at `point` owned by `id`. Returns whether
    /// one was found.
    pub fn remove_owned(&mut self, point: Point, id: ShapeId) -> bool {
        let Some(i) = self.offset(point) else {
            return false;
        };
        let cell = &mut self.cells[i];
        match cell.iter().rposition(|entry| entry.owner == Some(id)) {
            Some(pos) => {
                cell.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Finds the shape drawn closest to `point`.
    ///
    /// Square rings of growing radius are scanned, from 0 up to (but not
    /// including) the search radius. Within a ring cells are visited
    /// column by column, top to bottom; cells off the grid are skipped.
    /// Returns the top owner of the first occupied cell and that cell's
    /// coordinate.
    pub fn nearest_shape(&self, point: Point) -> Option<(ShapeId, Point)> {
        let radius = i32::try_from(self.search_radius).unwrap_or(i32::MAX);
        for r in 0..radius {
            for x in point.x - r..=point.x + r {
                for y in point.y - r..=point.y + r {
                    if (x - point.x).abs() != r && (y - point.y).abs() != r {
                        continue;
                    }
                    let candidate = Point::new(x, y);
                    if let Some(owner) = self.top_owner(candidate) {
                        return Some((owner, candidate));
                    }
                }
            }
        }
        None
    }

    /// Number of entries stacked at `point`.
    pub fn depth(&self, point: Point) -> usize {
        self.cell(point).map_or(0, |cell| cell.len())
    }

    /// Entries at `point`, bottom first.
    pub fn entries(&self, point: Point) -> &[ColoredPoint] {
        self.cell(point).map_or(&[], |cell| cell.as_slice())
    }

    /// Total number of entries owned by `id` across the grid.
    pub fn occupancy(&self, id: ShapeId) -> usize {
        self.cells
            .iter()
            .flat_map(|cell| cell.iter())
            .filter(|entry| entry.owner == Some(id))
            .count()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    fn cell(&self, point: Point) -> Option<&Cell> {
        self.offset(point).map(|i| &self.cells[i])
    }

    fn offset(&self, point: Point) -> Option<usize> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}
