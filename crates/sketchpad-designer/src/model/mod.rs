use std::fmt;

use sketchpad_core::geometry::rotate_about;
use sketchpad_core::{Point, Rgba};

mod arc;
mod circle;
mod group;
mod line;
mod polygon;
mod regular_polygon;

pub use arc::CircleArc;
pub use circle::Circle;
pub use group::Grouping;
pub use line::{Line, LineRaster};
pub use polygon::Polygon;
pub use regular_polygon::RegularPolygon;

pub(crate) use polygon::outline;

/// Identity of a shape on the canvas. Ids are handed out in increasing
/// order and never reused; `UNASSIGNED` marks a shape still under
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ShapeId(pub u64);

impl ShapeId {
    pub const UNASSIGNED: ShapeId = ShapeId(0);

    pub fn is_assigned(&self) -> bool {
        *self != Self::UNASSIGNED
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One pixel produced by a shape: where, which color, and which shape owns
/// it once registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColoredPoint {
    pub point: Point,
    pub color: Rgba,
    pub owner: Option<ShapeId>,
}

impl ColoredPoint {
    pub fn new(point: Point, color: Rgba) -> Self {
        Self {
            point,
            color,
            owner: None,
        }
    }

    pub fn owned_by(self, owner: ShapeId) -> Self {
        Self {
            owner: Some(owner),
            ..self
        }
    }
}

/// Lazy, finite sequence of a shape's pixels. Consumed once.
pub type PointStream<'a> = Box<dyn Iterator<Item = ColoredPoint> + 'a>;

/// Line of reflection parallel to a canvas axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflection {
    /// Across the horizontal line `y = c`
    Horizontal(i32),
    /// Across the vertical line `x = c`
    Vertical(i32),
}

impl Reflection {
    pub fn apply(&self, p: Point) -> Point {
        match *self {
            Reflection::Horizontal(y) => p.reflected_across_horizontal(y),
            Reflection::Vertical(x) => p.reflected_across_vertical(x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Polygon,
    RegularPolygon,
    Circle,
    CircleArc,
    Grouping,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Line => "line",
            ShapeKind::Polygon => "polygon",
            ShapeKind::RegularPolygon => "regular polygon",
            ShapeKind::Circle => "circle",
            ShapeKind::CircleArc => "arc",
            ShapeKind::Grouping => "group",
        };
        f.write_str(name)
    }
}

/// Operations every shape kind supports.
pub trait Drawable {
    fn id(&self) -> ShapeId;
    fn set_id(&mut self, id: ShapeId);
    fn kind(&self) -> ShapeKind;

    /// Rasterizes the shape under its current geometry and style. Pure:
    /// the spatial index is untouched.
    fn points(&self) -> PointStream<'_>;

    /// Applies `f` to every point that defines the geometry.
    fn map_points(&mut self, f: &mut dyn FnMut(Point) -> Point);

    fn translate(&mut self, delta: Point) {
        self.map_points(&mut |p| p + delta);
    }

    fn rotate(&mut self, origin: Point, angle: f64) {
        self.map_points(&mut |p| rotate_about(p, origin, angle));
    }

    fn reflect(&mut self, axis: Reflection) {
        self.map_points(&mut |p| axis.apply(p));
    }
}

/// A shape on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Polygon(Polygon),
    RegularPolygon(RegularPolygon),
    Circle(Circle),
    CircleArc(CircleArc),
    Grouping(Grouping),
}

impl Shape {
    pub fn as_grouping(&self) -> Option<&Grouping> {
        match self {
            Shape::Grouping(g) => Some(g),
            _ => None,
        }
    }

    /// Deep copy carrying `id`.
    pub fn duplicate(&self, id: ShapeId) -> Shape {
        let mut copy = self.clone();
        copy.set_id(id);
        copy
    }
}

impl Drawable for Shape {
    fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id(),
            Shape::Polygon(s) => s.id(),
            Shape::RegularPolygon(s) => s.id(),
            Shape::Circle(s) => s.id(),
            Shape::CircleArc(s) => s.id(),
            Shape::Grouping(s) => s.id(),
        }
    }

    fn set_id(&mut self, id: ShapeId) {
        match self {
            Shape::Line(s) => s.set_id(id),
            Shape::Polygon(s) => s.set_id(id),
            Shape::RegularPolygon(s) => s.set_id(id),
            Shape::Circle(s) => s.set_id(id),
            Shape::CircleArc(s) => s.set_id(id),
            Shape::Grouping(s) => s.set_id(id),
        }
    }

    fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(s) => s.kind(),
            Shape::Polygon(s) => s.kind(),
            Shape::RegularPolygon(s) => s.kind(),
            Shape::Circle(s) => s.kind(),
            Shape::CircleArc(s) => s.kind(),
            Shape::Grouping(s) => s.kind(),
        }
    }

    fn points(&self) -> PointStream<'_> {
        match self {
            Shape::Line(s) => s.points(),
            Shape::Polygon(s) => s.points(),
            Shape::RegularPolygon(s) => s.points(),
            Shape::Circle(s) => s.points(),
            Shape::CircleArc(s) => s.points(),
            Shape::Grouping(s) => s.points(),
        }
    }

    fn map_points(&mut self, f: &mut dyn FnMut(Point) -> Point) {
        match self {
            Shape::Line(s) => s.map_points(f),
            Shape::Polygon(s) => s.map_points(f),
            Shape::RegularPolygon(s) => s.map_points(f),
            Shape::Circle(s) => s.map_points(f),
            Shape::CircleArc(s) => s.map_points(f),
            Shape::Grouping(s) => s.map_points(f),
        }
    }

    fn reflect(&mut self, axis: Reflection) {
        match self {
            Shape::Line(s) => s.reflect(axis),
            Shape::Polygon(s) => s.reflect(axis),
            Shape::RegularPolygon(s) => s.reflect(axis),
            Shape::Circle(s) => s.reflect(axis),
            Shape::CircleArc(s) => s.reflect(axis),
            Shape::Grouping(s) => s.reflect(axis),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_variant!(Line, Polygon, RegularPolygon, Circle, CircleArc, Grouping);

/// Sides used to approximate a circle of `radius`.
pub(crate) fn approximation_sides(radius: f64) -> u32 {
    use sketchpad_core::constants::{CIRCLE_SIDES_PER_RADIUS, MAX_CIRCLE_SIDES, MIN_POLYGON_SIDES};
    ((CIRCLE_SIDES_PER_RADIUS * radius).floor() as u32).clamp(MIN_POLYGON_SIDES, MAX_CIRCLE_SIDES)
}
