use std::f64::consts::TAU;

use sketchpad_core::{FigureProperties, Point};

use super::{outline, Drawable, PointStream, ShapeId, ShapeKind};

/// Regular polygon centred on `origin` with one vertex at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularPolygon {
    pub origin: Point,
    pub start: Point,
    pub sides: u32,
    pub props: FigureProperties,
    id: ShapeId,
}

impl RegularPolygon {
    pub fn new(origin: Point, start: Point, sides: u32, props: FigureProperties) -> Self {
        Self {
            origin,
            start,
            sides,
            props,
            id: ShapeId::UNASSIGNED,
        }
    }

    pub fn radius(&self) -> f64 {
        self.origin.distance_to(&self.start)
    }

    pub fn vertices(&self) -> Vec<Point> {
        vertices(self.origin, self.start, self.sides)
    }
}

/// `sides` points evenly spaced on the circle through `start`, beginning
/// at `start`.
pub(crate) fn vertices(origin: Point, start: Point, sides: u32) -> Vec<Point> {
    let radius = origin.distance_to(&start);
    let first = start.angle_from(origin);
    let step = TAU / f64::from(sides.max(1));
    (0..sides)
        .map(|k| origin.polar_offset(radius, first + f64::from(k) * step))
        .collect()
}

impl Drawable for RegularPolygon {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn set_id(&mut self, id: ShapeId) {
        self.id = id;
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::RegularPolygon
    }

    fn points(&self) -> PointStream<'_> {
        Box::new(outline(self.vertices(), self.props))
    }

    fn map_points(&mut self, f: &mut dyn FnMut(Point) -> Point) {
        self.origin = f(self.origin);
        self.start = f(self.start);
    }
}
