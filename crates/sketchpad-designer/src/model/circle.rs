use sketchpad_core::{FigureProperties, Point};

use super::regular_polygon::vertices;
use super::{approximation_sides, outline, Drawable, PointStream, ShapeId, ShapeKind};

/// Circle through `start`, drawn as a regular polygon whose side count
/// grows with the radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub start: Point,
    pub props: FigureProperties,
    id: ShapeId,
}

impl Circle {
    pub fn new(center: Point, start: Point, props: FigureProperties) -> Self {
        Self {
            center,
            start,
            props,
            id: ShapeId::UNASSIGNED,
        }
    }

    pub fn radius(&self) -> f64 {
        self.center.distance_to(&self.start)
    }

    pub fn sides(&self) -> u32 {
        approximation_sides(self.radius())
    }
}

impl Drawable for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn set_id(&mut self, id: ShapeId) {
        self.id = id;
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn points(&self) -> PointStream<'_> {
        Box::new(outline(
            vertices(self.center, self.start, self.sides()),
            self.props,
        ))
    }

    fn map_points(&mut self, f: &mut dyn FnMut(Point) -> Point) {
        self.center = f(self.center);
        self.start = f(self.start);
    }
}
