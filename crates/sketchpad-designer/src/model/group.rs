use sketchpad_core::Point;

use super::{Drawable, PointStream, Reflection, Shape, ShapeId, ShapeKind};

/// Composite shape. Members are owned outright and have no index entries of
/// their own; the group registers their pixels under its id.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    pub members: Vec<Shape>,
    id: ShapeId,
}

impl Grouping {
    pub fn new(members: Vec<Shape>) -> Self {
        Self {
            members,
            id: ShapeId::UNASSIGNED,
        }
    }

    pub fn members(&self) -> &[Shape] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Drawable for Grouping {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn set_id(&mut self, id: ShapeId) {
        self.id = id;
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Grouping
    }

    fn points(&self) -> PointStream<'_> {
        Box::new(self.members.iter().flat_map(|m| m.points()))
    }

    fn map_points(&mut self, f: &mut dyn FnMut(Point) -> Point) {
        for member in &mut self.members {
            member.map_points(f);
        }
    }

    // arcs flip their sweep, so delegate instead of mapping points
    fn reflect(&mut self, axis: Reflection) {
        for member in &mut self.members {
            member.reflect(axis);
        }
    }
}
