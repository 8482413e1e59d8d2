use sketchpad_core::{FigureProperties, Point};

use super::line::LineRaster;
use super::{ColoredPoint, Drawable, PointStream, ShapeId, ShapeKind};

/// Closed outline through `vertices` in order, last vertex joined back to
/// the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
    pub props: FigureProperties,
    id: ShapeId,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>, props: FigureProperties) -> Self {
        Self {
            vertices,
            props,
            id: ShapeId::UNASSIGNED,
        }
    }

    /// Edges in drawing order, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

impl Drawable for Polygon {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn set_id(&mut self, id: ShapeId) {
        self.id = id;
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn points(&self) -> PointStream<'_> {
        let props = self.props;
        Box::new(
            self.edges()
                .flat_map(move |(a, b)| LineRaster::new(a, b, props)),
        )
    }

    fn map_points(&mut self, f: &mut dyn FnMut(Point) -> Point) {
        for v in &mut self.vertices {
            *v = f(*v);
        }
    }
}

/// Rasterizes a closed outline through owned `vertices`.
pub(crate) fn outline(
    vertices: Vec<Point>,
    props: FigureProperties,
) -> impl Iterator<Item = ColoredPoint> {
    let n = vertices.len();
    let count = if n < 2 { 0 } else { n };
    (0..count).flat_map(move |i| LineRaster::new(vertices[i], vertices[(i + 1) % n], props))
}
