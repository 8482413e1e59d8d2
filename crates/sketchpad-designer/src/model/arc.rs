use std::f64::consts::TAU;

use sketchpad_core::{FigureProperties, Point};

use super::line::LineRaster;
use super::{approximation_sides, Drawable, PointStream, Reflection, ShapeId, ShapeKind};

/// Open arc around `center` starting at `start` and sweeping `sweep`
/// radians (positive towards +y).
#[derive(Debug, Clone, PartialEq)]
pub struct CircleArc {
    pub center: Point,
    pub start: Point,
    pub sweep: f64,
    pub props: FigureProperties,
    id: ShapeId,
}

impl CircleArc {
    pub fn new(center: Point, start: Point, sweep: f64, props: FigureProperties) -> Self {
        Self {
            center,
            start,
            sweep,
            props,
            id: ShapeId::UNASSIGNED,
        }
    }

    pub fn radius(&self) -> f64 {
        self.center.distance_to(&self.start)
    }

    /// Number of chords: the share of a full circle's sides this arc covers.
    pub fn segments(&self) -> usize {
        if !self.sweep.is_finite() || self.sweep == 0.0 {
            return 0;
        }
        let full = f64::from(approximation_sides(self.radius()));
        // shave rounding noise so exact fractions of a turn don't gain a chord
        ((full * self.sweep.abs() / TAU) - 1e-9).ceil().max(1.0) as usize
    }

    /// Chord endpoints from `start` to the end of the sweep.
    pub fn vertices(&self) -> Vec<Point> {
        let segments = self.segments();
        if segments == 0 {
            return Vec::new();
        }
        let radius = self.radius();
        let first = self.start.angle_from(self.center);
        let step = self.sweep / segments as f64;
        (0..=segments)
            .map(|k| self.center.polar_offset(radius, first + k as f64 * step))
            .collect()
    }
}

impl Drawable for CircleArc {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn set_id(&mut self, id: ShapeId) {
        self.id = id;
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::CircleArc
    }

    fn points(&self) -> PointStream<'_> {
        let vertices = self.vertices();
        let props = self.props;
        let chords = vertices.len().saturating_sub(1);
        Box::new((0..chords).flat_map(move |i| LineRaster::new(vertices[i], vertices[i + 1], props)))
    }

    fn map_points(&mut self, f: &mut dyn FnMut(Point) -> Point) {
        self.center = f(self.center);
        self.start = f(self.start);
    }

    fn reflect(&mut self, axis: Reflection) {
        self.map_points(&mut |p| axis.apply(p));
        self.sweep = -self.sweep;
    }
}
