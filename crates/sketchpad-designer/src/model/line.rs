use sketchpad_core::{DashStyle, FigureProperties, Point};

use super::{ColoredPoint, Drawable, PointStream, ShapeId, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub props: FigureProperties,
    id: ShapeId,
}

impl Line {
    pub fn new(start: Point, end: Point, props: FigureProperties) -> Self {
        Self {
            start,
            end,
            props,
            id: ShapeId::UNASSIGNED,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

impl Drawable for Line {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn set_id(&mut self, id: ShapeId) {
        self.id = id;
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn points(&self) -> PointStream<'_> {
        Box::new(LineRaster::new(self.start, self.end, self.props))
    }

    fn map_points(&mut self, f: &mut dyn FnMut(Point) -> Point) {
        self.start = f(self.start);
        self.end = f(self.end);
    }
}

/// Bresenham rasterizer for one segment.
///
/// Works on axis-swapped coordinates when the segment is steep and always
/// walks the major axis upwards. The last step (`x == end.x` in the walked
/// frame) is not emitted. Deltas and the error term are `i64`, so any pair
/// of `i32` endpoints is safe.
#[derive(Debug, Clone)]
pub struct LineRaster {
    steep: bool,
    start_x: i32,
    end_x: i32,
    x: i32,
    y: i32,
    y_step: i32,
    delta_x: i64,
    delta_y: i64,
    error: i64,
    dash_segments: i64,
    props: FigureProperties,
    pending: Option<ColoredPoint>,
}

impl LineRaster {
    pub fn new(start: Point, end: Point, props: FigureProperties) -> Self {
        let (mut start, mut end) = (start, end);
        let span = |a: i32, b: i32| (i64::from(b) - i64::from(a)).abs();
        let steep = span(start.y, end.y) > span(start.x, end.x);
        if steep {
            start = Point::new(start.y, start.x);
            end = Point::new(end.y, end.x);
        }
        if start.x > end.x {
            std::mem::swap(&mut start, &mut end);
        }

        let delta_x = span(start.x, end.x);
        let delta_y = span(start.y, end.y);
        let y_step = if start.y > end.y { -1 } else { 1 };

        let mut dash_segments = delta_x / 10;
        if dash_segments % 2 == 0 {
            dash_segments += 1;
        }

        Self {
            steep,
            start_x: start.x,
            end_x: end.x,
            x: start.x,
            y: start.y,
            y_step,
            delta_x,
            delta_y,
            error: delta_x / 2,
            dash_segments,
            props,
            pending: None,
        }
    }

    fn visible(&self, progress: i64) -> bool {
        match self.props.dash {
            DashStyle::Solid => true,
            DashStyle::Dotted => progress % 4 < 2,
            DashStyle::Dashed => {
                let period = 2 * self.delta_x;
                (progress * self.dash_segments) % period <= 10 * self.dash_segments
            }
        }
    }

    fn plot(&self, x: i32, y: i32) -> ColoredPoint {
        let point = if self.steep {
            Point::new(y, x)
        } else {
            Point::new(x, y)
        };
        ColoredPoint::new(point, self.props.color)
    }
}

impl Iterator for LineRaster {
    type Item = ColoredPoint;

    fn next(&mut self) -> Option<ColoredPoint> {
        if let Some(extra) = self.pending.take() {
            return Some(extra);
        }
        while self.x < self.end_x {
            let (x, y) = (self.x, self.y);
            self.error -= self.delta_y;
            if self.error < 0 {
                self.y += self.y_step;
                self.error += self.delta_x;
            }
            self.x += 1;

            if !self.visible(i64::from(x) - i64::from(self.start_x)) {
                continue;
            }
            if self.props.thick {
                self.pending = Some(self.plot(x, y.saturating_add(1)));
            }
            return Some(self.plot(x, y));
        }
        None
    }
}
