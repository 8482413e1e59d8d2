//! Shape creation commands.

use sketchpad_core::constants::MIN_POLYGON_SIDES;
use sketchpad_core::Point;
use tracing::{debug, info, warn};

use super::{Dispatcher, Input};
use crate::model::{Circle, CircleArc, Drawable, Line, LineRaster, Polygon, RegularPolygon};

impl Dispatcher {
    /// Two clicks: start and end.
    pub(super) async fn draw_line(&mut self) {
        let props = self.style.figure();
        let Some(start) = self.click().await else { return };
        let Some(end) = self.click().await else { return };
        match self.canvas.register_visible(Line::new(start, end, props).into()) {
            Some(id) => info!("line {} from {} to {}", id, start, end),
            None => info!("line from {} to {} draws nothing, dropped", start, end),
        }
    }

    /// Clicks add vertices until a key is pressed or the vertex limit is
    /// reached. Each edge is drawn as soon as its second vertex is known;
    /// the closing edge is drawn when the polygon is finished.
    pub(super) async fn draw_polygon(&mut self) {
        let props = self.style.figure();
        let id = self.canvas.reserve_id();
        let mut vertices: Vec<Point> = Vec::new();
        let mut drawn = 0;

        while vertices.len() < self.max_polygon_vertices {
            match self.input.next().await {
                Some(Input::Click(point)) => {
                    if let Some(&last) = vertices.last() {
                        drawn += self
                            .canvas
                            .register_points(id, LineRaster::new(last, point, props));
                    }
                    vertices.push(point);
                }
                Some(Input::Key(key)) => {
                    debug!("polygon {} finished by {}", id, key);
                    break;
                }
                None => break,
            }
        }

        if vertices.len() < 2 {
            debug!("polygon {} abandoned with {} vertices", id, vertices.len());
            return;
        }
        let (first, last) = (vertices[0], vertices[vertices.len() - 1]);
        drawn += self
            .canvas
            .register_points(id, LineRaster::new(last, first, props));
        if drawn == 0 {
            info!("polygon {} draws nothing, dropped", id);
            return;
        }

        let count = vertices.len();
        let mut polygon = Polygon::new(vertices, props);
        polygon.set_id(id);
        self.canvas.adopt(polygon.into());
        info!("polygon {} with {} vertices", id, count);
    }

    /// Origin, then one vertex. Needs the side counter at 3 or more.
    pub(super) async fn draw_regular_polygon(&mut self) {
        let sides = self.style.polygon_sides();
        if sides < MIN_POLYGON_SIDES {
            warn!("regular polygon needs at least {} sides, counter is {}", MIN_POLYGON_SIDES, sides);
            return;
        }
        let props = self.style.figure();
        let Some(origin) = self.click().await else { return };
        let Some(start) = self.click().await else { return };
        match self
            .canvas
            .register_visible(RegularPolygon::new(origin, start, sides, props).into())
        {
            Some(id) => info!("regular polygon {} with {} sides around {}", id, sides, origin),
            None => info!("regular polygon around {} draws nothing, dropped", origin),
        }
    }

    /// Center, then a point on the rim.
    pub(super) async fn draw_circle(&mut self) {
        let props = self.style.figure();
        let Some(center) = self.click().await else { return };
        let Some(start) = self.click().await else { return };
        match self.canvas.register_visible(Circle::new(center, start, props).into()) {
            Some(id) => info!("circle {} around {}", id, center),
            None => info!("circle around {} draws nothing, dropped", center),
        }
    }

    /// Center, start of the arc, then a point giving the end angle.
    pub(super) async fn draw_arc(&mut self) {
        let props = self.style.figure();
        let Some(center) = self.click().await else { return };
        let Some(start) = self.click().await else { return };
        let Some(end) = self.click().await else { return };
        let sweep = end.angle_from(center) - start.angle_from(center);
        match self
            .canvas
            .register_visible(CircleArc::new(center, start, sweep, props).into())
        {
            Some(id) => info!("arc {} around {} sweeping {:.3} rad", id, center, sweep),
            None => info!("arc around {} draws nothing, dropped", center),
        }
    }
}
