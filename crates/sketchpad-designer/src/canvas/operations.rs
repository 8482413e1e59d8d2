//! Shape manipulation operations for Canvas.

use std::f64::consts::FRAC_PI_2;

use sketchpad_core::geometry::angle_from;
use sketchpad_core::Point;
use tracing::{debug, warn};

use super::Canvas;
use crate::model::{Drawable, Grouping, Reflection, Shape, ShapeId};

impl Canvas {
    /// Moves a shape by `delta`, keeping its id.
    pub fn translate(&mut self, id: ShapeId, delta: Point) -> bool {
        self.redraw_with(id, |shape| shape.translate(delta))
    }

    /// Rotates a shape by `angle` radians about `origin`, keeping its id.
    pub fn rotate(&mut self, id: ShapeId, origin: Point, angle: f64) -> bool {
        self.redraw_with(id, |shape| shape.rotate(origin, angle))
    }

    /// Registers a mirror image of a shape across the line through `p1`
    /// and `p2`. The original stays as it is.
    ///
    /// The copy is rotated so the axis lies along whichever canvas axis it
    /// is closer to, reflected there, and rotated back.
    pub fn mirror(&mut self, id: ShapeId, p1: Point, p2: Point) -> Option<ShapeId> {
        if p1 == p2 {
            warn!("mirror axis through {} is degenerate", p1);
            return None;
        }
        let mut copy = self.clone_shape(id)?;
        let theta = angle_from(p1, p2);
        if theta.sin().abs() < theta.cos().abs() {
            copy.rotate(p1, -theta);
            copy.reflect(Reflection::Horizontal(p1.y));
            copy.rotate(p1, theta);
        } else {
            let turn = FRAC_PI_2 - theta;
            copy.rotate(p1, turn);
            copy.reflect(Reflection::Vertical(p1.x));
            copy.rotate(p1, -turn);
        }
        Some(self.register(copy))
    }

    /// Deep copy of a shape under a fresh id. Not registered.
    pub fn clone_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let shape = self.shapes.get(&id)?.clone();
        let fresh = self.reserve_id();
        Some(shape.duplicate(fresh))
    }

    /// Replaces the given shapes with one group owning them.
    ///
    /// Unknown and repeated ids are skipped; at least two distinct shapes
    /// are needed.
    pub fn group(&mut self, ids: &[ShapeId]) -> Option<ShapeId> {
        let mut members_ids: Vec<ShapeId> = Vec::with_capacity(ids.len());
        for id in ids {
            if self.shapes.contains_key(id) && !members_ids.contains(id) {
                members_ids.push(*id);
            }
        }
        if members_ids.len() < 2 {
            warn!("group needs two shapes, got {}", members_ids.len());
            return None;
        }

        let members: Vec<Shape> = members_ids
            .iter()
            .filter_map(|id| self.delete(*id))
            .collect();
        Some(self.register(Grouping::new(members).into()))
    }

    /// Splits a group into independent shapes, each with a fresh id, and
    /// deletes the group. Returns the new ids; empty if `id` is not a group.
    pub fn ungroup(&mut self, id: ShapeId) -> Vec<ShapeId> {
        let members = match self.shapes.get(&id) {
            Some(Shape::Grouping(group)) => group.members.clone(),
            Some(other) => {
                debug!("{} is a {}, not a group", id, other.kind());
                return Vec::new();
            }
            None => return Vec::new(),
        };

        let ids: Vec<ShapeId> = members
            .into_iter()
            .map(|member| {
                let fresh = self.reserve_id();
                self.register(member.duplicate(fresh))
            })
            .collect();
        self.delete(id);
        ids
    }

    fn redraw_with(&mut self, id: ShapeId, change: impl FnOnce(&mut Shape)) -> bool {
        let Some(mut shape) = self.shapes.remove(&id) else {
            return false;
        };
        self.erase(&shape);
        change(&mut shape);
        self.register(shape);
        true
    }
}
