//! Geometry kernel
//!
//! Integer pixel points and the handful of pure functions every shape
//! kind is built on: distance, polar angle and rotation about an origin.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::COORDINATE_LIMIT;
use std::ops::{Add, Neg, Sub};

/// A pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(*self, *other)
    }

    /// Polar angle of this point seen from `origin`, in radians.
    pub fn angle_from(&self, origin: Point) -> f64 {
        angle_from(origin, *self)
    }

    /// This point with both coordinates pulled into
    /// `-COORDINATE_LIMIT..=COORDINATE_LIMIT`.
    pub fn clamped(&self) -> Point {
        Point::new(
            self.x.clamp(-COORDINATE_LIMIT, COORDINATE_LIMIT),
            self.y.clamp(-COORDINATE_LIMIT, COORDINATE_LIMIT),
        )
    }

    /// Point at `radius` and `angle` from `self`, rounded to the pixel grid.
    pub fn polar_offset(&self, radius: f64, angle: f64) -> Point {
        Point::new(
            (f64::from(self.x) + (radius * angle.cos()).round()) as i32,
            (f64::from(self.y) + (radius * angle.sin()).round()) as i32,
        )
    }

    /// Reflection across the horizontal line `y = axis_y`.
    pub fn reflected_across_horizontal(&self, axis_y: i32) -> Point {
        Point::new(self.x, 2 * axis_y - self.y)
    }

    /// Reflection across the vertical line `x = axis_x`.
    pub fn reflected_across_vertical(&self, axis_x: i32) -> Point {
        Point::new(2 * axis_x - self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// `sqrt(dx² + dy²)` between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = f64::from(p1.x) - f64::from(p2.x);
    let dy = f64::from(p1.y) - f64::from(p2.y);
    (dx * dx + dy * dy).sqrt()
}

/// Four-quadrant angle of `p - origin`, in `(-π, π]`.
pub fn angle_from(origin: Point, p: Point) -> f64 {
    let dx = f64::from(p.x) - f64::from(origin.x);
    let dy = f64::from(p.y) - f64::from(origin.y);
    dy.atan2(dx)
}

/// Rotates `point` about `origin` by `angle` radians.
///
/// The rotated offset is rounded to the nearest pixel, so quarter turns
/// land exactly on the grid.
pub fn rotate_about(point: Point, origin: Point, angle: f64) -> Point {
    let (sin_a, cos_a) = angle.sin_cos();
    let dx = f64::from(point.x) - f64::from(origin.x);
    let dy = f64::from(point.y) - f64::from(origin.y);
    let rx = f64::from(origin.x) + (dx * cos_a - dy * sin_a).round();
    let ry = f64::from(origin.y) + (dx * sin_a + dy * cos_a).round();
    Point::new(rx as i32, ry as i32)
}
