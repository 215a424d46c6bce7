use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{DistanceTo, Transformable};
use crate::geometry::primitives::Vector;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Point(pub f64, pub f64);

impl Point {
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl Transformable for Point {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        *self = t.apply(*self);
        self
    }
}

impl DistanceTo<Point> for Point {
    #[inline(always)]
    fn distance_to(&self, other: &Point) -> f64 {
        (*other - *self).norm()
    }

    #[inline(always)]
    fn sq_distance_to(&self, other: &Point) -> f64 {
        let v = *other - *self;
        v.dot(&v)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector(self.0 - other.0, self.1 - other.1)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point(self.0 + v.0, self.1 + v.1)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let x = self.0.to_bits();
        let y = self.1.to_bits();
        x.hash(state);
        y.hash(state);
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

/// Position vector of the point, measured from the world origin
impl From<Point> for Vector {
    fn from(p: Point) -> Self {
        Vector(p.0, p.1)
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point(p.0, p.1)
    }
}
