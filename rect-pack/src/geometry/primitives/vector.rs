use std::f64::consts::TAU;
use std::ops::{Add, Mul, Neg, Sub};

use anyhow::{Result, ensure};

/// Displacement in the plane
#[derive(Debug, Clone, PartialEq, Copy, Default)]
pub struct Vector(pub f64, pub f64);

impl Vector {
    pub const X_AXIS: Vector = Vector(1.0, 0.0);
    pub const Y_AXIS: Vector = Vector(0.0, 1.0);

    pub fn norm(&self) -> f64 {
        self.0.hypot(self.1)
    }

    /// Returns the vector scaled to unit length.
    /// Fails for zero-length or non-finite vectors, which have no direction.
    pub fn unitize(&self) -> Result<Vector> {
        let norm = self.norm();
        ensure!(
            norm.is_finite() && norm > 0.0,
            "cannot unitize vector without direction: {self:?}"
        );
        Ok(Vector(self.0 / norm, self.1 / norm))
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    /// z-component of the 3D cross product of `self` and `other`
    pub fn cross(&self, other: &Vector) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    /// Unsigned angle between `self` and `other`, in `[0, π]`
    pub fn angle_to(&self, other: &Vector) -> f64 {
        self.cross(other).abs().atan2(self.dot(other))
    }

    /// Counterclockwise angle from the world X-axis to `self`, in `[0, 2π)`.
    /// The sign of the cross product with the X-axis decides which half-plane `self` lies in.
    pub fn signed_angle_from_x(&self) -> f64 {
        let angle = Vector::X_AXIS
            .cross(self)
            .atan2(Vector::X_AXIS.dot(self));
        match angle {
            a if a < 0.0 => {
                let wrapped = a + TAU;
                //tiny negative angles round up to exactly 2π
                if wrapped >= TAU { 0.0 } else { wrapped }
            }
            a => a,
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector(self.0 - other.0, self.1 - other.1)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, factor: f64) -> Vector {
        Vector(self.0 * factor, self.1 * factor)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0, -self.1)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> Self {
        (v.0, v.1)
    }
}

impl From<(f64, f64)> for Vector {
    fn from(v: (f64, f64)) -> Self {
        Vector(v.0, v.1)
    }
}
