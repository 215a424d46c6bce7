use std::ops::{Add, Mul};

use ordered_float::NotNan;

use crate::geometry::primitives::Point;

/// Proper rigid transformation of the plane in homogeneous matrix form.
/// Composed left to right: every builder call is applied after the previous ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformation {
    matrix: [[NotNan<f64>; 3]; 3],
}

impl Transformation {
    pub fn from_translation((tx, ty): (f64, f64)) -> Self {
        Self {
            matrix: transl_m((tx, ty)),
        }
    }

    /// Rotation around `pivot`, counterclockwise for positive angles
    pub fn from_rotation_about(angle: f64, Point(px, py): Point) -> Self {
        Self::from_translation((-px, -py))
            .rotate(angle)
            .translate((px, py))
    }

    /// Follows up with a rotation around the origin
    pub fn rotate(mut self, angle: f64) -> Self {
        self.matrix = mat_mul(&rot_m(angle), &self.matrix);
        self
    }

    /// Follows up with a translation
    pub fn translate(mut self, (tx, ty): (f64, f64)) -> Self {
        self.matrix = mat_mul(&transl_m((tx, ty)), &self.matrix);
        self
    }

    /// Image of `p` under the transformation
    pub fn apply(&self, Point(x, y): Point) -> Point {
        let [r0, r1, _] = self.matrix.map(|row| row.map(NotNan::into_inner));
        Point(
            r0[0] * x + r0[1] * y + r0[2],
            r1[0] * x + r1[1] * y + r1[2],
        )
    }
}

const _0: NotNan<f64> = unsafe { NotNan::new_unchecked(0.0) };
const _1: NotNan<f64> = unsafe { NotNan::new_unchecked(1.0) };

fn rot_m(angle: f64) -> [[NotNan<f64>; 3]; 3] {
    let (sin, cos) = angle.sin_cos();
    let cos = NotNan::new(cos).expect("cos is NaN");
    let sin = NotNan::new(sin).expect("sin is NaN");

    [[cos, -sin, _0], [sin, cos, _0], [_0, _0, _1]]
}

fn transl_m((tx, ty): (f64, f64)) -> [[NotNan<f64>; 3]; 3] {
    let h = NotNan::new(tx).expect("tx is NaN");
    let k = NotNan::new(ty).expect("ty is NaN");

    [[_1, _0, h], [_0, _1, k], [_0, _0, _1]]
}

/// `l · r`
fn mat_mul<T>(l: &[[T; 3]; 3], r: &[[T; 3]; 3]) -> [[T; 3]; 3]
where
    T: Add<Output = T> + Mul<Output = T> + Copy,
{
    std::array::from_fn(|i| {
        std::array::from_fn(|j| l[i][0] * r[0][j] + l[i][1] * r[1][j] + l[i][2] * r[2][j])
    })
}
