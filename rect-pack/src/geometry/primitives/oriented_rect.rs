use crate::geometry::Transformation;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::{Point, Vector};

const FRAME_TOLERANCE: f64 = 1e-9;

/// Local 2D reference frame: an origin and two orthogonal unit axes
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Frame {
    pub origin: Point,
    pub x_axis: Vector,
    pub y_axis: Vector,
}

impl Frame {
    /// Frame aligned with the world axes
    pub fn world(origin: Point) -> Self {
        Frame {
            origin,
            x_axis: Vector::X_AXIS,
            y_axis: Vector::Y_AXIS,
        }
    }

    /// Frame turned counterclockwise by `angle` radians relative to the world axes
    pub fn rotated(origin: Point, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Frame {
            origin,
            x_axis: Vector(cos, sin),
            y_axis: Vector(-sin, cos),
        }
    }

    /// Both axes have unit length, are perpendicular and form a right-handed frame
    pub fn is_orthonormal(&self) -> bool {
        (self.x_axis.norm() - 1.0).abs() < FRAME_TOLERANCE
            && (self.y_axis.norm() - 1.0).abs() < FRAME_TOLERANCE
            && self.x_axis.dot(&self.y_axis).abs() < FRAME_TOLERANCE
            && self.x_axis.cross(&self.y_axis) > 0.0
    }
}

impl Transformable for Frame {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Frame {
            origin,
            x_axis,
            y_axis,
        } = self;

        //axes are directions: transform their tips and measure from the new origin
        let x_tip = (*origin + *x_axis).transform_clone(t);
        let y_tip = (*origin + *y_axis).transform_clone(t);
        origin.transform(t);
        *x_axis = x_tip - *origin;
        *y_axis = y_tip - *origin;

        self
    }
}

/// Rectangle with arbitrary orientation, spanning `width` along the frame's x-axis
/// and `height` along its y-axis, with the frame origin as one of its corners.
/// Transformations return new values.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct ORect {
    pub frame: Frame,
    pub width: f64,
    pub height: f64,
}

impl ORect {
    pub fn new(frame: Frame, width: f64, height: f64) -> Self {
        ORect {
            frame,
            width,
            height,
        }
    }

    /// Rectangle aligned with the world axes, with its lower left corner at (`x_min`, `y_min`)
    pub fn axis_aligned(x_min: f64, y_min: f64, width: f64, height: f64) -> Self {
        ORect::new(Frame::world(Point(x_min, y_min)), width, height)
    }

    /// Finite, strictly positive dimensions and an orthonormal frame
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.frame.origin.is_finite()
            && self.frame.is_orthonormal()
    }

    /// The four corners, in traversal order starting at the frame origin
    pub fn corners(&self) -> [Point; 4] {
        let Frame {
            origin,
            x_axis,
            y_axis,
        } = self.frame;
        let w = x_axis * self.width;
        let h = y_axis * self.height;
        [origin, origin + w, origin + w + h, origin + h]
    }

    pub fn centroid(&self) -> Point {
        let Frame {
            origin,
            x_axis,
            y_axis,
        } = self.frame;
        origin + x_axis * (self.width / 2.0) + y_axis * (self.height / 2.0)
    }

    pub fn translate(&self, v: Vector) -> Self {
        self.transform_clone(&Transformation::from_translation(v.into()))
    }

    pub fn rotate_about(&self, angle: f64, pivot: Point) -> Self {
        self.transform_clone(&Transformation::from_rotation_about(angle, pivot))
    }
}

impl Transformable for ORect {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        self.frame.transform(t);
        self
    }
}
