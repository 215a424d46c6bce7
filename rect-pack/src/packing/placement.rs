use crate::geometry::primitives::{ORect, Point, Vector};

/// A copy of the template rectangle accepted inside a boundary
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Placement {
    /// The placed rectangle
    pub rect: ORect,
    /// Candidate anchor that produced the placement, the rectangle's centroid
    pub anchor: Point,
    /// Vector moving the template's centroid onto `anchor`
    pub translation: Vector,
    /// Offset added to the raw grid coordinate to obtain `anchor`: the axis offset, or the previous candidate anchor
    pub grid_offset: Vector,
    /// Whether the fallback rotation was needed to fit the rectangle
    pub rotated: bool,
}
