/// Position of a point relative to a closed curve, within a tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointContainment {
    /// Strictly inside, further than the tolerance from the curve
    Inside,
    /// Strictly outside, further than the tolerance from the curve
    Outside,
    /// Within the tolerance of the curve itself
    OnBoundary,
}

/// Traversal direction of a closed curve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}
