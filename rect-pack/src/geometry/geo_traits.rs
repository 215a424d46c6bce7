use crate::geometry::Transformation;

/// Whether `Self` and `T` share at least one point
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Minimum euclidean distance between `Self` and `T`, zero when they collide
pub trait DistanceTo<T> {
    fn distance_to(&self, other: &T) -> f64;

    /// Squared [`DistanceTo::distance_to`], avoids the square root for comparisons
    fn sq_distance_to(&self, other: &T) -> f64;
}

/// Shapes that can be moved by a rigid [`Transformation`]
pub trait Transformable: Clone {
    fn transform(&mut self, t: &Transformation) -> &mut Self;

    /// Transformed copy, `self` is left untouched
    fn transform_clone(&self, t: &Transformation) -> Self {
        let mut clone = self.clone();
        clone.transform(t);
        clone
    }
}
