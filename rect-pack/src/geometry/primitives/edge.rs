use anyhow::{Result, ensure};

use crate::geometry::geo_traits::{CollidesWith, DistanceTo};
use crate::geometry::primitives::{Point, Vector};

/// Line segment between two [`Point`]s, oriented from `start` to `end`.
/// A polygon is walked as a closed chain of these.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Result<Self> {
        ensure!(start != end, "degenerate edge, {start:?} == {end:?}");
        Ok(Edge { start, end })
    }

    /// Same segment, traversed the other way
    pub fn reverse(self) -> Self {
        Edge {
            start: self.end,
            end: self.start,
        }
    }

    /// Vector from `start` to `end`
    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Point of the edge nearest to `point`
    pub fn closest_point(&self, point: &Point) -> Point {
        let d = self.direction();
        let sq_len = d.dot(&d);
        if sq_len == 0.0 {
            return self.start;
        }
        //position of the projection along the edge, clamped to the segment
        let t = ((*point - self.start).dot(&d) / sq_len).clamp(0.0, 1.0);
        self.start + d * t
    }

    fn x_range(&self) -> (f64, f64) {
        (
            f64::min(self.start.0, self.end.0),
            f64::max(self.start.0, self.end.0),
        )
    }

    fn y_range(&self) -> (f64, f64) {
        (
            f64::min(self.start.1, self.end.1),
            f64::max(self.start.1, self.end.1),
        )
    }
}

impl DistanceTo<Point> for Edge {
    #[inline(always)]
    fn distance_to(&self, point: &Point) -> f64 {
        self.sq_distance_to(point).sqrt()
    }

    #[inline(always)]
    fn sq_distance_to(&self, point: &Point) -> f64 {
        let v = *point - self.closest_point(point);
        v.dot(&v)
    }
}

impl CollidesWith<Edge> for Edge {
    /// Whether the two segments share at least one point. Parallel segments never collide.
    #[inline(always)]
    fn collides_with(&self, other: &Edge) -> bool {
        let ((ax_min, ax_max), (bx_min, bx_max)) = (self.x_range(), other.x_range());
        let ((ay_min, ay_max), (by_min, by_max)) = (self.y_range(), other.y_range());
        if ax_min.max(bx_min) > ax_max.min(bx_max) || ay_min.max(by_min) > ay_max.min(by_max) {
            return false;
        }

        //solve start_a + t * d_a == start_b + u * d_b
        let d_a = self.direction();
        let d_b = other.direction();
        let denom = d_a.cross(&d_b);
        if denom == 0.0 {
            return false;
        }
        let w = other.start - self.start;
        let t = w.cross(&d_b) / denom;
        let u = w.cross(&d_a) / denom;

        (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn degenerate_edge_is_rejected() {
        assert!(Edge::new(Point(1.0, 1.0), Point(1.0, 1.0)).is_err());
    }

    #[test_case(Point(5.0, 3.0), Point(5.0, 0.0); "above the middle")]
    #[test_case(Point(-2.0, 1.0), Point(0.0, 0.0); "before the start")]
    #[test_case(Point(14.0, -1.0), Point(10.0, 0.0); "past the end")]
    fn closest_point_is_clamped_to_the_segment(p: Point, expected: Point) {
        let e = Edge::new(Point(0.0, 0.0), Point(10.0, 0.0)).unwrap();
        assert_eq!(e.closest_point(&p), expected);
    }

    #[test]
    fn distance_to_point() {
        let e = Edge::new(Point(0.0, 0.0), Point(0.0, 4.0)).unwrap();
        assert_eq!(e.distance_to(&Point(3.0, 2.0)), 3.0);
        assert_eq!(e.sq_distance_to(&Point(3.0, 8.0)), 25.0);
    }

    #[test_case((0.0, 0.0), (4.0, 4.0), (0.0, 4.0), (4.0, 0.0), true; "crossing")]
    #[test_case((0.0, 0.0), (4.0, 0.0), (4.0, 0.0), (4.0, 3.0), true; "touching at an end")]
    #[test_case((0.0, 0.0), (4.0, 0.0), (0.0, 1.0), (4.0, 1.0), false; "parallel")]
    #[test_case((0.0, 0.0), (1.0, 1.0), (3.0, 0.0), (2.0, 1.0), false; "apart")]
    fn edge_collision(a: (f64, f64), b: (f64, f64), c: (f64, f64), d: (f64, f64), collides: bool) {
        let e1 = Edge::new(a.into(), b.into()).unwrap();
        let e2 = Edge::new(c.into(), d.into()).unwrap();
        assert_eq!(e1.collides_with(&e2), collides);
        assert_eq!(e2.collides_with(&e1), collides);
    }

    #[test]
    fn reverse_swaps_the_ends() {
        let e = Edge::new(Point(1.0, 2.0), Point(3.0, 5.0)).unwrap();
        let r = e.reverse();
        assert_eq!(r.start, e.end);
        assert_eq!(r.direction(), -e.direction());
        assert_eq!(r.reverse(), e);
    }
}
