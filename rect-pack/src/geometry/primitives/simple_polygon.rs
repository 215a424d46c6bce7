use std::borrow::Borrow;

use anyhow::{Result, bail, ensure};
use itertools::Itertools;

use crate::geometry::geo_enums::{Orientation, PointContainment};
use crate::geometry::geo_traits::{CollidesWith, DistanceTo};
use crate::geometry::primitives::{Edge, Point, Rect};
use crate::util::FPA;

/// A Simple Polygon is a polygon that does not intersect itself and contains no holes.
/// It is a closed shape with a finite number of vertices and edges.
/// [read more](https://en.wikipedia.org/wiki/Simple_polygon)
///
/// Unlike most polygon representations, the vertex order is kept exactly as provided:
/// the traversal direction is part of the input.
#[derive(Clone, Debug)]
pub struct SPolygon {
    /// Set of points that form the polygon, in traversal order
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    /// Shoelace area, positive for counterclockwise traversal
    pub signed_area: f64,
}

impl SPolygon {
    /// Creates a new simple polygon from a ring of points.
    /// A closing point equal to the first one is dropped.
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            bail!("Simple polygon must have at least 3 points: {points:?}");
        }
        ensure!(
            points.iter().all(|p| p.is_finite()),
            "Simple polygon contains non-finite coordinates: {points:?}"
        );
        if points.iter().unique().count() != points.len() {
            bail!("Simple polygon should not contain duplicate points: {points:?}");
        }

        let signed_area = SPolygon::calculate_area(&points);
        if FPA(signed_area) == FPA(0.0) {
            bail!("Simple polygon has no area: {points:?}");
        }
        let bbox = SPolygon::generate_bounding_box(&points);

        Ok(SPolygon {
            vertices: points,
            bbox,
            signed_area,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    /// Edge from vertex `i` to its successor, wrapping around at the end
    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        //vertices are unique, so the edge is never degenerate
        Edge {
            start: self.vertices[i],
            end: self.vertices[j],
        }
    }

    /// Decomposition into the closed sequence of edges, in traversal order
    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn area(&self) -> f64 {
        self.signed_area.abs()
    }

    pub fn orientation(&self) -> Orientation {
        match self.signed_area < 0.0 {
            true => Orientation::Clockwise,
            false => Orientation::CounterClockwise,
        }
    }

    pub fn generate_bounding_box(points: &[Point]) -> Rect {
        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in points.iter() {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn calculate_area(points: &[Point]) -> f64 {
        let mut sigma: f64 = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }

    pub fn centroid(&self) -> Point {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon

        let area = self.signed_area;
        let mut c_x = 0.0;
        let mut c_y = 0.0;

        for i in 0..self.n_vertices() {
            let j = if i == self.n_vertices() - 1 { 0 } else { i + 1 };
            let Point(x_i, y_i) = self.vertex(i);
            let Point(x_j, y_j) = self.vertex(j);
            c_x += (x_i + x_j) * (x_i * y_j - x_j * y_i);
            c_y += (y_i + y_j) * (x_i * y_j - x_j * y_i);
        }

        c_x /= 6.0 * area;
        c_y /= 6.0 * area;

        (c_x, c_y).into()
    }

    /// Classifies `point` relative to the polygon.
    /// Points within `tolerance` of any edge are [`PointContainment::OnBoundary`].
    pub fn containment(&self, point: &Point, tolerance: f64) -> PointContainment {
        let bbox = self.bbox;
        if point.0 < bbox.x_min - tolerance
            || point.0 > bbox.x_max + tolerance
            || point.1 < bbox.y_min - tolerance
            || point.1 > bbox.y_max + tolerance
        {
            return PointContainment::Outside;
        }

        let sq_tolerance = tolerance.powi(2);
        if self
            .edge_iter()
            .any(|edge| edge.sq_distance_to(point) <= sq_tolerance)
        {
            return PointContainment::OnBoundary;
        }

        match self.collides_with(point) {
            true => PointContainment::Inside,
            false => PointContainment::Outside,
        }
    }
}

impl CollidesWith<Point> for SPolygon {
    fn collides_with(&self, point: &Point) -> bool {
        //based on the ray casting algorithm: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        match self.bbox.collides_with(point) {
            false => false,
            true => {
                //horizontal ray shot to the right.
                //Starting from the point to another point that is certainly outside the shape
                let point_outside = Point(self.bbox.x_max + self.bbox.width(), point.1);
                let ray = Edge {
                    start: *point,
                    end: point_outside,
                };

                let mut n_intersections = 0;
                for edge in self.edge_iter() {
                    //Check if the ray does not go through (or almost through) a vertex
                    //This can result in funky behaviour, which could incorrect results
                    //Therefore we handle this case
                    let (s_x, s_y) = (FPA(edge.start.0), FPA(edge.start.1));
                    let (e_x, e_y) = (FPA(edge.end.0), FPA(edge.end.1));
                    let (p_x, p_y) = (FPA(point.0), FPA(point.1));

                    if (s_y == p_y && s_x > p_x) || (e_y == p_y && e_x > p_x) {
                        //in this case, the ray passes through (or dangerously close to) a vertex
                        //We handle this case by only counting an intersection if the edge is below the ray
                        if s_y < p_y || e_y < p_y {
                            n_intersections += 1;
                        }
                    } else if ray.collides_with(&edge) {
                        n_intersections += 1;
                    }
                }

                n_intersections % 2 == 1
            }
        }
    }
}

impl<T> From<T> for SPolygon
where
    T: Borrow<Rect>,
{
    /// Counterclockwise polygon with the same outline as the rectangle
    fn from(r: T) -> Self {
        let r = r.borrow();
        let vertices = vec![
            Point(r.x_min, r.y_min),
            Point(r.x_max, r.y_min),
            Point(r.x_max, r.y_max),
            Point(r.x_min, r.y_max),
        ];
        SPolygon {
            signed_area: r.area(),
            bbox: *r,
            vertices,
        }
    }
}
