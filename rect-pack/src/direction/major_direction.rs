use std::f64::consts::{PI, TAU};

use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use crate::direction::AngleBins;
use crate::geometry::Transformation;
use crate::geometry::geo_enums::Orientation;
use crate::geometry::primitives::{Edge, SPolygon, Vector};
use crate::util::assertions;

/// Finds the dominant direction of the edges of `polygon`, as an undirected angle in `[0, π)`.
///
/// Edge lengths are accumulated in `n_categories` bins by the counterclockwise angle of the edge.
/// The bin holding the most length gives the candidate direction, which is checked against the
/// first edge that landed in that bin and mirrored to `π - candidate` if it deviates by more than
/// one bin width.
///
/// Edges of a clockwise polygon are all reversed first.
/// When the polygon has more edges than `n_categories`, the candidate is measured in steps
/// of `2π / n_edges` while the bins keep their width of `2π / n_categories`.
pub fn find_major_direction(polygon: &SPolygon, n_categories: usize) -> Result<f64> {
    ensure!(
        n_categories > 0,
        "number of angle categories must be at least 1"
    );

    let reverse = polygon.orientation() == Orientation::Clockwise;
    let segments = polygon
        .edge_iter()
        .map(|e| match reverse {
            true => e.reverse(),
            false => e,
        })
        .collect_vec();

    let mut bins = AngleBins::new(n_categories)?;
    for (i, segment) in segments.iter().enumerate() {
        let angle = segment.direction().signed_angle_from_x();
        let bin = bins.classify(angle);
        debug!(
            "[DIR] segment {i}: angle {:.3}°, bin {bin}",
            angle.to_degrees()
        );
        bins.add(bin, segment.length(), i);
    }
    debug_assert!(assertions::bins_consistent(&bins));

    let (argmax, max) = bins.argmax();
    debug!("[DIR] max length {max:.3} in bin {argmax}");

    let n_effective = usize::max(n_categories, segments.len());
    let candidate = argmax as f64 * (TAU / n_effective as f64);

    let first = bins
        .first_segment(argmax)
        .map(|i| segments[i])
        .context("winning angle bin holds no segment")?;
    let deviation = deviation_from(&first, candidate);

    let orientation = match deviation > bins.bin_width() {
        true => PI - candidate,
        false => candidate,
    };

    Ok(fold_undirected(orientation))
}

/// Runs [`find_major_direction`] on every polygon in parallel, results keep the input order
pub fn find_major_directions(polygons: &[SPolygon], n_categories: usize) -> Vec<Result<f64>> {
    polygons
        .par_iter()
        .map(|p| find_major_direction(p, n_categories))
        .collect()
}

/// Unsigned angle between `segment` and a ray from its start along the X-axis turned by `angle`
fn deviation_from(segment: &Edge, angle: f64) -> f64 {
    let pivot = segment.start;
    let ray_tip = Transformation::from_rotation_about(angle, pivot).apply(pivot + Vector::X_AXIS);

    segment.direction().angle_to(&(ray_tip - pivot))
}

/// Maps an angle onto `[0, π)`, directions differing by π are the same axis
fn fold_undirected(angle: f64) -> f64 {
    match angle.rem_euclid(PI) {
        a if a >= PI => 0.0,
        a => a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Point;
    use float_cmp::approx_eq;
    use std::f64::consts::FRAC_PI_4;
    use test_case::test_case;

    fn polygon(points: &[(f64, f64)]) -> SPolygon {
        SPolygon::new(points.iter().map(|&p| p.into()).collect()).unwrap()
    }

    fn unit_square() -> SPolygon {
        polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn zero_categories_is_an_error() {
        assert!(find_major_direction(&unit_square(), 0).is_err());
    }

    #[test]
    fn square_is_aligned_with_x() {
        let o = find_major_direction(&unit_square(), 8).unwrap();
        assert_eq!(o, 0.0);
    }

    #[test]
    fn clockwise_and_counterclockwise_agree() {
        let cw = polygon(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        assert_eq!(
            find_major_direction(&cw, 8).unwrap(),
            find_major_direction(&unit_square(), 8).unwrap()
        );
    }

    #[test]
    fn diamond_is_a_quarter_turn_of_its_bins() {
        let diamond = polygon(&[(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]);
        let o = find_major_direction(&diamond, 8).unwrap();
        assert!(approx_eq!(f64, o, FRAC_PI_4, ulps = 4));
    }

    #[test]
    fn long_edge_dominates() {
        //thin sliver along 30°
        let (s, c) = (PI / 6.0).sin_cos();
        let sliver = polygon(&[(0.0, 0.0), (10.0 * c, 10.0 * s), (10.0 * c - 0.5 * s, 10.0 * s + 0.5 * c)]);
        let o = find_major_direction(&sliver, 36).unwrap();
        let bin_width = TAU / 36.0;
        assert!((o - PI / 6.0).abs() <= bin_width, "{o}");
    }

    #[test]
    fn few_categories_mirror_the_candidate() {
        //5 edges but 4 categories: bin 1 wins with the edge at ~175.6°,
        //the candidate 2π/5 deviates more than π/2 from it and gets mirrored
        let p = polygon(&[(0.0, 0.0), (1.0, -1.0), (2.0, 0.0), (3.0, 2.0), (-10.0, 3.0)]);
        let o = find_major_direction(&p, 4).unwrap();
        assert!(approx_eq!(f64, o, 3.0 * PI / 5.0, epsilon = 1e-12));
    }

    #[test_case(0.0, 0.0)]
    #[test_case(PI, 0.0)]
    #[test_case(-FRAC_PI_4, 3.0 * FRAC_PI_4)]
    #[test_case(5.0 * FRAC_PI_4, FRAC_PI_4)]
    fn fold(angle: f64, expected: f64) {
        assert!(approx_eq!(f64, fold_undirected(angle), expected, epsilon = 1e-12));
    }

    #[test]
    fn batch_keeps_order() {
        let diamond = polygon(&[(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]);
        let results = find_major_directions(&[unit_square(), diamond, unit_square()], 8);
        let results = results.into_iter().map(|r| r.unwrap()).collect_vec();
        assert_eq!(results[0], 0.0);
        assert!(approx_eq!(f64, results[1], FRAC_PI_4, ulps = 4));
        assert_eq!(results[2], 0.0);
    }

    #[test]
    fn deviation_of_aligned_segment_is_zero() {
        let e = Edge::new(Point(2.0, 3.0), Point(2.0, 7.0)).unwrap();
        assert!(approx_eq!(f64, deviation_from(&e, PI / 2.0), 0.0, epsilon = 1e-12));
    }
}
