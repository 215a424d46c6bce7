use std::f64::consts::PI;

use anyhow::{Context, Result, ensure};
use log::{debug, warn};

use crate::geometry::geo_enums::PointContainment;
use crate::geometry::primitives::{ORect, Point, Rect, SPolygon, Vector};
use crate::packing::Placement;
use crate::packing::scan::{ScanState, Steps};
use crate::util::PackConfig;
use crate::util::assertions;

/// Packs as many copies of `template` as the scan finds room for inside `boundary`.
///
/// The bounding box of the boundary is scanned row by row, coarsely with
/// [`PackConfig::search_spacing`] until a first copy fits, then with the footprint of the
/// rectangle (see [`fitted_steps`]). Every grid point is shifted into a candidate anchor:
/// by the unitized footprint scaled with the current steps when [`PackConfig::axis_aligned`]
/// is set, by the previous candidate anchor otherwise. A copy is centered on every anchor
/// inside the boundary and kept if all of its corners lie strictly inside.
/// A copy that needed the fallback rotation swaps the grid steps for the rest of the scan,
/// until another rotated copy swaps them back.
///
/// Copies are not checked against each other, only against the boundary.
/// An invalid template yields no placements. An empty result is not an error.
pub fn pack(boundary: &SPolygon, template: &ORect, config: &PackConfig) -> Result<Vec<Placement>> {
    config.validate()?;
    if !template.is_valid() {
        warn!("[PACK] skipping invalid template rectangle: {template:?}");
        return Ok(vec![]);
    }

    let bbox = boundary.bbox;
    let footprint = Footprint::new(template, config)?;
    ensure_progress(&bbox, Steps::uniform(config.search_spacing))?;
    ensure_progress(&bbox, footprint.steps)?;

    let offset_direction = match config.axis_aligned {
        true => Some(
            footprint
                .components
                .unitize()
                .context("no direction to align the grid offset with")?,
        ),
        false => None,
    };

    let template_centroid = template.centroid();
    let mut placements = vec![];
    let mut state = ScanState::new(&bbox, config.search_spacing);

    while state.has_next_row(&bbox) {
        while state.row_has_next(&bbox) {
            let steps = state.steps;
            let axis_offset = offset_direction.map(|Vector(ux, uy)| Vector(ux * steps.x, uy * steps.y));
            let (composed, grid_offset) = state.compose_anchor(axis_offset);
            state = composed;
            let anchor = state.anchor;

            if boundary.containment(&anchor, config.anchor_tolerance) == PointContainment::Inside {
                let translation = anchor - template_centroid;
                let candidate = template.translate(translation);
                let fit = try_fit(boundary, candidate, anchor, state.rotation_allowed(), config);

                if let Some((rect, rotated)) = fit {
                    if !state.rotation_allowed() {
                        debug!(
                            "[PACK] first fit at {anchor:?}, stepping by ({:.3}, {:.3}) from now on",
                            footprint.steps.x, footprint.steps.y
                        );
                    }
                    state = state.on_placement(rotated, footprint.steps, &bbox);
                    placements.push(Placement {
                        rect,
                        anchor,
                        translation,
                        grid_offset,
                        rotated,
                    });
                }
            }
            state = state.advance_column();
        }
        state = state.advance_row();
    }

    debug!(
        "[PACK] {} placements ({} rotated) in boundary with bbox {:?}",
        placements.len(),
        placements.iter().filter(|p| p.rotated).count(),
        bbox
    );
    debug_assert!(assertions::placements_contained(
        boundary,
        &placements,
        config.containment_tolerance
    ));

    Ok(placements)
}

/// Places `rect` as is, or turned about `anchor` when that is allowed and needed.
/// Returns the accepted rectangle and whether it was turned.
fn try_fit(
    boundary: &SPolygon,
    rect: ORect,
    anchor: Point,
    rotation_allowed: bool,
    config: &PackConfig,
) -> Option<(ORect, bool)> {
    if contains_rect(boundary, &rect, config.containment_tolerance) {
        return Some((rect, false));
    }
    if config.allow_rotation && rotation_allowed {
        let turned = rect.rotate_about(config.rotation_angle, anchor);
        if contains_rect(boundary, &turned, config.containment_tolerance) {
            return Some((turned, true));
        }
    }
    None
}

/// All four corners of `rect` lie inside `boundary`, further than `tolerance` from its edges
pub fn contains_rect(boundary: &SPolygon, rect: &ORect, tolerance: f64) -> bool {
    rect.corners()
        .iter()
        .all(|c| boundary.containment(c, tolerance) == PointContainment::Inside)
}

/// Extent of the template along the world axes, used as grid spacing once a first copy fits
#[derive(Clone, Copy, Debug, PartialEq)]
struct Footprint {
    /// Share of the rectangle's dimensions projected on the world x- and y-axis
    components: Vector,
    steps: Steps,
}

impl Footprint {
    fn new(template: &ORect, config: &PackConfig) -> Result<Self> {
        let Vector(x_x, x_y) = template.frame.x_axis;
        let Vector(y_x, y_y) = template.frame.y_axis;
        let padding = 2.0 * config.offset;

        //undirected: a rectangle turned by π has the same footprint
        let angle = template.frame.x_axis.angle_to(&Vector::X_AXIS);
        let angle = angle.min(PI - angle);

        let (components, steps) = match angle < config.rotation_threshold {
            true => {
                //width along x, height along y
                let c = Vector(x_x.abs(), y_y.abs());
                let steps = Steps {
                    x: (padding + template.width) * c.0,
                    y: (padding + template.height) * c.1,
                };
                (c, steps)
            }
            false => {
                //quarter turn: height along x, width along y
                let c = Vector(y_x.abs(), x_y.abs());
                let steps = Steps {
                    x: (padding + template.height) * c.0,
                    y: (padding + template.width) * c.1,
                };
                (c, steps)
            }
        };

        ensure!(
            steps.x.is_finite() && steps.y.is_finite() && steps.x > 0.0 && steps.y > 0.0,
            "template rectangle has no footprint along the world axes: {steps:?} (rotation threshold: {})",
            config.rotation_threshold
        );

        Ok(Footprint { components, steps })
    }
}

/// Public view of the post-fit grid spacing of `template`, see [`pack`].
pub fn fitted_steps(template: &ORect, config: &PackConfig) -> Result<(f64, f64)> {
    let Footprint { steps, .. } = Footprint::new(template, config)?;
    Ok((steps.x, steps.y))
}

/// Fails if adding `steps` would not move the scan forward somewhere in `bbox`
fn ensure_progress(bbox: &Rect, steps: Steps) -> Result<()> {
    let max_coord = [bbox.x_min, bbox.x_max, bbox.y_min, bbox.y_max]
        .into_iter()
        .map(f64::abs)
        .fold(0.0, f64::max);
    ensure!(
        max_coord + steps.x > max_coord && max_coord + steps.y > max_coord,
        "grid steps {steps:?} are too small to advance over coordinates of magnitude {max_coord}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Frame;
    use float_cmp::approx_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    fn square_boundary(size: f64) -> SPolygon {
        SPolygon::from(Rect::try_new(0.0, 0.0, size, size).unwrap())
    }

    #[test]
    fn fitted_steps_of_unrotated_template() {
        let config = PackConfig {
            offset: 1.0,
            ..PackConfig::default()
        };
        let (dx, dy) = fitted_steps(&ORect::axis_aligned(0.0, 0.0, 10.0, 4.0), &config).unwrap();
        assert!(approx_eq!(f64, dx, 12.0, ulps = 4));
        assert!(approx_eq!(f64, dy, 6.0, ulps = 4));
    }

    #[test]
    fn fitted_steps_of_quarter_turned_template() {
        let config = PackConfig {
            offset: 0.0,
            ..PackConfig::default()
        };
        let template = ORect::new(Frame::rotated(Point(0.0, 0.0), FRAC_PI_2), 10.0, 4.0);
        let (dx, dy) = fitted_steps(&template, &config).unwrap();
        assert!(approx_eq!(f64, dx, 4.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, dy, 10.0, epsilon = 1e-9));
    }

    #[test]
    fn half_turned_template_counts_as_unrotated() {
        let config = PackConfig {
            offset: 0.0,
            ..PackConfig::default()
        };
        let template = ORect::new(Frame::rotated(Point(0.0, 0.0), PI), 10.0, 4.0);
        let (dx, dy) = fitted_steps(&template, &config).unwrap();
        assert!(approx_eq!(f64, dx, 10.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, dy, 4.0, epsilon = 1e-9));
    }

    #[test]
    fn zero_threshold_on_aligned_template_has_no_footprint() {
        let config = PackConfig {
            rotation_threshold: 0.0,
            ..PackConfig::default()
        };
        let result = pack(
            &square_boundary(100.0),
            &ORect::axis_aligned(0.0, 0.0, 10.0, 10.0),
            &config,
        );
        assert!(result.is_err());
    }

    #[test]
    fn placements_are_centered_on_anchors() {
        let config = PackConfig {
            offset: 0.0,
            search_spacing: 5.0,
            axis_aligned: true,
            ..PackConfig::default()
        };
        let template = ORect::axis_aligned(-50.0, 20.0, 10.0, 10.0);
        let placements = pack(&square_boundary(100.0), &template, &config).unwrap();
        assert!(!placements.is_empty());
        for p in placements {
            let c = p.rect.centroid();
            assert!(approx_eq!(f64, c.0, p.anchor.0, epsilon = 1e-9));
            assert!(approx_eq!(f64, c.1, p.anchor.1, epsilon = 1e-9));
            let moved = template.centroid() + p.translation;
            assert!(approx_eq!(f64, moved.0, p.anchor.0, epsilon = 1e-9));
            assert!(approx_eq!(f64, moved.1, p.anchor.1, epsilon = 1e-9));
            //unrotated square footprint: equal offsets along both axes
            assert_eq!(p.grid_offset.0, p.grid_offset.1);
        }
    }

    fn assert_point_near(p: Point, (x, y): (f64, f64)) {
        assert!(
            approx_eq!(f64, p.0, x, epsilon = 1e-9) && approx_eq!(f64, p.1, y, epsilon = 1e-9),
            "{p:?} != ({x}, {y})"
        );
    }

    #[test]
    fn square_grid_with_axis_offsets() {
        let config = PackConfig {
            offset: 0.0,
            search_spacing: 5.0,
            axis_aligned: true,
            ..PackConfig::default()
        };
        let placements = pack(
            &square_boundary(100.0),
            &ORect::axis_aligned(0.0, 0.0, 10.0, 10.0),
            &config,
        )
        .unwrap();
        let s = FRAC_1_SQRT_2;
        //grid point (5, 5) shifted by the search offset, after that rows start at x = 5
        assert_point_near(placements.first().unwrap().anchor, (5.0 + 5.0 * s, 5.0 + 5.0 * s));
        assert_point_near(placements.last().unwrap().anchor, (85.0 + 10.0 * s, 85.0 + 10.0 * s));
        //9 rows of 9
        assert_eq!(placements.len(), 81);
        assert!(placements.iter().all(|p| !p.rotated));
    }

    #[test]
    fn running_anchor_composes_anchors() {
        //without axis offsets every candidate is the grid point plus the previous candidate
        let boundary = SPolygon::from(Rect::try_new(10.0, 10.0, 110.0, 110.0).unwrap());
        let config = PackConfig {
            offset: 0.0,
            search_spacing: 5.0,
            axis_aligned: false,
            ..PackConfig::default()
        };
        let placements = pack(&boundary, &ORect::axis_aligned(0.0, 0.0, 10.0, 10.0), &config).unwrap();

        let composed = placements
            .iter()
            .map(|p| (p.anchor, p.grid_offset))
            .collect::<Vec<_>>();
        assert_eq!(
            composed,
            vec![
                (Point(20.0, 20.0), Vector(10.0, 10.0)),
                (Point(40.0, 30.0), Vector(20.0, 20.0)),
                (Point(70.0, 40.0), Vector(40.0, 30.0)),
            ]
        );
        //the running anchor leaves the boundary for good after the third copy
        assert!(placements.iter().all(|p| contains_rect(&boundary, &p.rect, 1e-5)));
    }

    #[test]
    fn rotated_fit_turns_the_grid_for_later_fits() {
        //two 8 wide blocks of height 10 joined by a strip from y = 3 to y = 9
        let boundary = SPolygon::new(vec![
            Point(0.0, 0.0),
            Point(4.0, 0.0),
            Point(4.0, 3.0),
            Point(12.0, 3.0),
            Point(12.0, 0.0),
            Point(18.0, 0.0),
            Point(18.0, 10.0),
            Point(12.0, 10.0),
            Point(12.0, 9.0),
            Point(4.0, 9.0),
            Point(4.0, 10.0),
            Point(0.0, 10.0),
        ])
        .unwrap();
        let config = PackConfig {
            offset: 0.0,
            search_spacing: 1.0,
            allow_rotation: true,
            axis_aligned: true,
            ..PackConfig::default()
        };
        let placements = pack(&boundary, &ORect::axis_aligned(0.0, 0.0, 2.0, 6.0), &config).unwrap();
        let s = FRAC_1_SQRT_2;

        assert_eq!(
            placements.iter().map(|p| p.rotated).collect::<Vec<_>>(),
            vec![false, true, false, true]
        );
        //first fit at grid point (1, 3), then steps (2, 6)
        assert_point_near(placements[0].anchor, (1.0 + s, 3.0 + s));
        //grid point (3, 3), only fits turned
        assert_point_near(placements[1].anchor, (3.0 + 2.0 * s, 3.0 + 6.0 * s));
        //the turn swapped the steps to (6, 2), an unrotated fit keeps them swapped
        assert_point_near(placements[2].anchor, (9.0 + 6.0 * s, 3.0 + 2.0 * s));
        let Vector(gx, gy) = placements[2].grid_offset;
        assert_point_near(Point(gx, gy), (6.0 * s, 2.0 * s));
        //next row 2 higher, grid point (1, 5)
        assert_point_near(placements[3].anchor, (1.0 + 6.0 * s, 5.0 + 2.0 * s));
        assert!(placements.iter().all(|p| contains_rect(&boundary, &p.rect, 1e-5)));

        //unturned, the 2 by 6 grid misses the right block
        let config = PackConfig {
            allow_rotation: false,
            ..config
        };
        let placements = pack(&boundary, &ORect::axis_aligned(0.0, 0.0, 2.0, 6.0), &config).unwrap();
        assert_eq!(placements.len(), 1);
        assert_point_near(placements[0].anchor, (1.0 + s, 3.0 + s));
    }
}
