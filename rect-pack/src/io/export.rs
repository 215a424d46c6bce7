use std::time::Duration;

use anyhow::Result;

use crate::geometry::primitives::ORect;
use crate::io::ext_repr::{
    ExtDirection, ExtDirectionSolution, ExtFailure, ExtPackSolution, ExtPlacement, ExtRectangle,
};
use crate::io::import::Instance;
use crate::packing::Placement;
use crate::packing::batch::{BatchPacking, BoundaryOutcome};

pub fn export_rectangle(rect: &ORect) -> ExtRectangle {
    ExtRectangle {
        origin: rect.frame.origin.into(),
        width: rect.width,
        height: rect.height,
        rotation: rect.frame.x_axis.signed_angle_from_x(),
    }
}

pub fn export_placement(boundary: usize, p: &Placement) -> ExtPlacement {
    ExtPlacement {
        boundary,
        rectangle: export_rectangle(&p.rect),
        anchor: p.anchor.into(),
        translation: p.translation.into(),
        grid_offset: p.grid_offset.into(),
        rotated: p.rotated,
    }
}

/// Exports a [`BatchPacking`] of `instance`'s boundaries into an [`ExtPackSolution`].
/// Boundaries are referred to by their index in the external instance.
pub fn export_pack_solution(
    instance: &Instance,
    batch: &BatchPacking,
    run_time: Duration,
) -> ExtPackSolution {
    let mut placements = vec![];
    let mut failures = vec![];

    for (i, outcome) in batch.outcomes.iter().enumerate() {
        let boundary = instance.boundary_id(i);
        match outcome {
            BoundaryOutcome::Packed(ps) => {
                placements.extend(ps.iter().map(|p| export_placement(boundary, p)));
            }
            BoundaryOutcome::Failed { reason } => failures.push(ExtFailure {
                boundary,
                reason: reason.clone(),
            }),
        }
    }

    ExtPackSolution {
        name: instance.name.clone(),
        placements,
        failures,
        run_time_ms: run_time.as_millis() as u64,
    }
}

/// Exports the major directions of `instance`'s boundaries, in the same order
pub fn export_direction_solution(
    instance: &Instance,
    directions: &[Result<f64>],
) -> ExtDirectionSolution {
    let mut exported = vec![];
    let mut failures = vec![];

    for (i, direction) in directions.iter().enumerate() {
        let boundary = instance.boundary_id(i);
        match direction {
            Ok(angle) => exported.push(ExtDirection {
                boundary,
                angle: *angle,
                angle_deg: angle.to_degrees(),
            }),
            Err(e) => failures.push(ExtFailure {
                boundary,
                reason: format!("{e:#}"),
            }),
        }
    }

    ExtDirectionSolution {
        name: instance.name.clone(),
        directions: exported,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::import::import_rectangle;
    use float_cmp::approx_eq;

    #[test]
    fn rectangle_survives_export_and_import() {
        let ext = ExtRectangle {
            origin: (2.0, -1.0),
            width: 4.0,
            height: 1.5,
            rotation: 2.0,
        };
        let exported = export_rectangle(&import_rectangle(&ext).unwrap());
        assert_eq!(exported.origin, ext.origin);
        assert_eq!(exported.width, ext.width);
        assert_eq!(exported.height, ext.height);
        assert!(approx_eq!(f64, exported.rotation, ext.rotation, epsilon = 1e-12));
    }
}
