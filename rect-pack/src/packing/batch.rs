use anyhow::Result;
use log::{info, warn};
use rayon::prelude::*;

use crate::geometry::primitives::{ORect, Point, SPolygon, Vector};
use crate::packing::{Placement, pack};
use crate::util::PackConfig;

/// Result of packing a single boundary within a batch
#[derive(Clone, Debug, PartialEq)]
pub enum BoundaryOutcome {
    /// Placements of all templates, in template order then scan order
    Packed(Vec<Placement>),
    /// The boundary could not be processed, the rest of the batch is unaffected
    Failed { reason: String },
}

impl BoundaryOutcome {
    pub fn placements(&self) -> &[Placement] {
        match self {
            BoundaryOutcome::Packed(placements) => placements,
            BoundaryOutcome::Failed { .. } => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, BoundaryOutcome::Failed { .. })
    }
}

/// Outcomes of a batch, one per boundary, in input order
#[derive(Clone, Debug, PartialEq)]
pub struct BatchPacking {
    pub outcomes: Vec<BoundaryOutcome>,
}

impl BatchPacking {
    /// All placed rectangles, anchor points and grid offsets as three parallel lists
    pub fn flatten(&self) -> (Vec<ORect>, Vec<Point>, Vec<Vector>) {
        let placements = self.outcomes.iter().flat_map(|o| o.placements());

        let mut rects = vec![];
        let mut anchors = vec![];
        let mut offsets = vec![];
        for p in placements {
            rects.push(p.rect);
            anchors.push(p.anchor);
            offsets.push(p.grid_offset);
        }
        (rects, anchors, offsets)
    }

    pub fn n_placements(&self) -> usize {
        self.outcomes.iter().map(|o| o.placements().len()).sum()
    }

    pub fn n_failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }
}

/// Packs every template into every boundary.
/// Boundaries are processed in parallel; a boundary that fails is recorded as such
/// and does not stop the others. Only an invalid configuration fails the whole batch.
pub fn pack_all(
    boundaries: &[SPolygon],
    templates: &[ORect],
    config: &PackConfig,
) -> Result<BatchPacking> {
    config.validate()?;

    let outcomes = boundaries
        .par_iter()
        .enumerate()
        .map(|(i, boundary)| match pack_boundary(boundary, templates, config) {
            Ok(placements) => BoundaryOutcome::Packed(placements),
            Err(e) => {
                warn!("[BATCH] boundary {i} failed: {e:#}");
                BoundaryOutcome::Failed {
                    reason: format!("{e:#}"),
                }
            }
        })
        .collect::<Vec<_>>();

    let batch = BatchPacking { outcomes };
    info!(
        "[BATCH] packed {} boundaries with {} templates: {} placements, {} failed",
        boundaries.len(),
        templates.len(),
        batch.n_placements(),
        batch.n_failed()
    );
    Ok(batch)
}

fn pack_boundary(
    boundary: &SPolygon,
    templates: &[ORect],
    config: &PackConfig,
) -> Result<Vec<Placement>> {
    let mut placements = vec![];
    for template in templates {
        placements.extend(pack(boundary, template, config)?);
    }
    Ok(placements)
}
