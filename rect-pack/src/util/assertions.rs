use log::error;

use crate::direction::AngleBins;
use crate::geometry::primitives::SPolygon;
use crate::packing::{Placement, contains_rect};

//Checks on the output of the algorithms
//Used in debug_assert!() blocks

pub fn placements_contained(boundary: &SPolygon, placements: &[Placement], tolerance: f64) -> bool {
    match placements
        .iter()
        .find(|p| !contains_rect(boundary, &p.rect, tolerance))
    {
        Some(p) => {
            error!("placement sticks out of its boundary: {p:?}");
            false
        }
        None => true,
    }
}

pub fn bins_consistent(bins: &AngleBins) -> bool {
    let lengths_ok = bins.lengths().iter().all(|l| l.is_finite() && *l >= 0.0);
    //segments have non-zero length, so a bin holds length iff a segment was recorded for it
    let first_ok = bins
        .lengths()
        .iter()
        .zip(bins.first_segments())
        .all(|(l, first)| (*l > 0.0) == first.is_some());
    lengths_ok && first_ok && bins.lengths().len() == bins.first_segments().len()
}
