use std::f64::consts::FRAC_PI_2;

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

///Configuration of the packing engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PackConfig {
    ///Minimum clearance added on every side of a placed rectangle when stepping after the first fit
    pub offset: f64,
    ///Grid step used while no rectangle has been placed yet
    pub search_spacing: f64,
    ///Retry a failed placement with the rectangle turned by `rotation_angle`
    pub allow_rotation: bool,
    ///Shift every anchor by the rectangle axes scaled by the current step sizes
    pub axis_aligned: bool,
    ///Angle (radians) of the single fallback rotation
    pub rotation_angle: f64,
    ///Below this angle (radians) between the rectangle's x-axis and the world x-axis, the rectangle counts as unrotated
    pub rotation_threshold: f64,
    ///Tolerance of the containment test of anchor points
    pub anchor_tolerance: f64,
    ///Tolerance of the containment test of rectangle corners
    pub containment_tolerance: f64,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            offset: 5.0,
            search_spacing: 1.0,
            allow_rotation: false,
            axis_aligned: false,
            rotation_angle: FRAC_PI_2,
            rotation_threshold: 0.5,
            anchor_tolerance: 0.1,
            containment_tolerance: 1e-5,
        }
    }
}

impl PackConfig {
    /// Checks the configuration for values that would make the scan diverge or never end.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.search_spacing.is_finite() && self.search_spacing > 0.0,
            "search spacing must be a positive finite number, got {}",
            self.search_spacing
        );
        ensure!(
            self.offset.is_finite() && self.offset >= 0.0,
            "offset must be a non-negative finite number, got {}",
            self.offset
        );
        ensure!(
            self.rotation_angle.is_finite(),
            "rotation angle must be finite, got {}",
            self.rotation_angle
        );
        ensure!(
            self.rotation_threshold.is_finite() && self.rotation_threshold >= 0.0,
            "rotation threshold must be a non-negative finite number, got {}",
            self.rotation_threshold
        );
        ensure!(
            self.anchor_tolerance.is_finite() && self.anchor_tolerance > 0.0,
            "anchor tolerance must be a positive finite number, got {}",
            self.anchor_tolerance
        );
        ensure!(
            self.containment_tolerance.is_finite() && self.containment_tolerance > 0.0,
            "containment tolerance must be a positive finite number, got {}",
            self.containment_tolerance
        );
        Ok(())
    }
}

///Configuration of the major direction finder
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct DirectionConfig {
    ///Number of angle bins covering a full turn
    pub n_categories: usize,
}

impl Default for DirectionConfig {
    fn default() -> Self {
        Self { n_categories: 36 }
    }
}
