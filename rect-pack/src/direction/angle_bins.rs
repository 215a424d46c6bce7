use std::f64::consts::TAU;

use anyhow::{Result, ensure};

/// Histogram of segment length by direction.
/// The full turn `[0, 2π)` is divided into equally wide bins; every bin keeps the total
/// length of its segments and the index of the first segment it received.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleBins {
    lengths: Vec<f64>,
    first_segments: Vec<Option<usize>>,
    bin_width: f64,
}

impl AngleBins {
    pub fn new(n_bins: usize) -> Result<Self> {
        ensure!(n_bins > 0, "at least one angle bin is required");
        Ok(AngleBins {
            lengths: vec![0.0; n_bins],
            first_segments: vec![None; n_bins],
            bin_width: TAU / n_bins as f64,
        })
    }

    /// Bin of a counterclockwise angle in `[0, 2π)`
    pub fn classify(&self, angle: f64) -> usize {
        let bin = (angle / self.bin_width).floor().max(0.0) as usize;
        //angles a hair below 2π may round up to the bin count
        bin.min(self.n_bins() - 1)
    }

    pub fn add(&mut self, bin: usize, length: f64, segment: usize) {
        self.lengths[bin] += length;
        self.first_segments[bin].get_or_insert(segment);
    }

    /// Bin with the largest total length, the lowest index wins ties
    pub fn argmax(&self) -> (usize, f64) {
        let mut best = (0, self.lengths[0]);
        for (i, &length) in self.lengths.iter().enumerate().skip(1) {
            if length > best.1 {
                best = (i, length);
            }
        }
        best
    }

    pub fn first_segment(&self, bin: usize) -> Option<usize> {
        self.first_segments[bin]
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn n_bins(&self) -> usize {
        self.lengths.len()
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    pub fn first_segments(&self) -> &[Option<usize>] {
        &self.first_segments
    }
}
