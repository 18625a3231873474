//! Uniformly binned axis.

use au_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A uniformly binned axis over `[low, high)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAxis")]
pub struct Axis {
    n_bins: usize,
    low: f64,
    high: f64,
}

#[derive(Deserialize)]
struct RawAxis {
    n_bins: usize,
    low: f64,
    high: f64,
}

impl TryFrom<RawAxis> for Axis {
    type Error = Error;

    fn try_from(raw: RawAxis) -> Result<Self> {
        Axis::new(raw.n_bins, raw.low, raw.high)
    }
}

impl Axis {
    /// Create an axis with `n_bins` equal-width bins.
    pub fn new(n_bins: usize, low: f64, high: f64) -> Result<Self> {
        if n_bins == 0 {
            return Err(Error::InvalidInput("axis needs at least one bin".into()));
        }
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(Error::InvalidInput(format!(
                "axis range must be finite with low < high, got [{low}, {high}]"
            )));
        }
        Ok(Self { n_bins, low, high })
    }

    /// Number of in-range bins.
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Lower edge of the first bin.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper edge of the last bin.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Width of every bin.
    pub fn bin_width(&self) -> f64 {
        (self.high - self.low) / self.n_bins as f64
    }

    /// Lower edge of `bin` (1-based; bin 0 gives the edge below `low`).
    pub fn bin_low_edge(&self, bin: usize) -> f64 {
        self.low + (bin as f64 - 1.0) * self.bin_width()
    }

    /// Upper edge of `bin`.
    pub fn bin_up_edge(&self, bin: usize) -> f64 {
        self.low + bin as f64 * self.bin_width()
    }

    /// Center of `bin`.
    pub fn bin_center(&self, bin: usize) -> f64 {
        self.low + (bin as f64 - 0.5) * self.bin_width()
    }

    /// All bin edges (length `n_bins + 1`).
    pub fn edges(&self) -> Vec<f64> {
        let w = self.bin_width();
        (0..=self.n_bins).map(|i| self.low + i as f64 * w).collect()
    }

    /// Bin number containing `x`: 0 for underflow (and NaN), `n_bins + 1`
    /// for overflow.
    pub fn find_bin(&self, x: f64) -> usize {
        if x.is_nan() || x < self.low {
            return 0;
        }
        if x >= self.high {
            return self.n_bins + 1;
        }
        let bin = 1 + ((x - self.low) / self.bin_width()).floor() as usize;
        bin.min(self.n_bins)
    }
}
