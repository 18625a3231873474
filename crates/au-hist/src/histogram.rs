//! 1D and 2D histograms with under/overflow bins.

use au_core::{AxisTitles, DrawAttributes, Error, Result};
use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// Number of stored bins on `axis`: the in-range bins plus under/overflow.
fn flow_bins(axis: &Axis) -> Result<usize> {
    axis.n_bins().checked_add(2).ok_or_else(|| {
        Error::InvalidInput(format!("{} bins leave no room for under/overflow", axis.n_bins()))
    })
}

/// Zeroed storage for `len` bins, or an error when it cannot be allocated.
fn zeroed_contents(len: usize) -> Result<Vec<f64>> {
    let mut contents = Vec::new();
    contents
        .try_reserve_exact(len)
        .map_err(|e| Error::InvalidInput(format!("cannot allocate {len} bins: {e}")))?;
    contents.resize(len, 0.0);
    Ok(contents)
}

fn flow_bins_2d(x_axis: &Axis, y_axis: &Axis) -> Result<usize> {
    let (nx, ny) = (flow_bins(x_axis)?, flow_bins(y_axis)?);
    nx.checked_mul(ny)
        .ok_or_else(|| Error::InvalidInput(format!("{nx} x {ny} bins overflow the bin index")))
}

/// A 1D histogram over a uniform axis.
///
/// `contents` holds `n_bins + 2` values: underflow, the in-range bins,
/// then overflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHistogram")]
pub struct Histogram {
    /// Histogram name.
    pub name: String,
    /// Histogram title.
    pub title: String,
    /// Axis titles.
    pub axis_titles: AxisTitles,
    /// Marker and line attributes.
    pub attributes: DrawAttributes,
    x_axis: Axis,
    contents: Vec<f64>,
    entries: f64,
}

#[derive(Deserialize)]
struct RawHistogram {
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    axis_titles: AxisTitles,
    #[serde(default)]
    attributes: DrawAttributes,
    x_axis: Axis,
    contents: Vec<f64>,
    #[serde(default)]
    entries: f64,
}

impl TryFrom<RawHistogram> for Histogram {
    type Error = Error;

    fn try_from(raw: RawHistogram) -> Result<Self> {
        let expected = flow_bins(&raw.x_axis)?;
        if raw.contents.len() != expected {
            return Err(Error::InvalidInput(format!(
                "histogram '{}' has {} contents, expected {expected} (bins + under/overflow)",
                raw.name,
                raw.contents.len()
            )));
        }
        Ok(Self {
            name: raw.name,
            title: raw.title,
            axis_titles: raw.axis_titles,
            attributes: raw.attributes,
            x_axis: raw.x_axis,
            contents: raw.contents,
            entries: raw.entries,
        })
    }
}

impl Histogram {
    /// Create an empty histogram with `n_bins` uniform bins over `[low, high)`.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        n_bins: usize,
        low: f64,
        high: f64,
    ) -> Result<Self> {
        let x_axis = Axis::new(n_bins, low, high)?;
        let contents = zeroed_contents(flow_bins(&x_axis)?)?;
        Ok(Self {
            name: name.into(),
            title: title.into(),
            axis_titles: AxisTitles::default(),
            attributes: DrawAttributes::default(),
            contents,
            x_axis,
            entries: 0.0,
        })
    }

    /// The x axis.
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    /// Number of in-range bins.
    pub fn n_bins(&self) -> usize {
        self.x_axis.n_bins()
    }

    /// Add `weight` to the bin containing `x` and return that bin number.
    pub fn fill(&mut self, x: f64, weight: f64) -> usize {
        let bin = self.x_axis.find_bin(x);
        self.contents[bin] += weight;
        self.entries += 1.0;
        bin
    }

    /// Content of `bin` (0 = underflow, `n_bins + 1` = overflow), or
    /// `None` past the overflow bin.
    pub fn bin_content(&self, bin: usize) -> Option<f64> {
        self.contents.get(bin).copied()
    }

    /// Overwrite the content of `bin`.
    pub fn set_bin_content(&mut self, bin: usize, value: f64) -> Result<()> {
        let n = self.contents.len();
        let slot = self.contents.get_mut(bin).ok_or_else(|| {
            Error::InvalidInput(format!("bin {bin} out of range (0..{n}) in '{}'", self.name))
        })?;
        *slot = value;
        Ok(())
    }

    /// In-range bin contents (length `n_bins`).
    pub fn contents(&self) -> &[f64] {
        &self.contents[1..=self.n_bins()]
    }

    /// Underflow content.
    pub fn underflow(&self) -> f64 {
        self.contents[0]
    }

    /// Overflow content.
    pub fn overflow(&self) -> f64 {
        self.contents[self.n_bins() + 1]
    }

    /// Sum of the in-range contents.
    pub fn integral(&self) -> f64 {
        self.contents().iter().sum()
    }

    /// Number of `fill` calls.
    pub fn entries(&self) -> f64 {
        self.entries
    }
}

/// A 2D histogram over two uniform axes.
///
/// The global bin of `(bx, by)` is `bx + (nx + 2) * by`, so each axis keeps
/// its own under/overflow row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHistogram2D")]
pub struct Histogram2D {
    /// Histogram name.
    pub name: String,
    /// Histogram title.
    pub title: String,
    /// Axis titles.
    pub axis_titles: AxisTitles,
    /// Marker and line attributes.
    pub attributes: DrawAttributes,
    x_axis: Axis,
    y_axis: Axis,
    contents: Vec<f64>,
    entries: f64,
}

#[derive(Deserialize)]
struct RawHistogram2D {
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    axis_titles: AxisTitles,
    #[serde(default)]
    attributes: DrawAttributes,
    x_axis: Axis,
    y_axis: Axis,
    contents: Vec<f64>,
    #[serde(default)]
    entries: f64,
}

impl TryFrom<RawHistogram2D> for Histogram2D {
    type Error = Error;

    fn try_from(raw: RawHistogram2D) -> Result<Self> {
        let expected = flow_bins_2d(&raw.x_axis, &raw.y_axis)?;
        if raw.contents.len() != expected {
            return Err(Error::InvalidInput(format!(
                "2D histogram '{}' has {} contents, expected {expected}",
                raw.name,
                raw.contents.len()
            )));
        }
        Ok(Self {
            name: raw.name,
            title: raw.title,
            axis_titles: raw.axis_titles,
            attributes: raw.attributes,
            x_axis: raw.x_axis,
            y_axis: raw.y_axis,
            contents: raw.contents,
            entries: raw.entries,
        })
    }
}

impl Histogram2D {
    /// Create an empty 2D histogram.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        nx: usize,
        x_low: f64,
        x_high: f64,
        ny: usize,
        y_low: f64,
        y_high: f64,
    ) -> Result<Self> {
        let x_axis = Axis::new(nx, x_low, x_high)?;
        let y_axis = Axis::new(ny, y_low, y_high)?;
        let contents = zeroed_contents(flow_bins_2d(&x_axis, &y_axis)?)?;
        Ok(Self {
            name: name.into(),
            title: title.into(),
            axis_titles: AxisTitles::default(),
            attributes: DrawAttributes::default(),
            contents,
            x_axis,
            y_axis,
            entries: 0.0,
        })
    }

    /// The x axis.
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    /// The y axis.
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// Global bin number of `(bx, by)`.
    pub fn bin(&self, bx: usize, by: usize) -> usize {
        // saturates for out-of-range input so lookups miss instead of wrapping
        (self.x_axis.n_bins() + 2).saturating_mul(by).saturating_add(bx)
    }

    /// Add `weight` to the bin containing `(x, y)` and return its global bin.
    pub fn fill(&mut self, x: f64, y: f64, weight: f64) -> usize {
        let bin = self.bin(self.x_axis.find_bin(x), self.y_axis.find_bin(y));
        self.contents[bin] += weight;
        self.entries += 1.0;
        bin
    }

    /// Content of a global bin, or `None` when out of range.
    pub fn bin_content(&self, bin: usize) -> Option<f64> {
        self.contents.get(bin).copied()
    }

    /// Content of the bin at `(bx, by)`.
    pub fn content_at(&self, bx: usize, by: usize) -> Option<f64> {
        if bx > self.x_axis.n_bins() + 1 || by > self.y_axis.n_bins() + 1 {
            return None;
        }
        self.bin_content(self.bin(bx, by))
    }

    /// Overwrite the content of a global bin.
    pub fn set_bin_content(&mut self, bin: usize, value: f64) -> Result<()> {
        let n = self.contents.len();
        let slot = self.contents.get_mut(bin).ok_or_else(|| {
            Error::InvalidInput(format!("bin {bin} out of range (0..{n}) in '{}'", self.name))
        })?;
        *slot = value;
        Ok(())
    }

    /// Sum of the in-range contents (flow rows and columns excluded).
    pub fn integral(&self) -> f64 {
        let (nx, ny) = (self.x_axis.n_bins(), self.y_axis.n_bins());
        let mut sum = 0.0;
        for by in 1..=ny {
            for bx in 1..=nx {
                sum += self.contents[self.bin(bx, by)];
            }
        }
        sum
    }

    /// Number of `fill` calls.
    pub fn entries(&self) -> f64 {
        self.entries
    }
}
