//! Legend sizing and placement.

use au_core::{Error, Result};
use serde::Deserialize;

use crate::placement::{NdcBox, Placement, get_coord};

/// NDC height of one legend row.
pub const TEXT_SIZE: f64 = 0.05;

/// One legend line: a label and the draw option of its swatch
/// (`"l"` line, `"p"` marker, `"f"` fill, or combinations).
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub option: String,
}

/// A legend box with entries laid out in columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
    n_columns: usize,
    ndc: Option<NdcBox>,
}

impl Default for Legend {
    fn default() -> Self {
        Self { entries: Vec::new(), n_columns: 1, ndc: None }
    }
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, label: impl Into<String>, option: impl Into<String>) {
        self.entries.push(LegendEntry { label: label.into(), option: option.into() });
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    pub fn set_n_columns(&mut self, n_columns: usize) -> Result<()> {
        if n_columns == 0 {
            return Err(Error::InvalidInput("a legend needs at least one column".into()));
        }
        self.n_columns = n_columns;
        Ok(())
    }

    /// Rows needed to lay out every entry over `n_columns`.
    pub fn n_rows(&self) -> usize {
        self.entries.len().div_ceil(self.n_columns)
    }

    /// Box assigned by [`place_legend`] or [`Legend::set_ndc`].
    pub fn ndc(&self) -> Option<NdcBox> {
        self.ndc
    }

    pub fn set_ndc(&mut self, ndc: NdcBox) {
        self.ndc = Some(ndc);
    }
}

/// Sizing options of [`place_legend`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LegendOptions {
    /// NDC width reserved for one column of text.
    pub text_length: f64,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self { text_length: 0.12 }
    }
}

impl LegendOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Size the legend from its rows and columns, place it with [`get_coord`]
/// and store the resulting box on the legend.
pub fn place_legend(
    legend: &mut Legend,
    placement: Placement,
    y_start: Option<f64>,
    options: &LegendOptions,
) -> NdcBox {
    let y_width = TEXT_SIZE * legend.n_rows() as f64;
    let x_width = options.text_length * legend.n_columns() as f64;
    let ndc = get_coord(placement, x_width, y_width, y_start);
    log::debug!(
        "legend at {placement}: {} rows x {} columns -> {ndc:?}",
        legend.n_rows(),
        legend.n_columns()
    );
    legend.set_ndc(ndc);
    ndc
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn legend(n: usize) -> Legend {
        let mut l = Legend::new();
        for i in 0..n {
            l.add_entry(format!("sample {i}"), "f");
        }
        l
    }

    #[test]
    fn test_rows_follow_columns() {
        let mut l = legend(5);
        assert_eq!(l.n_rows(), 5);
        l.set_n_columns(2).unwrap();
        assert_eq!(l.n_rows(), 3);
        assert!(l.set_n_columns(0).is_err());
        assert_eq!(Legend::new().n_rows(), 0);
    }

    #[test]
    fn test_place_legend_sizes_box() {
        let mut l = legend(3);
        let ndc = place_legend(&mut l, Placement::Left, Some(0.9), &LegendOptions::default());
        assert_eq!(l.ndc(), Some(ndc));
        assert_relative_eq!(ndc.x1, 0.22);
        assert_relative_eq!(ndc.width(), 0.12, epsilon = 1e-12);
        assert_relative_eq!(ndc.y2, 0.895, epsilon = 1e-12);
        assert_relative_eq!(ndc.height(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_place_legend_two_columns() {
        let mut l = legend(4);
        l.set_n_columns(2).unwrap();
        let opts = LegendOptions { text_length: 0.2 };
        let ndc = place_legend(&mut l, Placement::Right, None, &opts);
        assert_relative_eq!(ndc.width(), 0.4, epsilon = 1e-12);
        assert_relative_eq!(ndc.height(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_options_from_json() {
        let o = LegendOptions::from_json_str(r#"{"text_length": 0.3}"#).unwrap();
        assert_relative_eq!(o.text_length, 0.3);
        assert_eq!(LegendOptions::from_json_str("{}").unwrap(), LegendOptions::default());
        assert!(LegendOptions::from_json_str(r#"{"textlength": 0.3}"#).is_err());
    }
}
