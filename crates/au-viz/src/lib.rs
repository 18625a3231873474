//! # au-viz
//!
//! Plot helpers for anutils objects: normalized-coordinate placement of
//! legend boxes, legend sizing, and marker/line/title styling.
//!
//! ## Example
//!
//! ```
//! use au_viz::{Legend, LegendOptions, Placement, place_legend};
//!
//! let mut legend = Legend::new();
//! legend.add_entry("data", "lp");
//! legend.add_entry("simulation", "f");
//! let ndc = place_legend(&mut legend, Placement::Right, None, &LegendOptions::default());
//! assert!((ndc.y2 - 1.02).abs() < 1e-12);
//! ```

#![warn(clippy::all)]

pub mod attributes;
pub mod color;
pub mod legend;
pub mod placement;

pub use attributes::{PlotAttributes, PlotObject, apply_attributes, apply_attributes_with_rng};
pub use legend::{Legend, LegendEntry, LegendOptions, TEXT_SIZE, place_legend};
pub use placement::{NdcBox, Placement, get_coord};
