//! # au-hist
//!
//! Binned containers for analysis helpers: uniform axes, 1D/2D histograms,
//! point graphs, graph-to-histogram conversion, and keyed containers that
//! can be loaded into an owned [`Bunch`].
//!
//! Bin numbering follows the usual HEP convention: bin 0 is the underflow,
//! bins `1..=n` are in range and bin `n + 1` is the overflow.
//!
//! ## Example
//!
//! ```
//! use au_hist::{Graph, convert::graph_to_hist};
//!
//! let g = Graph::new("eff", vec![(0.0, 0.5), (1.0, 0.7), (2.0, 0.9)]);
//! let h = graph_to_hist(&g, 100).unwrap();
//! assert_eq!(h.name, "eff_histo");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axis;
pub mod container;
pub mod convert;
pub mod graph;
pub mod histogram;

pub use axis::Axis;
pub use container::{
    Bunch, BunchItem, ContainerEntry, KeyInfo, KeyedContainer, MemoryDirectory, StoredObject,
};
pub use convert::{DEFAULT_GRAPH_BINS, graph_to_hist, graph2d_to_hist2d};
pub use graph::{Extent2D, Graph, Graph2D};
pub use histogram::{Histogram, Histogram2D};
