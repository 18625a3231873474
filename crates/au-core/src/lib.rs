//! # au-core
//!
//! Shared building blocks for the anutils crates: the error type and the
//! draw attributes carried by every plottable object.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{AxisKind, AxisTitles, ColorIndex, DrawAttributes};
