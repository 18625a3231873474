//! Statistics helpers for anutils.
//!
//! This crate hosts the binned-comparison math:
//! - count validation and normalization into frequencies
//! - the Jaynes psi plausibility test and hypothesis ranking

pub mod frequency;
pub mod psi;

pub use psi::{PsiScore, divergence, psi_test, rank_hypotheses};
