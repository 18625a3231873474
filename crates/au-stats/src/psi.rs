//! Jaynes psi test: plausibility of a predicted binned distribution given
//! an observed one.
//!
//! `psi = 10 · N_obs · Σ_i f_obs[i] · log10(f_obs[i] / f_pred[i])`
//!
//! where `f` are the normalized frequencies and `N_obs` the observed total.
//! The result is in decibels: values near 0 mean the predicted hypothesis
//! explains the data well, while `psi = X dB` means some other hypothesis
//! would do `X dB` better. Reference: E.T. Jaynes, *Probability Theory:
//! The Logic of Science*, pp. 300-305 (Cambridge University Press, 2003).

use au_core::{Error, Result};
use serde::Serialize;

use crate::frequency::{total, validate_counts};

/// Psi value of one named hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PsiScore {
    /// Hypothesis name.
    pub name: String,
    /// Psi value in decibels.
    pub psi: f64,
}

/// Evaluate the psi test of `predicted` against `observed`, in decibels.
///
/// Both inputs are bin counts over the same binning. Bins where the
/// predicted frequency is zero, or where nothing was observed, contribute
/// nothing to the sum. A score that does not fit in an `f64` is an error.
pub fn psi_test(predicted: &[f64], observed: &[f64]) -> Result<f64> {
    let (n_obs, sum) = weighted_log_ratio(predicted, observed)?;
    let psi = 10.0 * n_obs * sum;
    if !psi.is_finite() {
        return Err(Error::InvalidInput(format!(
            "psi overflows for an observed total of {n_obs:e} (divergence {sum:e})"
        )));
    }
    Ok(psi)
}

/// Per-count divergence `Σ f_obs · log10(f_obs / f_pred)` without the
/// `10 · N_obs` scaling applied by [`psi_test`].
pub fn divergence(predicted: &[f64], observed: &[f64]) -> Result<f64> {
    Ok(weighted_log_ratio(predicted, observed)?.1)
}

/// Score every candidate against the same observation.
///
/// Results are ordered by `|psi|`, most plausible hypothesis first.
pub fn rank_hypotheses(
    observed: &[f64],
    candidates: &[(&str, &[f64])],
) -> Result<Vec<PsiScore>> {
    let mut scores = candidates
        .iter()
        .map(|(name, predicted)| {
            Ok(PsiScore { name: (*name).to_string(), psi: psi_test(predicted, observed)? })
        })
        .collect::<Result<Vec<_>>>()?;
    scores.sort_by(|a, b| a.psi.abs().total_cmp(&b.psi.abs()));
    Ok(scores)
}

/// Returns `(N_obs, Σ f_obs · log10(f_obs / f_pred))`.
fn weighted_log_ratio(predicted: &[f64], observed: &[f64]) -> Result<(f64, f64)> {
    validate_counts("observed", observed)?;
    validate_counts("predicted", predicted)?;

    let n_obs = checked_total("observed", observed)?;
    let n_pred = checked_total("predicted", predicted)?;

    if predicted.len() != observed.len() {
        return Err(Error::InvalidInput(format!(
            "different number of bins: predicted has {}, observed has {}",
            predicted.len(),
            observed.len()
        )));
    }

    let mut sum = 0.0;
    let mut skipped = 0usize;
    for (&pred, &obs) in predicted.iter().zip(observed) {
        let f_pred = pred / n_pred;
        let f_obs = obs / n_obs;
        // 0 · log(0 / x) -> 0
        if f_pred <= 0.0 || f_obs == 0.0 {
            skipped += 1;
            continue;
        }
        // difference of logs: the ratio overflows for subnormal f_pred
        sum += f_obs * (f_obs.log10() - f_pred.log10());
    }
    if skipped > 0 {
        log::trace!("psi test: {skipped} of {} bins contribute nothing", predicted.len());
    }

    Ok((n_obs, sum))
}

fn checked_total(label: &str, counts: &[f64]) -> Result<f64> {
    let n = total(counts);
    if n <= 0.0 {
        return Err(Error::InvalidInput(format!("{label} counts sum to zero")));
    }
    if !n.is_finite() {
        return Err(Error::InvalidInput(format!("{label} counts overflow when summed")));
    }
    Ok(n)
}
