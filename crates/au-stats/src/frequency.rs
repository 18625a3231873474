//! Count validation and normalization into frequencies.

use au_core::{Error, Result};

/// Plain sum of the counts.
#[inline]
pub fn total(counts: &[f64]) -> f64 {
    counts.iter().sum()
}

/// Check that every count is finite and non-negative.
///
/// `label` names the sequence in the error message (e.g. `"observed"`).
pub fn validate_counts(label: &str, counts: &[f64]) -> Result<()> {
    for (i, &c) in counts.iter().enumerate() {
        if !c.is_finite() || c < 0.0 {
            return Err(Error::InvalidInput(format!(
                "{label} count at bin {i} must be finite and >= 0, got {c}"
            )));
        }
    }
    Ok(())
}

/// Divide each count by the total, yielding a frequency vector summing to 1.
pub fn normalize(counts: &[f64]) -> Result<Vec<f64>> {
    validate_counts("counts", counts)?;
    let n = total(counts);
    if n <= 0.0 || !n.is_finite() {
        return Err(Error::InvalidInput(format!("cannot normalize counts with total {n}")));
    }
    Ok(counts.iter().map(|c| c / n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_sums_to_one() {
        let f = normalize(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_relative_eq!(f.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(f[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(f[3], 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero_total() {
        assert!(normalize(&[0.0, 0.0]).is_err());
        assert!(normalize(&[]).is_err());
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let err = validate_counts("observed", &[1.0, -2.0]).unwrap_err();
        assert!(err.to_string().contains("observed count at bin 1"));
        assert!(validate_counts("predicted", &[f64::NAN]).is_err());
        assert!(validate_counts("predicted", &[f64::INFINITY]).is_err());
        assert!(validate_counts("predicted", &[0.0, 3.5]).is_ok());
    }
}
