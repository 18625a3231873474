#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte splits the remaining f64s between predicted and observed.
    let split = data[0] as usize;
    let values: Vec<f64> = data[1..]
        .chunks_exact(8)
        .map(|c| f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
        .collect();
    let split = split.min(values.len());
    let (predicted, observed) = values.split_at(split);

    if let Ok(psi) = au_stats::psi_test(predicted, observed) {
        assert!(psi.is_finite(), "psi = {psi} for {predicted:?} vs {observed:?}");
    }
});
