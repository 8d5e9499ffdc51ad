//! Statistical helpers shared by the chart aggregator and the
//! recommendation heuristics.

/// Arithmetic mean. Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation around a known mean.
///
/// Returns 0.0 for an empty slice.
pub fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Nearest-rank quantile: the element at index `floor(n * p)` of ascending
/// `sorted`, with no interpolation. Returns `None` for an empty slice.
///
/// The exact rank rule matters for compatibility; do not swap in an
/// interpolating estimator.
pub fn nearest_rank(sorted: &[f64], p: f64) -> Option<f64> {
    let index = (sorted.len() as f64 * p).floor() as usize;
    sorted.get(index).copied()
}
