//! Linear-interpolation quantile estimator.
//!
//! Matches NumPy's default `"linear"` method: for `n` sorted values the
//! quantile `q` sits at position `(n - 1) * q` and is interpolated between
//! the two neighbouring order statistics.

/// Computes the `q`-quantile of an unordered slice.
///
/// The input is copied and sorted ascending. Returns `None` for an empty
/// slice. `q` is clamped to `[0, 1]`.
///
/// # Arguments
///
/// * `values` - Sample values in any order
/// * `q` - Quantile in `[0, 1]` (0.5 is the median)
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    match values {
        [] => None,
        [single] => Some(*single),
        _ => {
            let mut sorted = values.to_vec();
            sort_ascending(&mut sorted);
            quantile_sorted(&sorted, q)
        }
    }
}

/// Computes the `q`-quantile of a slice that is already sorted ascending.
///
/// Use this to read several quantiles from a single sort.
#[must_use]
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let q = if q.is_nan() { 0.0 } else { q.clamp(0.0, 1.0) };

    let pos = last as f64 * q;
    let lower = pos.floor() as usize;
    let upper = (lower + 1).min(last);
    let frac = pos - pos.floor();

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Sorts in place, ascending, with NaN ordered last.
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by(f64::total_cmp);
}
