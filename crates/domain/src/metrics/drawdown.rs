//! Drawdown statistics for a single equity trajectory.

use crate::value_objects::percentiles::Drawdown;

/// Calculates the maximum and average relative drawdown of an equity curve.
///
/// A running peak starts at the first value. Every point strictly below the
/// peak contributes `(peak - equity) / peak`. Points sitting at the peak are
/// excluded from the average. A zero peak contributes nothing.
///
/// # Arguments
///
/// * `equity` - Equity values in time order
///
/// # Returns
///
/// * `Drawdown` - Both fields are zero for an empty or monotonically rising curve
#[must_use]
pub fn calculate_drawdown(equity: &[f64]) -> Drawdown {
    let Some(&first) = equity.first() else {
        return Drawdown::default();
    };

    let mut peak = first;
    let mut max_drawdown = 0.0_f64;
    let mut sum = 0.0;
    let mut count = 0_usize;

    for &value in equity {
        if value > peak {
            peak = value;
        }
        if value < peak && peak > 0.0 {
            let drawdown = (peak - value) / peak;
            if drawdown > 0.0 {
                max_drawdown = max_drawdown.max(drawdown);
                sum += drawdown;
                count += 1;
            }
        }
    }

    let avg_drawdown = if count > 0 { sum / count as f64 } else { 0.0 };

    Drawdown {
        max_drawdown,
        avg_drawdown,
    }
}
