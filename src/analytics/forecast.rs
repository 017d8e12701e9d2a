//! One-step-ahead forecasting via ordinary least squares
//!
//! Fits a line `y = a*x + b` over the zero-based indices of a count series
//! and extrapolates one index beyond the last observed point. Degenerate
//! inputs resolve to defined neutral predictions instead of errors.

use serde::{Deserialize, Serialize};

/// Result of a one-step-ahead forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Raw extrapolated value at the next index.
    ///
    /// Not clamped: a declining trend may legitimately predict a value below
    /// zero for small counts. Callers round or clamp for display.
    pub predicted_next: f64,

    /// Number of historical points the fit used
    pub basis_points: usize,
}

/// Forecast the next value of a count series.
///
/// Closed-form normal-equation solution: with n points, mean index `x̄` and
/// mean count `ȳ`, the slope is `Σ(xᵢ-x̄)(yᵢ-ȳ) / Σ(xᵢ-x̄)²` and the
/// intercept `ȳ - a·x̄`; the prediction is evaluated at `x = n`.
///
/// # Edge policy
/// - Empty series predicts `0.0`
/// - A single point predicts that point (slope undefined, treated as flat)
/// - A zero denominator falls back to the flat prediction `ȳ`
///
/// These are policy choices, not numerical errors; the function never fails.
#[must_use]
pub fn forecast_next(counts: &[u64]) -> Forecast {
    let n = counts.len();

    if n == 0 {
        return Forecast { predicted_next: 0.0, basis_points: 0 };
    }

    if n == 1 {
        return Forecast {
            predicted_next: counts[0] as f64,
            basis_points: 1,
        };
    }

    let n_f64 = n as f64;
    let mean_x = (n_f64 - 1.0) / 2.0;
    let mean_y = counts.iter().sum::<u64>() as f64 / n_f64;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &count) in counts.iter().enumerate() {
        let dx = i as f64 - mean_x;
        numerator += dx * (count as f64 - mean_y);
        denominator += dx * dx;
    }

    // Denominator is zero only when all x coincide (n <= 1), but guard anyway
    let predicted_next = if denominator == 0.0 {
        mean_y
    } else {
        let slope = numerator / denominator;
        let intercept = mean_y - slope * mean_x;
        slope * n_f64 + intercept
    };

    Forecast { predicted_next, basis_points: n }
}
