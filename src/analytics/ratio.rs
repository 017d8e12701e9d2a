//! Percentage ratios for churn and compliance metrics
//!
//! A single ratio primitive serves every proportion metric the dashboards
//! show: employee churn, trucker churn, document compliance. Division by zero
//! is a defined neutral value, not an error; negative operands are.

use thiserror::Error;

/// Errors that can occur during analytics computation
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Compute `numerator / denominator * 100`, clamped to `[0, 100]`.
///
/// Returns `0.0` when the denominator is zero so an empty population renders
/// as a zero rate instead of NaN. Both operands must be non-negative;
/// anything else fails with [`AnalyticsError::InvalidArgument`].
///
/// # Example
/// ```
/// use fleetlens::analytics::ratio;
///
/// assert_eq!(ratio(50, 100).unwrap(), 50.0);
/// assert_eq!(ratio(3, 0).unwrap(), 0.0);
/// ```
pub fn ratio(numerator: i64, denominator: i64) -> AnalyticsResult<f64> {
    if numerator < 0 {
        return Err(AnalyticsError::InvalidArgument(format!(
            "ratio numerator must be non-negative, got {numerator}"
        )));
    }

    if denominator < 0 {
        return Err(AnalyticsError::InvalidArgument(format!(
            "ratio denominator must be non-negative, got {denominator}"
        )));
    }

    if denominator == 0 {
        return Ok(0.0);
    }

    Ok((numerator as f64 / denominator as f64 * 100.0).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ratio() {
        assert_eq!(ratio(50, 100).unwrap(), 50.0);
        assert_eq!(ratio(1, 3).unwrap(), 100.0 / 3.0);
    }

    #[test]
    fn test_zero_denominator_is_zero_not_nan() {
        assert_eq!(ratio(0, 0).unwrap(), 0.0);
        assert_eq!(ratio(42, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_numerator_above_denominator_clamps() {
        assert_eq!(ratio(150, 100).unwrap(), 100.0);
    }

    #[test]
    fn test_negative_operands_rejected() {
        assert!(matches!(
            ratio(-1, 10),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(matches!(
            ratio(1, -10),
            Err(AnalyticsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_full_population() {
        assert_eq!(ratio(10, 10).unwrap(), 100.0);
    }
}
