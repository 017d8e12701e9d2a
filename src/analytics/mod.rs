//! Analytics aggregation and forecasting engine
//!
//! Pure, stateless computations over materialized record snapshots:
//! - [`time_series`] - monthly bucketing and series averages
//! - [`forecast`] - one-step-ahead prediction via ordinary least squares
//! - [`distribution`] - categorical grouping with trend classification
//! - [`ratio`] - churn and compliance percentage ratios
//! - [`reports`] - the facade shaping the dashboard responses
//!
//! Every function is a pure function of its input slice, so concurrent
//! invocations need no coordination.

pub mod distribution;
pub mod forecast;
pub mod ratio;
pub mod reports;
pub mod time_series;

pub use distribution::{
    analyze, classify_trend, resolve_label, Distribution, DistributionEntry, TrendClassification,
};
pub use forecast::{forecast_next, Forecast};
pub use ratio::{ratio, AnalyticsError, AnalyticsResult};
pub use reports::{
    business_impact, compliance_summary, employee_growth, growth_report, trucker_distribution,
    BusinessImpactReport, ComplianceSummary, GrowthReport, TruckerDistributionReport,
    INDEPENDENT_LABEL, UNKNOWN_PROVINCE_LABEL,
};
pub use time_series::{aggregate_by_month, average, period_key, TimeSeriesPoint};

/// Round a percentage to two decimals for display
pub(crate) fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
