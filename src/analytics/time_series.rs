//! Monthly time-series aggregation over timestamped records
//!
//! This module provides functionality for:
//! - Bucketing record collections into ordered monthly counts
//! - Computing the arithmetic mean of a count series
//!
//! Periods are `YYYY-MM` strings; lexicographic ordering over that format is
//! chronologically correct, so a `BTreeMap` keyed by period yields the series
//! already sorted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One month of a count series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Calendar month as `YYYY-MM`
    pub period: String,

    /// Number of records whose date falls in this month
    pub count: u64,
}

/// Derive the `YYYY-MM` period key for a date
#[must_use]
pub fn period_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Bucket records into ordered monthly counts.
///
/// Records whose date accessor yields `None` are excluded, not errored.
/// Months with zero records are absent from the result; the series is not
/// gap-filled, so consumers see only observed months.
///
/// # Arguments
/// * `records` - The record collection to bucket
/// * `date_of` - Accessor returning the record's date, if it has one
pub fn aggregate_by_month<R, F>(records: &[R], date_of: F) -> Vec<TimeSeriesPoint>
where
    F: Fn(&R) -> Option<NaiveDate>,
{
    let mut buckets: BTreeMap<String, u64> = BTreeMap::new();

    for record in records {
        if let Some(date) = date_of(record) {
            *buckets.entry(period_key(date)).or_insert(0) += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(period, count)| TimeSeriesPoint { period, count })
        .collect()
}

/// Arithmetic mean of all counts in a series.
///
/// Returns `0.0` for an empty series rather than dividing by zero; dashboards
/// must render something for an empty dataset.
#[must_use]
pub fn average(series: &[TimeSeriesPoint]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }

    let sum: u64 = series.iter().map(|p| p.count).sum();
    sum as f64 / series.len() as f64
}
