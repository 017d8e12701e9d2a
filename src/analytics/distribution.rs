//! Categorical distribution analysis with null-coalescing grouping
//!
//! This module provides functionality for:
//! - Grouping records by a categorical key with an explicit fallback label
//! - Per-group counts and display percentages
//! - Dominant-group identification with a deterministic tie-break
//! - Qualitative trend classification via an ordered rule list

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::analytics::round_percentage;

/// Fallback percentage share above which a population is drifting away from
/// company affiliation
const FALLBACK_SHARE_THRESHOLD: f64 = 40.0;

/// Share above which a single non-fallback group dominates the population
const DOMINANCE_SHARE_THRESHOLD: f64 = 60.0;

/// One group of a categorical distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// Group label, unique within one distribution
    pub label: String,

    /// Number of records in this group
    pub count: u64,

    /// Share of the total, in percent, rounded to two decimals
    pub percentage: f64,
}

/// Qualitative trend over a computed distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendClassification {
    /// The fallback group's share exceeds the independence threshold
    IncreasingIndependence,

    /// One non-fallback group holds more than the dominance threshold
    SingleEntityDominance,

    /// No group stands out
    Balanced,
}

impl TrendClassification {
    /// Get string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IncreasingIndependence => "increasing_independence",
            Self::SingleEntityDominance => "single_entity_dominance",
            Self::Balanced => "balanced",
        }
    }
}

impl std::fmt::Display for TrendClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of analyzing one grouping dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    /// Groups in first-encountered insertion order
    pub entries: Vec<DistributionEntry>,

    /// Label with the strictly highest count; `None` for an empty input.
    /// Ties are broken by first-encountered order.
    pub dominant: Option<String>,

    /// Qualitative trend over the computed shares
    pub trend: TrendClassification,
}

/// Trend rules evaluated in order; the first matching predicate wins.
///
/// Keeping the policy as data separates it from the counting logic and lets
/// each predicate be tested on its own.
type TrendPredicate = fn(&[DistributionEntry], &str) -> bool;

const TREND_RULES: &[(TrendPredicate, TrendClassification)] = &[
    (fallback_share_exceeds_threshold, TrendClassification::IncreasingIndependence),
    (single_entity_dominates, TrendClassification::SingleEntityDominance),
];

fn fallback_share_exceeds_threshold(entries: &[DistributionEntry], fallback: &str) -> bool {
    entries
        .iter()
        .any(|e| e.label == fallback && e.percentage > FALLBACK_SHARE_THRESHOLD)
}

fn single_entity_dominates(entries: &[DistributionEntry], fallback: &str) -> bool {
    entries
        .iter()
        .any(|e| e.label != fallback && e.percentage > DOMINANCE_SHARE_THRESHOLD)
}

/// Classify the trend of a computed distribution
#[must_use]
pub fn classify_trend(entries: &[DistributionEntry], fallback: &str) -> TrendClassification {
    TREND_RULES
        .iter()
        .find(|(predicate, _)| predicate(entries, fallback))
        .map(|(_, classification)| *classification)
        .unwrap_or(TrendClassification::Balanced)
}

/// Resolve an optional group label to a required one.
///
/// The explicit resolution step keeps the fallback a named value at the call
/// site instead of a magic string scattered through the grouping code.
#[must_use]
pub fn resolve_label(label: Option<String>, fallback: &str) -> String {
    label.unwrap_or_else(|| fallback.to_string())
}

/// Group records by a categorical key and compute the distribution.
///
/// `label_of` may return `None`; such records are coalesced into
/// `fallback_label`. An empty input yields empty entries and no dominant
/// label, never an error.
///
/// # Arguments
/// * `records` - The record collection to group
/// * `label_of` - Accessor returning the record's group label, if present
/// * `fallback_label` - Label substituted for absent group values
pub fn analyze<R, F>(records: &[R], label_of: F, fallback_label: &str) -> Distribution
where
    F: Fn(&R) -> Option<String>,
{
    // Insertion-ordered counting: the index map preserves first-encounter
    // order so dominance tie-breaks stay deterministic
    let mut order: Vec<(String, u64)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let label = resolve_label(label_of(record), fallback_label);
        match positions.get(&label) {
            Some(&pos) => order[pos].1 += 1,
            None => {
                positions.insert(label.clone(), order.len());
                order.push((label, 1));
            }
        }
    }

    let total: u64 = order.iter().map(|(_, count)| count).sum();

    if total == 0 {
        return Distribution {
            entries: Vec::new(),
            dominant: None,
            trend: TrendClassification::Balanced,
        };
    }

    let entries: Vec<DistributionEntry> = order
        .into_iter()
        .map(|(label, count)| DistributionEntry {
            label,
            count,
            percentage: round_percentage(count as f64 / total as f64 * 100.0),
        })
        .collect();

    let mut dominant: Option<&DistributionEntry> = None;
    for entry in &entries {
        // Strict comparison keeps the first-encountered label on ties
        if dominant.map(|d| entry.count > d.count).unwrap_or(true) {
            dominant = Some(entry);
        }
    }

    let trend = classify_trend(&entries, fallback_label);

    Distribution {
        dominant: dominant.map(|e| e.label.clone()),
        entries,
        trend,
    }
}
