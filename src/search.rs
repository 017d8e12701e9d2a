//! Live search across personnel records
//!
//! Case-insensitive substring matching over the identifying fields of active
//! employees and truckers, capped per entity kind so the typeahead stays
//! small. Archived records never surface here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{EmployeeRecord, TruckerRecord};

/// Default cap on hits returned per entity kind
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Entity kind of a search hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Employee,
    Trucker,
}

impl EntityKind {
    /// Get string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Trucker => "trucker",
        }
    }
}

/// One live-search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub kind: EntityKind,
    pub id: i64,
    pub name: String,

    /// The field a user would recognize the record by: email for employees,
    /// driver license number for truckers
    pub identifier: String,
    pub is_active: bool,
}

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn employee_matches(employee: &EmployeeRecord, needle: &str) -> bool {
    matches(&employee.first_name, needle)
        || matches(&employee.last_name, needle)
        || matches(&employee.email, needle)
}

fn trucker_matches(trucker: &TruckerRecord, needle: &str) -> bool {
    matches(&trucker.first_name, needle)
        || matches(&trucker.last_name, needle)
        || trucker.email.as_deref().is_some_and(|e| matches(e, needle))
        || matches(&trucker.driver_license_number, needle)
        || trucker
            .truck_id_number
            .as_deref()
            .is_some_and(|t| matches(t, needle))
}

/// Search active employees and truckers for a query string.
///
/// Employees are listed before truckers; each kind contributes at most
/// `limit` hits, in input order.
pub fn live_search(
    query: &str,
    employees: &[EmployeeRecord],
    truckers: &[TruckerRecord],
    limit: usize,
) -> Vec<SearchResult> {
    let needle = query.to_lowercase();
    let mut results = Vec::new();

    results.extend(
        employees
            .iter()
            .filter(|e| e.is_active && !e.is_archived() && employee_matches(e, &needle))
            .take(limit)
            .map(|e| SearchResult {
                kind: EntityKind::Employee,
                id: e.id,
                name: e.full_name(),
                identifier: e.email.clone(),
                is_active: e.is_active,
            }),
    );

    results.extend(
        truckers
            .iter()
            .filter(|t| t.is_active && !t.is_archived() && trucker_matches(t, &needle))
            .take(limit)
            .map(|t| SearchResult {
                kind: EntityKind::Trucker,
                id: t.id,
                name: t.full_name(),
                identifier: t.driver_license_number.clone(),
                is_active: t.is_active,
            }),
    );

    debug!(query = %query, hits = results.len(), "live search completed");

    results
}
