//! Dashboard report facade
//!
//! Composes the analytics primitives into the three response shapes the
//! request layer serves: growth, trucker distribution, and business impact.
//! Every function here is a pure shaping step over already-fetched record
//! slices; no I/O happens inside the facade.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::distribution::{analyze, Distribution};
use crate::analytics::forecast::{forecast_next, Forecast};
use crate::analytics::ratio::{ratio, AnalyticsResult};
use crate::analytics::round_percentage;
use crate::analytics::time_series::{aggregate_by_month, average, TimeSeriesPoint};
use crate::models::{DocumentRecord, EmployeeRecord, TruckerRecord};

/// Label substituted for truckers with no company affiliation
pub const INDEPENDENT_LABEL: &str = "Independent";

/// Label substituted for truckers with no recorded province of issue
pub const UNKNOWN_PROVINCE_LABEL: &str = "Unknown";

/// Monthly growth series with average and next-period forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthReport {
    /// Observed months, ascending; zero-count months are absent
    pub series: Vec<TimeSeriesPoint>,

    /// Total number of records in the input set
    pub total: u64,

    /// Arithmetic mean of the monthly counts
    pub average: f64,

    /// One-step-ahead forecast over the series counts
    pub forecast: Forecast,
}

/// Build a growth report for any timestamped record set.
///
/// Pipeline: bucket by month, average the counts, forecast the next period.
pub fn growth_report<R, F>(records: &[R], date_of: F) -> GrowthReport
where
    F: Fn(&R) -> Option<NaiveDate>,
{
    let series = aggregate_by_month(records, date_of);
    let counts: Vec<u64> = series.iter().map(|p| p.count).collect();

    debug!(months = series.len(), total = records.len(), "computed growth series");

    GrowthReport {
        average: average(&series),
        forecast: forecast_next(&counts),
        total: records.len() as u64,
        series,
    }
}

/// Growth report over employee registrations
pub fn employee_growth(employees: &[EmployeeRecord]) -> GrowthReport {
    growth_report(employees, |e| e.registration_date)
}

/// Trucker population broken down by two independent dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruckerDistributionReport {
    /// Distribution by province of license issue
    pub province: Distribution,

    /// Distribution by company affiliation, independents coalesced
    pub company: Distribution,
}

/// Analyze the trucker population by province and by company.
///
/// The two dimensions are computed independently and share no state.
pub fn trucker_distribution(truckers: &[TruckerRecord]) -> TruckerDistributionReport {
    let province = analyze(
        truckers,
        |t| {
            if t.province_of_issue.is_empty() {
                None
            } else {
                Some(t.province_of_issue.clone())
            }
        },
        UNKNOWN_PROVINCE_LABEL,
    );

    let company = analyze(truckers, |t| t.company_name.clone(), INDEPENDENT_LABEL);

    debug!(
        provinces = province.entries.len(),
        companies = company.entries.len(),
        "computed trucker distribution"
    );

    TruckerDistributionReport { province, company }
}

/// Raw population and document counts for the compliance dashboard tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub total_employees: u64,
    pub active_employees: u64,
    pub total_truckers: u64,
    pub active_truckers: u64,
    pub documents_uploaded: u64,
    pub documents_verified: u64,
    pub unverified_documents: u64,
}

/// Count totals, actives and document verification state.
///
/// Counts are passed through to responses unmodified; archived records count
/// toward totals but never toward actives.
pub fn compliance_summary(
    employees: &[EmployeeRecord],
    truckers: &[TruckerRecord],
    documents: &[DocumentRecord],
) -> ComplianceSummary {
    let active_employees = employees
        .iter()
        .filter(|e| e.is_active && !e.is_archived())
        .count() as u64;
    let active_truckers = truckers
        .iter()
        .filter(|t| t.is_active && !t.is_archived())
        .count() as u64;
    let documents_verified = documents
        .iter()
        .filter(|d| d.is_verified && !d.is_archived())
        .count() as u64;
    let documents_uploaded = documents.len() as u64;

    ComplianceSummary {
        total_employees: employees.len() as u64,
        active_employees,
        total_truckers: truckers.len() as u64,
        active_truckers,
        documents_uploaded,
        documents_verified,
        unverified_documents: documents_uploaded - documents_verified,
    }
}

/// Churn and compliance rates plus the raw counts behind them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessImpactReport {
    /// Percentage of employees ever created that are now archived
    pub employee_churn_rate: f64,

    /// Percentage of truckers ever created that are now archived
    pub trucker_churn_rate: f64,

    /// Percentage of documents flagged verified out of all documents
    pub document_compliance_rate: f64,

    /// Raw counts passed through from the record sets
    pub totals: ComplianceSummary,
}

/// Compute churn and compliance rates for the business-impact dashboard.
///
/// Each rate is a single [`ratio`] call; the record sets supply both the
/// numerators (archived / verified counts) and denominators (ever-created
/// totals). Rates are rounded to two decimals for display.
pub fn business_impact(
    employees: &[EmployeeRecord],
    truckers: &[TruckerRecord],
    documents: &[DocumentRecord],
) -> AnalyticsResult<BusinessImpactReport> {
    let totals = compliance_summary(employees, truckers, documents);

    let archived_employees = employees.iter().filter(|e| e.is_archived()).count() as i64;
    let archived_truckers = truckers.iter().filter(|t| t.is_archived()).count() as i64;

    let employee_churn_rate = ratio(archived_employees, totals.total_employees as i64)?;
    let trucker_churn_rate = ratio(archived_truckers, totals.total_truckers as i64)?;
    let document_compliance_rate = ratio(
        totals.documents_verified as i64,
        totals.documents_uploaded as i64,
    )?;

    debug!(
        employee_churn = employee_churn_rate,
        trucker_churn = trucker_churn_rate,
        compliance = document_compliance_rate,
        "computed business impact rates"
    );

    Ok(BusinessImpactReport {
        employee_churn_rate: round_percentage(employee_churn_rate),
        trucker_churn_rate: round_percentage(trucker_churn_rate),
        document_compliance_rate: round_percentage(document_compliance_rate),
        totals,
    })
}
