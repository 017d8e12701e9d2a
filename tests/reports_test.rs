//! Facade-level tests over a full snapshot

mod common;

use fleetlens::analytics::{
    business_impact, compliance_summary, employee_growth, trucker_distribution,
    TrendClassification, INDEPENDENT_LABEL,
};
use fleetlens::models::Snapshot;
use fleetlens::search::live_search;

use common::date;

#[test]
fn test_growth_report_over_snapshot() {
    let snapshot = common::create_snapshot();

    let report = employee_growth(&snapshot.employees);

    assert_eq!(report.total, 4);
    assert_eq!(report.series.len(), 3);
    assert!((report.average - 4.0 / 3.0).abs() < 1e-9);
    assert_eq!(report.forecast.basis_points, 3);
}

#[test]
fn test_distribution_report_over_snapshot() {
    let snapshot = common::create_snapshot();

    let report = trucker_distribution(&snapshot.truckers);

    // 2 of 3 truckers are independent: above the 40% independence threshold
    assert_eq!(
        report.company.trend,
        TrendClassification::IncreasingIndependence
    );
    assert_eq!(report.company.dominant.as_deref(), Some(INDEPENDENT_LABEL));
    assert_eq!(report.province.dominant.as_deref(), Some("ON"));

    let count_sum: u64 = report.province.entries.iter().map(|e| e.count).sum();
    assert_eq!(count_sum, snapshot.truckers.len() as u64);
}

#[test]
fn test_business_impact_over_snapshot_with_churn() {
    let mut snapshot = common::create_snapshot();
    common::archive_employee(
        &mut snapshot.employees[3],
        date(2024, 6, 1),
        "Contract ended",
    );

    let report =
        business_impact(&snapshot.employees, &snapshot.truckers, &snapshot.documents).unwrap();

    assert_eq!(report.employee_churn_rate, 25.0);
    assert_eq!(report.trucker_churn_rate, 0.0);
    // 2 of 3 documents verified
    assert_eq!(report.document_compliance_rate, 66.67);
    assert_eq!(report.totals.active_employees, 3);
    assert_eq!(report.totals.unverified_documents, 1);
}

#[test]
fn test_compliance_summary_matches_impact_totals() {
    let snapshot = common::create_snapshot();

    let summary =
        compliance_summary(&snapshot.employees, &snapshot.truckers, &snapshot.documents);
    let report =
        business_impact(&snapshot.employees, &snapshot.truckers, &snapshot.documents).unwrap();

    assert_eq!(report.totals, summary);
}

#[test]
fn test_empty_snapshot_renders_neutral_reports() {
    let snapshot = Snapshot::default();

    let growth = employee_growth(&snapshot.employees);
    assert!(growth.series.is_empty());
    assert_eq!(growth.average, 0.0);

    let distribution = trucker_distribution(&snapshot.truckers);
    assert!(distribution.company.entries.is_empty());
    assert_eq!(distribution.company.dominant, None);

    let impact =
        business_impact(&snapshot.employees, &snapshot.truckers, &snapshot.documents).unwrap();
    assert_eq!(impact.employee_churn_rate, 0.0);
    assert_eq!(impact.document_compliance_rate, 0.0);
}

#[test]
fn test_reports_serialize_to_json() {
    let snapshot = common::create_snapshot();

    let report =
        business_impact(&snapshot.employees, &snapshot.truckers, &snapshot.documents).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json.get("employee_churn_rate").is_some());
    assert!(json.get("totals").is_some());

    let distribution = trucker_distribution(&snapshot.truckers);
    let json = serde_json::to_value(&distribution).unwrap();
    assert_eq!(
        json["company"]["trend"],
        serde_json::json!("increasing_independence")
    );
}

#[test]
fn test_search_over_snapshot() {
    let snapshot = common::create_snapshot();

    let results = live_search("trucker2", &snapshot.employees, &snapshot.truckers, 10);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 2);
}

#[test]
fn test_snapshot_file_roundtrip() {
    let snapshot = common::create_snapshot();
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), serde_json::to_string(&snapshot).unwrap()).unwrap();

    let loaded = Snapshot::load(file.path()).unwrap();

    assert_eq!(loaded.record_count(), snapshot.record_count());
    let report = employee_growth(&loaded.employees);
    assert_eq!(report.total, 4);
}
