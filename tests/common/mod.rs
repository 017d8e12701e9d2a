//! Common test utilities

use chrono::NaiveDate;
use fleetlens::models::{DocumentRecord, EmployeeRecord, Snapshot, TruckerRecord};

/// Build a date without the Option dance
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create an active employee registered on the given date
pub fn create_employee(id: i64, registered: NaiveDate) -> EmployeeRecord {
    EmployeeRecord {
        id,
        first_name: format!("Employee{id}"),
        last_name: "Test".to_string(),
        email: format!("employee{id}@earbor.test"),
        phone_number: Some(format!("+1-555-01{id:02}")),
        position: Some("Field Technician".to_string()),
        is_active: true,
        registration_date: Some(registered),
        archived_at: None,
        archive_reason: None,
    }
}

/// Create an active trucker with province and optional company
#[allow(dead_code)]
pub fn create_trucker(id: i64, province: &str, company: Option<&str>) -> TruckerRecord {
    TruckerRecord {
        id,
        first_name: format!("Trucker{id}"),
        last_name: "Test".to_string(),
        email: Some(format!("trucker{id}@earbor.test")),
        phone_number: None,
        driver_license_number: format!("DL-{id:06}"),
        province_of_issue: province.to_string(),
        truck_id_number: Some(format!("TRK-{id:04}")),
        company_name: company.map(|c| c.to_string()),
        is_active: true,
        registration_date: Some(date(2024, 1, 1)),
        archived_at: None,
        archive_reason: None,
    }
}

/// Create a document, verified or not
#[allow(dead_code)]
pub fn create_document(id: i64, verified: bool) -> DocumentRecord {
    DocumentRecord {
        id,
        document_type: "drivers_license".to_string(),
        file_path: format!("/uploads/doc_{id}.pdf"),
        upload_date: Some(date(2024, 2, 1)),
        is_verified: verified,
        verification_date: verified.then(|| date(2024, 2, 15)),
        verified_by: verified.then_some(1),
        employee_id: None,
        trucker_id: Some(id),
        archived_at: None,
        archive_reason: None,
    }
}

/// Archive a record set's member by marking its archival date
#[allow(dead_code)]
pub fn archive_employee(employee: &mut EmployeeRecord, when: NaiveDate, reason: &str) {
    employee.is_active = false;
    employee.archived_at = Some(when);
    employee.archive_reason = Some(reason.to_string());
}

/// Snapshot with a small mixed population
#[allow(dead_code)]
pub fn create_snapshot() -> Snapshot {
    Snapshot {
        employees: vec![
            create_employee(1, date(2024, 1, 5)),
            create_employee(2, date(2024, 1, 20)),
            create_employee(3, date(2024, 2, 10)),
            create_employee(4, date(2024, 3, 1)),
        ],
        truckers: vec![
            create_trucker(1, "ON", Some("Acme Logistics")),
            create_trucker(2, "ON", None),
            create_trucker(3, "QC", None),
        ],
        documents: vec![
            create_document(1, true),
            create_document(2, false),
            create_document(3, true),
        ],
    }
}
