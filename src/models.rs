// Core record types for the fleetlens analytics engine

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Personnel record for an office employee
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmployeeRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub position: Option<String>,
    pub is_active: bool,
    pub registration_date: Option<NaiveDate>,
    pub archived_at: Option<NaiveDate>,
    pub archive_reason: Option<String>,
}

impl EmployeeRecord {
    /// Display name: "{first} {last}"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this record has been moved to the archive
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

/// Personnel record for a contracted trucker
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TruckerRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub driver_license_number: String,
    pub province_of_issue: String,
    pub truck_id_number: Option<String>,
    /// None means the trucker operates independently
    pub company_name: Option<String>,
    pub is_active: bool,
    pub registration_date: Option<NaiveDate>,
    pub archived_at: Option<NaiveDate>,
    pub archive_reason: Option<String>,
}

impl TruckerRecord {
    /// Display name: "{first} {last}"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this record has been moved to the archive
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

/// Compliance document attached to an employee or trucker
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentRecord {
    pub id: i64,
    pub document_type: String,
    pub file_path: String,
    pub upload_date: Option<NaiveDate>,
    pub is_verified: bool,
    pub verification_date: Option<NaiveDate>,
    pub verified_by: Option<i64>,
    pub employee_id: Option<i64>,
    pub trucker_id: Option<i64>,
    pub archived_at: Option<NaiveDate>,
    pub archive_reason: Option<String>,
}

impl DocumentRecord {
    /// Whether this record has been moved to the archive
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

/// Materialized record sets handed to the engine by the request layer.
///
/// The snapshot is already filtered by whatever access-control scoping the
/// surrounding system enforces; the engine never re-fetches or mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Snapshot {
    pub employees: Vec<EmployeeRecord>,
    pub truckers: Vec<TruckerRecord>,
    pub documents: Vec<DocumentRecord>,
}

impl Snapshot {
    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;

        let snapshot: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))?;

        Ok(snapshot)
    }

    /// Total number of records across all entity kinds
    pub fn record_count(&self) -> usize {
        self.employees.len() + self.truckers.len() + self.documents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_name() {
        let employee = EmployeeRecord {
            first_name: "Maria".to_string(),
            last_name: "Santos".to_string(),
            ..Default::default()
        };
        assert_eq!(employee.full_name(), "Maria Santos");
    }

    #[test]
    fn test_archived_flag_derived_from_timestamp() {
        let mut trucker = TruckerRecord::default();
        assert!(!trucker.is_archived());

        trucker.archived_at = Some(date(2024, 6, 1));
        assert!(trucker.is_archived());
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let snapshot = Snapshot {
            employees: vec![EmployeeRecord {
                id: 1,
                first_name: "Ana".to_string(),
                last_name: "Cruz".to_string(),
                email: "ana@example.com".to_string(),
                is_active: true,
                registration_date: Some(date(2024, 1, 15)),
                ..Default::default()
            }],
            ..Default::default()
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: Snapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.employees.len(), 1);
        assert_eq!(restored.employees[0].email, "ana@example.com");
        assert_eq!(restored.record_count(), 1);
    }

    #[test]
    fn test_snapshot_load_missing_file_errors() {
        let result = Snapshot::load(Path::new("/nonexistent/snapshot.json"));
        assert!(result.is_err());
    }
}
