//! CSV export of personnel records
//!
//! Renders employee and trucker record sets as CSV for download by
//! administrators. Fields containing commas, quotes or newlines are quoted
//! RFC-4180 style.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use crate::models::{EmployeeRecord, TruckerRecord};

/// Header row for employee exports
const EMPLOYEE_HEADER: &[&str] = &[
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Phone Number",
    "Position",
    "Is Active",
    "Registration Date",
];

/// Header row for trucker exports
const TRUCKER_HEADER: &[&str] = &[
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Phone Number",
    "Driver License",
    "Province",
    "Truck ID",
    "Company",
    "Is Active",
    "Registration Date",
];

/// Quote a field if it contains a delimiter, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn write_row<W: Write>(writer: &mut W, fields: &[String]) -> Result<()> {
    let quoted: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
    writeln!(writer, "{}", quoted.join(",")).context("Failed to write CSV row")
}

fn write_header<W: Write>(writer: &mut W, header: &[&str]) -> Result<()> {
    let fields: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    write_row(writer, &fields)
}

/// Write all employee records as CSV
pub fn write_employees_csv<W: Write>(writer: &mut W, employees: &[EmployeeRecord]) -> Result<()> {
    write_header(writer, EMPLOYEE_HEADER)?;

    for employee in employees {
        write_row(
            writer,
            &[
                employee.id.to_string(),
                employee.first_name.clone(),
                employee.last_name.clone(),
                employee.email.clone(),
                employee.phone_number.clone().unwrap_or_default(),
                employee.position.clone().unwrap_or_default(),
                employee.is_active.to_string(),
                format_date(employee.registration_date),
            ],
        )?;
    }

    debug!(rows = employees.len(), "exported employees to CSV");
    Ok(())
}

/// Write all trucker records as CSV
pub fn write_truckers_csv<W: Write>(writer: &mut W, truckers: &[TruckerRecord]) -> Result<()> {
    write_header(writer, TRUCKER_HEADER)?;

    for trucker in truckers {
        write_row(
            writer,
            &[
                trucker.id.to_string(),
                trucker.first_name.clone(),
                trucker.last_name.clone(),
                trucker.email.clone().unwrap_or_default(),
                trucker.phone_number.clone().unwrap_or_default(),
                trucker.driver_license_number.clone(),
                trucker.province_of_issue.clone(),
                trucker.truck_id_number.clone().unwrap_or_default(),
                trucker.company_name.clone().unwrap_or_default(),
                trucker.is_active.to_string(),
                format_date(trucker.registration_date),
            ],
        )?;
    }

    debug!(rows = truckers.len(), "exported truckers to CSV");
    Ok(())
}
