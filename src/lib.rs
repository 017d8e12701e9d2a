//! fleetlens - Operational Analytics Engine
//!
//! Turns materialized record snapshots from an IoT fleet/workforce backend
//! into time-series growth trends, categorical distributions, one-step-ahead
//! forecasts, and compliance/churn ratios for dashboard consumption.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`analytics`] - Aggregation, forecasting, distributions and the report facade
//! - [`models`] - Record types and the snapshot the request layer hands over
//! - [`search`] - Live search across personnel records
//! - [`export`] - CSV export of record sets
//! - [`config`] - Configuration for the hosting surface
//! - [`error`] - Unified error type
//!
//! Data flows one way: record snapshot → aggregation/distribution →
//! forecast/ratios → facade → response payload. Every computation is a pure
//! function of its input, so concurrent dashboard requests need no
//! coordination.
//!
//! # Example
//!
//! ```
//! use fleetlens::analytics::employee_growth;
//! use fleetlens::models::EmployeeRecord;
//!
//! let employees: Vec<EmployeeRecord> = vec![];
//! let report = employee_growth(&employees);
//! assert_eq!(report.forecast.predicted_next, 0.0);
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod search;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{
        business_impact, compliance_summary, employee_growth, trucker_distribution,
        AnalyticsError, BusinessImpactReport, ComplianceSummary, Distribution, Forecast,
        GrowthReport, TimeSeriesPoint, TrendClassification, TruckerDistributionReport,
    };
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::models::{DocumentRecord, EmployeeRecord, Snapshot, TruckerRecord};
    pub use crate::search::{live_search, SearchResult};
}

// Direct re-exports for convenience
pub use models::{DocumentRecord, EmployeeRecord, Snapshot, TruckerRecord};
