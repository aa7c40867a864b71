//! Common fixture values
//!
//! Drawn from the demo data set: employee EMP001 treated at City Hospital.

use chrono::{DateTime, Duration, Utc};
use core_kernel::{ClaimId, RecordId};

pub const EMPLOYEE_ID: &str = "EMP001";
pub const EMPLOYEE_NAME: &str = "John Doe";
pub const HOSPITAL_NAME: &str = "City Hospital";

/// A record id offset from an arbitrary base so tests stay readable
pub fn record_id(n: i64) -> RecordId {
    RecordId::from_millis(1704067200000 + n)
}

pub fn claim_id(n: i64) -> ClaimId {
    ClaimId::from_millis(1707350400000 + n)
}

/// A timestamp `days` in the past
pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}
