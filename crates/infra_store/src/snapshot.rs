//! Snapshot persistence boundary
//!
//! `Snapshot` is the serialized form of both stores. It is loaded once at
//! startup and written back after mutations; the write goes through a temp
//! file followed by a rename, so a crash mid-write never truncates the
//! data set.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::memory::{InMemoryClaimStore, InMemoryRecordStore};
use core_kernel::{ClaimId, RecordId};
use domain_claims::{Claim, ClaimStatus, ClaimStore, Record, RecordKind, RecordStore};

/// Serialized contents of both stores
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub records: Vec<Record>,
    pub claims: Vec<Claim>,
}

impl Snapshot {
    /// Reads a snapshot from disk, returning `None` when the file does not
    /// exist yet
    pub fn load(path: &Path) -> Result<Option<Snapshot>, StoreError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::io(path, err)),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Writes the snapshot atomically (temp file + rename)
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, contents).map_err(|err| StoreError::io(&tmp, err))?;
        fs::rename(&tmp, path).map_err(|err| StoreError::io(path, err))?;
        Ok(())
    }

    /// Captures the current contents of both stores
    pub fn capture(records: &InMemoryRecordStore, claims: &InMemoryClaimStore) -> Snapshot {
        Snapshot {
            records: records.list(),
            claims: claims.list(),
        }
    }

    /// Splits the snapshot into live stores
    pub fn into_stores(self) -> (InMemoryRecordStore, InMemoryClaimStore) {
        (
            InMemoryRecordStore::from_records(self.records),
            InMemoryClaimStore::from_claims(self.claims),
        )
    }

    /// The demo data set seeded on first start: two City Hospital records
    /// for employee EMP001, one already reimbursed and one with a claim
    /// still under review
    pub fn demo() -> Snapshot {
        Snapshot {
            records: vec![
                Record {
                    id: RecordId::from_millis(1704067200000),
                    employee_id: "EMP001".to_string(),
                    employee_name: "John Doe".to_string(),
                    kind: RecordKind::Consultation,
                    description: "Annual health checkup".to_string(),
                    treatment_details: Some(
                        "Routine physical examination, blood pressure check, basic blood tests"
                            .to_string(),
                    ),
                    bill_amount: Some(Decimal::from(2500)),
                    hospital_name: Some("City Hospital".to_string()),
                    file_name: Some("checkup_report.pdf".to_string()),
                    created_at: ts(1704103200000),
                },
                Record {
                    id: RecordId::from_millis(1706745600000),
                    employee_id: "EMP001".to_string(),
                    employee_name: "John Doe".to_string(),
                    kind: RecordKind::LabReport,
                    description: "Blood test results".to_string(),
                    treatment_details: Some(
                        "Complete blood count, lipid profile, blood sugar levels".to_string(),
                    ),
                    bill_amount: Some(Decimal::from(1800)),
                    hospital_name: Some("City Hospital".to_string()),
                    file_name: Some("lab_results.pdf".to_string()),
                    created_at: ts(1706797800000),
                },
            ],
            claims: vec![
                Claim {
                    id: ClaimId::from_millis(1707350400000),
                    employee_id: "EMP001".to_string(),
                    employee_name: "John Doe".to_string(),
                    record_id: RecordId::from_millis(1704067200000),
                    amount: Decimal::from(2500),
                    description: "Reimbursement for annual health checkup".to_string(),
                    record_kind: Some(RecordKind::Consultation),
                    hospital_name: Some("City Hospital".to_string()),
                    treatment_details: Some(
                        "Routine physical examination, blood pressure check, basic blood tests"
                            .to_string(),
                    ),
                    bill_file_name: Some("invoice_001.pdf".to_string()),
                    status: ClaimStatus::Approved,
                    submitted_at: ts(1707382800000),
                    updated_at: Some(ts(1707476400000)),
                },
                Claim {
                    id: ClaimId::from_millis(1708560000000),
                    employee_id: "EMP001".to_string(),
                    employee_name: "John Doe".to_string(),
                    record_id: RecordId::from_millis(1706745600000),
                    amount: Decimal::from(1800),
                    description: "Lab test reimbursement claim".to_string(),
                    record_kind: Some(RecordKind::LabReport),
                    hospital_name: Some("City Hospital".to_string()),
                    treatment_details: Some(
                        "Complete blood count, lipid profile, blood sugar levels".to_string(),
                    ),
                    bill_file_name: Some("lab_invoice.pdf".to_string()),
                    status: ClaimStatus::Submitted,
                    submitted_at: ts(1708597800000),
                    updated_at: None,
                },
            ],
        }
    }
}

fn ts(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}
