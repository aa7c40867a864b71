//! Medical treatment records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ClaimError;
use core_kernel::RecordId;

/// Kind of treatment a record documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Consultation,
    LabReport,
    Prescription,
    Surgery,
    Vaccination,
    Other,
}

/// A treatment record, the thing a claim is filed against
///
/// Records are created once by a hospital or by the employee themselves
/// and are never mutated or deleted. The serde names are the wire and
/// snapshot field names, so this type serializes straight into both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier, assigned at creation time
    pub id: RecordId,
    /// Employee/patient the record pertains to
    pub employee_id: String,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_details: Option<String>,
    /// Amount billed by the hospital; absent for self-uploaded records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_amount: Option<Decimal>,
    /// Hospital of origin; `None` means the employee uploaded it themselves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_name: Option<String>,
    /// Attachment name only, no binary storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// True when the record came from a hospital rather than a self-upload
    pub fn is_hospital_sourced(&self) -> bool {
        matches!(&self.hospital_name, Some(name) if !name.trim().is_empty())
    }

    /// True when a hospital billed a strictly positive amount
    pub fn has_positive_bill(&self) -> bool {
        matches!(self.bill_amount, Some(amount) if amount > Decimal::ZERO)
    }
}

/// Input for creating a record; the store assigns id and creation time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub employee_id: String,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub description: String,
    pub treatment_details: Option<String>,
    pub bill_amount: Option<Decimal>,
    pub hospital_name: Option<String>,
    pub file_name: Option<String>,
}

impl NewRecord {
    /// Re-validates what the presentation layer should already have checked
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.employee_id.trim().is_empty() {
            return Err(ClaimError::Validation(
                "employeeId must not be empty".to_string(),
            ));
        }
        if self.employee_name.trim().is_empty() {
            return Err(ClaimError::Validation(
                "employeeName must not be empty".to_string(),
            ));
        }
        if let Some(amount) = self.bill_amount {
            if amount < Decimal::ZERO {
                return Err(ClaimError::Validation(
                    "billAmount must not be negative".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Finalizes the input into a stored record
    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> Record {
        Record {
            id,
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            kind: self.kind,
            description: self.description,
            treatment_details: self.treatment_details,
            bill_amount: self.bill_amount,
            hospital_name: self.hospital_name,
            file_name: self.file_name,
            created_at,
        }
    }
}
