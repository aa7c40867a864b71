//! Test data builders

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use core_kernel::{ClaimId, RecordId};
use domain_claims::{Claim, ClaimStatus, Record, RecordKind};

use crate::fixtures;

/// Builder for treatment records; defaults to a claimable City Hospital
/// consultation for EMP001
pub struct RecordBuilder {
    id: RecordId,
    employee_id: String,
    employee_name: String,
    kind: RecordKind,
    description: String,
    treatment_details: Option<String>,
    bill_amount: Option<Decimal>,
    hospital_name: Option<String>,
    file_name: Option<String>,
    created_at: DateTime<Utc>,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            id: fixtures::record_id(0),
            employee_id: fixtures::EMPLOYEE_ID.to_string(),
            employee_name: fixtures::EMPLOYEE_NAME.to_string(),
            kind: RecordKind::Consultation,
            description: "Annual health checkup".to_string(),
            treatment_details: None,
            bill_amount: Some(Decimal::from(2500)),
            hospital_name: Some(fixtures::HOSPITAL_NAME.to_string()),
            file_name: None,
            created_at: fixtures::days_ago(7),
        }
    }

    pub fn with_id(mut self, id: RecordId) -> Self {
        self.id = id;
        self
    }

    pub fn with_employee(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.employee_id = id.into();
        self.employee_name = name.into();
        self
    }

    pub fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_bill_amount(mut self, amount: Option<Decimal>) -> Self {
        self.bill_amount = amount;
        self
    }

    /// Marks the record as uploaded by the employee rather than a hospital
    pub fn self_uploaded(mut self) -> Self {
        self.hospital_name = None;
        self.bill_amount = None;
        self
    }

    pub fn with_hospital(mut self, name: impl Into<String>) -> Self {
        self.hospital_name = Some(name.into());
        self
    }

    pub fn build(self) -> Record {
        Record {
            id: self.id,
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            kind: self.kind,
            description: self.description,
            treatment_details: self.treatment_details,
            bill_amount: self.bill_amount,
            hospital_name: self.hospital_name,
            file_name: self.file_name,
            created_at: self.created_at,
        }
    }
}

/// Builder for claims; defaults to a freshly submitted claim against the
/// default record
pub struct ClaimBuilder {
    id: ClaimId,
    employee_id: String,
    employee_name: String,
    record_id: RecordId,
    amount: Decimal,
    description: String,
    status: ClaimStatus,
    submitted_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            id: fixtures::claim_id(0),
            employee_id: fixtures::EMPLOYEE_ID.to_string(),
            employee_name: fixtures::EMPLOYEE_NAME.to_string(),
            record_id: fixtures::record_id(0),
            amount: Decimal::from(2500),
            description: "Reimbursement for annual health checkup".to_string(),
            status: ClaimStatus::Submitted,
            submitted_at: fixtures::days_ago(3),
            updated_at: None,
        }
    }

    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = id;
        self
    }

    pub fn against(mut self, record_id: RecordId) -> Self {
        self.record_id = record_id;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        if status.is_terminal() {
            self.updated_at = Some(fixtures::days_ago(1));
        }
        self
    }

    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            record_id: self.record_id,
            amount: self.amount,
            description: self.description,
            record_kind: None,
            hospital_name: None,
            treatment_details: None,
            bill_file_name: None,
            status: self.status,
            submitted_at: self.submitted_at,
            updated_at: self.updated_at,
        }
    }
}
