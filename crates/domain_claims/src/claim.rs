//! Claim aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ClaimError;
use crate::record::RecordKind;
use core_kernel::{ClaimId, RecordId};

/// Claim status
///
/// `Submitted` and `Approved` are blocking: while a claim in one of these
/// statuses references a record, no new claim may be filed against it.
/// `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Filed by the employee, awaiting corporate review
    Submitted,
    /// Accepted for reimbursement
    Approved,
    /// Declined; the record becomes claimable again
    Rejected,
}

impl ClaimStatus {
    /// A blocking claim prevents new claims against the same record
    pub fn is_blocking(&self) -> bool {
        matches!(self, ClaimStatus::Submitted | ClaimStatus::Approved)
    }

    /// Terminal statuses admit no further transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }

    /// Checks whether the corporate reviewer may move a claim from `self`
    /// to `target`. Only `submitted -> approved` and `submitted -> rejected`
    /// are permitted.
    pub fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!((self, target), (Submitted, Approved) | (Submitted, Rejected))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "submitted",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reimbursement claim referencing exactly one treatment record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Unique identifier, assigned at submission time
    pub id: ClaimId,
    pub employee_id: String,
    pub employee_name: String,
    /// The record this claim is filed against
    pub record_id: RecordId,
    pub amount: Decimal,
    pub description: String,
    // Provenance copied from the source record at submission time
    #[serde(rename = "recordType", skip_serializing_if = "Option::is_none")]
    pub record_kind: Option<RecordKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_file_name: Option<String>,
    pub status: ClaimStatus,
    pub submitted_at: DateTime<Utc>,
    /// Present once the status changed after creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Claim {
    /// Applies a corporate review decision
    pub fn transition(&mut self, target: ClaimStatus) -> Result<(), ClaimError> {
        if !self.status.can_transition_to(target) {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.updated_at = Some(Utc::now());
        Ok(())
    }
}
