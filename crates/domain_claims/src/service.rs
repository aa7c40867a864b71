//! Claim lifecycle manager
//!
//! `ClaimService` coordinates the stores and the eligibility resolver and
//! owns the one critical section in the system: the duplicate check and
//! the claim insert happen under a single lock, so the "at most one
//! blocking claim per record" invariant holds even when two submissions
//! race for the same record.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::claim::{Claim, ClaimStatus};
use crate::eligibility;
use crate::error::ClaimError;
use crate::ports::{ClaimStore, RecordStore};
use crate::record::{NewRecord, Record};
use crate::{summarize, ClaimSummary};
use core_kernel::{ClaimId, IdGenerator};

/// Input for filing a claim
///
/// The record id arrives already normalized to its typed form; the HTTP
/// layer is responsible for coercing string-or-number wire values before
/// anything reaches the core.
#[derive(Debug, Clone)]
pub struct SubmitClaim {
    pub record_id: core_kernel::RecordId,
    pub employee_id: String,
    pub employee_name: String,
    /// Overrides the record's bill amount; in the normal workflow the
    /// amount is always derived from the record
    pub amount: Option<Decimal>,
    pub description: String,
    /// Name of the uploaded invoice, if any
    pub bill_file_name: Option<String>,
}

/// Creates, transitions, and queries claims while enforcing the
/// duplicate-prevention invariant
pub struct ClaimService {
    records: Arc<dyn RecordStore>,
    claims: Arc<dyn ClaimStore>,
    ids: IdGenerator,
    /// Serializes all claim writes; check-then-create must be atomic
    write_gate: Mutex<()>,
}

impl ClaimService {
    pub fn new(records: Arc<dyn RecordStore>, claims: Arc<dyn ClaimStore>) -> Self {
        Self {
            records,
            claims,
            ids: IdGenerator::new(),
            write_gate: Mutex::new(()),
        }
    }

    /// Stores a new treatment record after defensive validation
    pub fn add_record(&self, input: NewRecord) -> Result<Record, ClaimError> {
        input.validate()?;
        let record = self.records.create(input)?;
        info!(record_id = %record.id, hospital = ?record.hospital_name, "medical record created");
        Ok(record)
    }

    /// All records in insertion order
    pub fn list_records(&self) -> Vec<Record> {
        self.records.list()
    }

    /// All claims in insertion order
    pub fn list_claims(&self) -> Vec<Claim> {
        self.claims.list()
    }

    /// Records a hospital previously uploaded, for its history view
    pub fn record_history(&self, hospital_name: &str) -> Vec<Record> {
        self.records
            .list()
            .into_iter()
            .filter(|record| record.hospital_name.as_deref() == Some(hospital_name))
            .collect()
    }

    /// Records the employee may currently file a claim against
    ///
    /// Uses the same eligibility predicate as the submission guard.
    pub fn claimable_records(&self, employee_id: &str) -> Vec<Record> {
        let claims = self.claims.list();
        let records: Vec<Record> = self
            .records
            .list()
            .into_iter()
            .filter(|record| record.employee_id == employee_id)
            .collect();
        eligibility::claimable_records(&records, &claims)
    }

    /// Files a new claim against a record
    ///
    /// Fails with `DuplicateClaim` when a submitted or approved claim
    /// already references the record, and with `NotClaimable` when the
    /// record exists but was never billed by a hospital. A record id that
    /// resolves to nothing is tolerated only when the caller supplies an
    /// explicit amount; the record lookup is a soft referential check, not
    /// a foreign-key constraint.
    pub fn submit_claim(&self, input: SubmitClaim) -> Result<Claim, ClaimError> {
        if let Some(amount) = input.amount {
            if amount < Decimal::ZERO {
                return Err(ClaimError::Validation(
                    "amount must not be negative".to_string(),
                ));
            }
        }

        let _gate = self.write_gate.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = self.claims.find_blocking_by_record(input.record_id) {
            warn!(
                record_id = %input.record_id,
                existing_claim = %existing.id,
                status = %existing.status,
                "duplicate claim rejected"
            );
            return Err(ClaimError::DuplicateClaim {
                existing_status: existing.status,
            });
        }

        let record = self.records.get(input.record_id);
        if let Some(record) = &record {
            // Same predicate the selection list applies
            if !record.is_hospital_sourced() {
                return Err(ClaimError::NotClaimable(
                    "record was self-uploaded, not billed by a hospital".to_string(),
                ));
            }
            if !record.has_positive_bill() {
                return Err(ClaimError::NotClaimable(
                    "record carries no positive bill amount".to_string(),
                ));
            }
        }

        let amount = match input
            .amount
            .or_else(|| record.as_ref().and_then(|r| r.bill_amount))
        {
            Some(amount) => amount,
            None => return Err(ClaimError::RecordNotFound(input.record_id)),
        };

        let claim = Claim {
            id: self.ids.next_claim_id(),
            employee_id: input.employee_id,
            employee_name: input.employee_name,
            record_id: input.record_id,
            amount,
            description: input.description,
            record_kind: record.as_ref().map(|r| r.kind),
            hospital_name: record.as_ref().and_then(|r| r.hospital_name.clone()),
            treatment_details: record.as_ref().and_then(|r| r.treatment_details.clone()),
            bill_file_name: input
                .bill_file_name
                .or_else(|| record.as_ref().and_then(|r| r.file_name.clone())),
            status: ClaimStatus::Submitted,
            submitted_at: Utc::now(),
            updated_at: None,
        };

        self.claims.insert(claim.clone())?;
        info!(claim_id = %claim.id, record_id = %claim.record_id, amount = %claim.amount, "claim submitted");
        Ok(claim)
    }

    /// Applies a corporate review decision to a claim
    ///
    /// Unknown ids fail with `ClaimNotFound`; claims already in a terminal
    /// status fail with `InvalidStatusTransition`.
    pub fn transition_claim(
        &self,
        id: ClaimId,
        target: ClaimStatus,
    ) -> Result<Claim, ClaimError> {
        let _gate = self.write_gate.lock().unwrap_or_else(PoisonError::into_inner);

        let current = self
            .claims
            .get(id)
            .ok_or(ClaimError::ClaimNotFound(id))?;
        if !current.status.can_transition_to(target) {
            return Err(ClaimError::InvalidStatusTransition {
                from: current.status,
                to: target,
            });
        }

        let updated = self.claims.update_status(id, target)?;
        info!(claim_id = %id, from = %current.status, to = %target, "claim transitioned");
        Ok(updated)
    }

    /// Aggregate counts and sums for the corporate dashboard
    pub fn summary(&self) -> ClaimSummary {
        let claims = self.claims.list();
        summarize(claims.iter())
    }
}
