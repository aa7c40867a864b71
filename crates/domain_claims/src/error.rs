//! Claims domain errors

use thiserror::Error;

use crate::claim::ClaimStatus;
use core_kernel::{ClaimId, RecordId};

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// A blocking claim already references the record
    #[error("a {existing_status} claim already exists for this medical record")]
    DuplicateClaim { existing_status: ClaimStatus },

    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: ClaimStatus, to: ClaimStatus },

    #[error("Record is not claimable: {0}")]
    NotClaimable(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
