//! Data-access ports
//!
//! The lifecycle engine reaches storage only through these traits. The
//! in-memory adapters live in `infra_store`; any alternate adapter must
//! preserve insertion order in `list` and typed-id equality in lookups.

use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::record::{NewRecord, Record};
use core_kernel::{ClaimId, RecordId};

/// Storage for treatment records
///
/// Records are append-only: there are no update or delete operations.
pub trait RecordStore: Send + Sync {
    /// All records in insertion order
    fn list(&self) -> Vec<Record>;

    /// Looks up a record by id
    fn get(&self, id: RecordId) -> Option<Record>;

    /// Assigns a fresh unique id and creation timestamp, appends, and
    /// returns the stored record
    fn create(&self, input: NewRecord) -> Result<Record, ClaimError>;
}

/// Storage for claims
pub trait ClaimStore: Send + Sync {
    /// All claims in insertion order
    fn list(&self) -> Vec<Claim>;

    /// Looks up a claim by id
    fn get(&self, id: ClaimId) -> Option<Claim>;

    /// First claim referencing the record, regardless of status
    fn find_by_record(&self, record_id: RecordId) -> Option<Claim>;

    /// First claim referencing the record whose status blocks new claims
    fn find_blocking_by_record(&self, record_id: RecordId) -> Option<Claim>;

    /// Appends a fully-constructed claim
    fn insert(&self, claim: Claim) -> Result<(), ClaimError>;

    /// Sets the status of an existing claim and stamps `updated_at`,
    /// failing with `ClaimNotFound` when the id is unknown
    fn update_status(&self, id: ClaimId, status: ClaimStatus) -> Result<Claim, ClaimError>;
}
