//! In-memory indexed stores
//!
//! Entities live in insertion order in a `Vec`, with a `HashMap` index
//! from id to position for constant-time lookup. Both stores are safe to
//! share behind an `Arc`; interior locking keeps individual operations
//! consistent, while the cross-operation critical section (duplicate check
//! followed by insert) belongs to `domain_claims::ClaimService`.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use core_kernel::{ClaimId, IdGenerator, RecordId};
use domain_claims::{Claim, ClaimError, ClaimStatus, ClaimStore, NewRecord, Record, RecordStore};

#[derive(Default)]
struct RecordsInner {
    records: Vec<Record>,
    by_id: HashMap<RecordId, usize>,
}

/// Append-only store for treatment records
#[derive(Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<RecordsInner>,
    ids: IdGenerator,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from snapshot contents
    ///
    /// The id generator is advanced past the largest loaded id so freshly
    /// created records cannot collide with snapshot data.
    pub fn from_records(records: Vec<Record>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.write();
            for record in records {
                if inner.by_id.contains_key(&record.id) {
                    tracing::warn!(record_id = %record.id, "duplicate record id in snapshot, keeping first");
                    continue;
                }
                store.ids.advance_past(record.id.as_millis());
                let pos = inner.records.len();
                inner.by_id.insert(record.id, pos);
                inner.records.push(record);
            }
        }
        store
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, RecordsInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, RecordsInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list(&self) -> Vec<Record> {
        self.read().records.clone()
    }

    fn get(&self, id: RecordId) -> Option<Record> {
        let inner = self.read();
        inner.by_id.get(&id).map(|&pos| inner.records[pos].clone())
    }

    fn create(&self, input: NewRecord) -> Result<Record, ClaimError> {
        let record = input.into_record(self.ids.next_record_id(), Utc::now());
        let mut inner = self.write();
        let pos = inner.records.len();
        inner.by_id.insert(record.id, pos);
        inner.records.push(record.clone());
        Ok(record)
    }
}

#[derive(Default)]
struct ClaimsInner {
    claims: Vec<Claim>,
    by_id: HashMap<ClaimId, usize>,
}

/// Store for claims
#[derive(Default)]
pub struct InMemoryClaimStore {
    inner: RwLock<ClaimsInner>,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from snapshot contents
    pub fn from_claims(claims: Vec<Claim>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.write();
            for claim in claims {
                if inner.by_id.contains_key(&claim.id) {
                    tracing::warn!(claim_id = %claim.id, "duplicate claim id in snapshot, keeping first");
                    continue;
                }
                let pos = inner.claims.len();
                inner.by_id.insert(claim.id, pos);
                inner.claims.push(claim);
            }
        }
        store
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, ClaimsInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, ClaimsInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ClaimStore for InMemoryClaimStore {
    fn list(&self) -> Vec<Claim> {
        self.read().claims.clone()
    }

    fn get(&self, id: ClaimId) -> Option<Claim> {
        let inner = self.read();
        inner.by_id.get(&id).map(|&pos| inner.claims[pos].clone())
    }

    fn find_by_record(&self, record_id: RecordId) -> Option<Claim> {
        self.read()
            .claims
            .iter()
            .find(|claim| claim.record_id == record_id)
            .cloned()
    }

    fn find_blocking_by_record(&self, record_id: RecordId) -> Option<Claim> {
        self.read()
            .claims
            .iter()
            .find(|claim| claim.record_id == record_id && claim.status.is_blocking())
            .cloned()
    }

    fn insert(&self, claim: Claim) -> Result<(), ClaimError> {
        let mut inner = self.write();
        if inner.by_id.contains_key(&claim.id) {
            return Err(ClaimError::Validation(format!(
                "claim id {} already exists",
                claim.id
            )));
        }
        let pos = inner.claims.len();
        inner.by_id.insert(claim.id, pos);
        inner.claims.push(claim);
        Ok(())
    }

    fn update_status(&self, id: ClaimId, status: ClaimStatus) -> Result<Claim, ClaimError> {
        let mut inner = self.write();
        let pos = *inner.by_id.get(&id).ok_or(ClaimError::ClaimNotFound(id))?;
        let claim = &mut inner.claims[pos];
        claim.status = status;
        claim.updated_at = Some(Utc::now());
        Ok(claim.clone())
    }
}
