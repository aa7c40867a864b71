//! Storage infrastructure
//!
//! In-memory indexed stores implementing the `domain_claims` ports, plus
//! the snapshot boundary that serializes both stores to a single JSON
//! file. The working set lives in memory; the file is a startup seed and a
//! best-effort persistence convenience, so the engine's invariants never
//! depend on file I/O atomicity.

pub mod error;
pub mod memory;
pub mod snapshot;

pub use error::StoreError;
pub use memory::{InMemoryClaimStore, InMemoryRecordStore};
pub use snapshot::Snapshot;
