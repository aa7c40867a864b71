//! Claims Lifecycle Domain
//!
//! This crate implements the reimbursement workflow core: hospitals upload
//! treatment records, employees file claims against them, and a corporate
//! reviewer approves or rejects each claim.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submitted -> Approved
//!           -> Rejected   (record becomes claimable again)
//! ```
//!
//! The one system-wide invariant lives here: at most one claim in a
//! blocking status (`submitted` or `approved`) may reference a record at
//! any time.

pub mod analytics;
pub mod claim;
pub mod eligibility;
pub mod error;
pub mod ports;
pub mod record;
pub mod service;

pub use analytics::{summarize, ClaimSummary};
pub use claim::{Claim, ClaimStatus};
pub use eligibility::{claimable_records, is_claimable};
pub use error::ClaimError;
pub use ports::{ClaimStore, RecordStore};
pub use record::{NewRecord, Record, RecordKind};
pub use service::{ClaimService, SubmitClaim};
