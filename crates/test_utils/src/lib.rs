//! Test Utilities
//!
//! Builders and fixtures shared across the workspace's test suites.
//! Builders supply sensible defaults so a test only states the fields it
//! actually cares about.

pub mod builders;
pub mod fixtures;

pub use builders::{ClaimBuilder, RecordBuilder};
