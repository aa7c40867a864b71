//! Core Kernel - Foundational types for the claims workflow
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure crates:
//! - Strongly-typed entity identifiers
//! - A collision-free generator for creation-time ids

pub mod identifiers;

pub use identifiers::{ClaimId, IdGenerator, RecordId};
