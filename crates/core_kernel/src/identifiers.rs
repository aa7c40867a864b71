//! Strongly-typed identifiers for domain entities
//!
//! Records and claims are keyed by millisecond creation timestamps.
//! Newtype wrappers around the raw integer provide type safety and prevent
//! accidental mixing of different identifier types, and keep the equality
//! rule in one place instead of coercing strings to numbers at every
//! comparison site.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a raw millisecond timestamp
            pub fn from_millis(millis: i64) -> Self {
                Self(millis)
            }

            /// Returns the underlying millisecond value
            pub fn as_millis(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(raw.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(millis: i64) -> Self {
                Self(millis)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(RecordId, "REC");
define_id!(ClaimId, "CLM");

/// Mints creation-time identifiers that stay unique under rapid succession.
///
/// Each id is the current wall-clock millisecond, except that the generator
/// never hands out the same value twice: when two calls land inside one
/// millisecond the second advances past the first. Values are therefore
/// strictly increasing per generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Creates a new generator
    pub fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Returns the next unique millisecond value
    pub fn next_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            }) {
            Ok(prev) => now.max(prev + 1),
            // The closure never returns None
            Err(prev) => prev,
        }
    }

    /// Advances the generator past a previously assigned value, so ids
    /// loaded from a snapshot can never be handed out again
    pub fn advance_past(&self, millis: i64) {
        self.last.fetch_max(millis, Ordering::SeqCst);
    }

    /// Mints a fresh record identifier
    pub fn next_record_id(&self) -> RecordId {
        RecordId::from_millis(self.next_millis())
    }

    /// Mints a fresh claim identifier
    pub fn next_claim_id(&self) -> ClaimId {
        ClaimId::from_millis(self.next_millis())
    }
}
