//! Claim analytics
//!
//! Derived counts and sums for the corporate dashboard. Pure fold over the
//! claim set: no side effects, stable across repeated calls, independent
//! of claim order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::claim::{Claim, ClaimStatus};

/// Aggregate view over a set of claims
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSummary {
    pub total: usize,
    pub submitted: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total_amount: Decimal,
    pub approved_amount: Decimal,
}

/// Summarizes claims for reporting
///
/// Every claim falls into exactly one status bucket, so
/// `submitted + approved + rejected == total`.
pub fn summarize<'a, I>(claims: I) -> ClaimSummary
where
    I: IntoIterator<Item = &'a Claim>,
{
    claims
        .into_iter()
        .fold(ClaimSummary::default(), |mut summary, claim| {
            summary.total += 1;
            summary.total_amount += claim.amount;
            match claim.status {
                ClaimStatus::Submitted => summary.submitted += 1,
                ClaimStatus::Approved => {
                    summary.approved += 1;
                    summary.approved_amount += claim.amount;
                }
                ClaimStatus::Rejected => summary.rejected += 1,
            }
            summary
        })
}
