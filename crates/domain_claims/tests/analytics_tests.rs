//! Property tests for the analytics aggregator

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{ClaimId, RecordId};
use domain_claims::{summarize, Claim, ClaimStatus};

fn claim(id: i64, status: ClaimStatus, amount: Decimal) -> Claim {
    Claim {
        id: ClaimId::from_millis(id),
        employee_id: "EMP001".to_string(),
        employee_name: "John Doe".to_string(),
        record_id: RecordId::from_millis(id),
        amount,
        description: String::new(),
        record_kind: None,
        hospital_name: None,
        treatment_details: None,
        bill_file_name: None,
        status,
        submitted_at: Utc::now(),
        updated_at: None,
    }
}

fn status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Submitted),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
    ]
}

fn claims_strategy() -> impl Strategy<Value = Vec<Claim>> {
    prop::collection::vec((status_strategy(), 0u64..1_000_000), 0..50).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (status, cents))| {
                claim(i as i64 + 1, status, Decimal::new(cents as i64, 2))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_status_counts_partition_the_claim_set(claims in claims_strategy()) {
        let summary = summarize(claims.iter());
        prop_assert_eq!(summary.total, claims.len());
        prop_assert_eq!(
            summary.submitted + summary.approved + summary.rejected,
            summary.total
        );
    }

    #[test]
    fn prop_approved_amount_never_exceeds_total(claims in claims_strategy()) {
        let summary = summarize(claims.iter());
        prop_assert!(summary.approved_amount <= summary.total_amount);
    }

    #[test]
    fn prop_summary_is_order_independent(claims in claims_strategy()) {
        let forward = summarize(claims.iter());
        let mut reversed = claims.clone();
        reversed.reverse();
        prop_assert_eq!(forward, summarize(reversed.iter()));
    }

    #[test]
    fn prop_summary_is_idempotent(claims in claims_strategy()) {
        prop_assert_eq!(summarize(claims.iter()), summarize(claims.iter()));
    }
}

#[test]
fn test_empty_claim_set_summarizes_to_zero() {
    let claims: Vec<Claim> = Vec::new();
    let summary = summarize(claims.iter());
    assert_eq!(summary.total, 0);
    assert_eq!(summary.total_amount, Decimal::ZERO);
    assert_eq!(summary.approved_amount, Decimal::ZERO);
}
