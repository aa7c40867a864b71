//! Lifecycle manager tests over the real in-memory stores

use std::sync::Arc;

use rust_decimal_macros::dec;

use domain_claims::{ClaimError, ClaimService, ClaimStatus, NewRecord, RecordKind, SubmitClaim};
use infra_store::{InMemoryClaimStore, InMemoryRecordStore, Snapshot};
use test_utils::fixtures;

fn demo_service() -> ClaimService {
    let (records, claims) = Snapshot::demo().into_stores();
    ClaimService::new(Arc::new(records), Arc::new(claims))
}

fn fresh_service() -> ClaimService {
    ClaimService::new(
        Arc::new(InMemoryRecordStore::new()),
        Arc::new(InMemoryClaimStore::new()),
    )
}

fn hospital_record() -> NewRecord {
    NewRecord {
        employee_id: fixtures::EMPLOYEE_ID.to_string(),
        employee_name: fixtures::EMPLOYEE_NAME.to_string(),
        kind: RecordKind::Surgery,
        description: "Appendectomy".to_string(),
        treatment_details: None,
        bill_amount: Some(dec!(12000)),
        hospital_name: Some(fixtures::HOSPITAL_NAME.to_string()),
        file_name: None,
    }
}

fn submit(record_id: core_kernel::RecordId) -> SubmitClaim {
    SubmitClaim {
        record_id,
        employee_id: fixtures::EMPLOYEE_ID.to_string(),
        employee_name: fixtures::EMPLOYEE_NAME.to_string(),
        amount: None,
        description: "Surgery reimbursement".to_string(),
        bill_file_name: None,
    }
}

#[test]
fn test_demo_records_with_blocking_claims_are_not_claimable() {
    let service = demo_service();

    // Record one has an approved claim, record two a submitted one
    assert!(service.claimable_records(fixtures::EMPLOYEE_ID).is_empty());
}

#[test]
fn test_submitting_against_demo_approved_record_is_duplicate() {
    let service = demo_service();
    let err = service
        .submit_claim(submit(fixtures::record_id(0)))
        .unwrap_err();
    assert!(matches!(
        err,
        ClaimError::DuplicateClaim {
            existing_status: ClaimStatus::Approved
        }
    ));
}

#[test]
fn test_full_lifecycle_against_real_stores() {
    let service = demo_service();
    let record = service.add_record(hospital_record()).unwrap();

    assert_eq!(service.claimable_records(fixtures::EMPLOYEE_ID).len(), 1);

    let claim = service.submit_claim(submit(record.id)).unwrap();
    assert_eq!(claim.amount, dec!(12000));

    let approved = service
        .transition_claim(claim.id, ClaimStatus::Approved)
        .unwrap();
    assert_eq!(approved.status, ClaimStatus::Approved);

    let summary = service.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.approved, 2);
    assert_eq!(summary.submitted, 1);
    assert_eq!(summary.approved_amount, dec!(14500));
}

#[test]
fn test_concurrent_submissions_one_winner_over_real_stores() {
    let service = Arc::new(fresh_service());
    let record = service.add_record(hospital_record()).unwrap();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let service = Arc::clone(&service);
            let record_id = record.id;
            std::thread::spawn(move || service.submit_claim(submit(record_id)).is_ok())
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(winners, 1);

    let blocking = service
        .list_claims()
        .iter()
        .filter(|c| c.record_id == record.id && c.status.is_blocking())
        .count();
    assert_eq!(blocking, 1);
}

#[test]
fn test_reject_then_resubmit_then_approve() {
    let service = fresh_service();
    let record = service.add_record(hospital_record()).unwrap();

    let first = service.submit_claim(submit(record.id)).unwrap();
    service
        .transition_claim(first.id, ClaimStatus::Rejected)
        .unwrap();

    let second = service.submit_claim(submit(record.id)).unwrap();
    service
        .transition_claim(second.id, ClaimStatus::Approved)
        .unwrap();

    let summary = service.summary();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.approved, 1);
}
