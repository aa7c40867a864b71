//! Tests for the in-memory stores and the snapshot boundary

use rust_decimal_macros::dec;

use core_kernel::ClaimId;
use domain_claims::{ClaimError, ClaimStatus, ClaimStore, NewRecord, RecordKind, RecordStore};
use infra_store::{InMemoryClaimStore, InMemoryRecordStore, Snapshot};
use test_utils::{fixtures, ClaimBuilder, RecordBuilder};

fn new_record(employee_id: &str) -> NewRecord {
    NewRecord {
        employee_id: employee_id.to_string(),
        employee_name: fixtures::EMPLOYEE_NAME.to_string(),
        kind: RecordKind::Consultation,
        description: "Annual health checkup".to_string(),
        treatment_details: None,
        bill_amount: Some(dec!(2500)),
        hospital_name: Some(fixtures::HOSPITAL_NAME.to_string()),
        file_name: None,
    }
}

mod record_store_tests {
    use super::*;

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = InMemoryRecordStore::new();
        let first = store.create(new_record("EMP001")).unwrap();
        let second = store.create(new_record("EMP002")).unwrap();

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
    }

    #[test]
    fn test_created_records_get_unique_ids() {
        let store = InMemoryRecordStore::new();
        let ids: Vec<_> = (0..100)
            .map(|_| store.create(new_record("EMP001")).unwrap().id)
            .collect();
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_get_finds_by_id() {
        let store = InMemoryRecordStore::new();
        let record = store.create(new_record("EMP001")).unwrap();

        assert_eq!(store.get(record.id).unwrap().id, record.id);
        assert!(store.get(fixtures::record_id(999)).is_none());
    }

    #[test]
    fn test_ids_created_after_snapshot_load_do_not_collide() {
        let seeded = RecordBuilder::new()
            .with_id(fixtures::record_id(0))
            .build();
        let store = InMemoryRecordStore::from_records(vec![seeded]);

        let fresh = store.create(new_record("EMP001")).unwrap();
        assert!(fresh.id > fixtures::record_id(0));
    }
}

mod claim_store_tests {
    use super::*;

    #[test]
    fn test_find_by_record_returns_first_match() {
        let store = InMemoryClaimStore::new();
        let rejected = ClaimBuilder::new()
            .with_id(fixtures::claim_id(1))
            .against(fixtures::record_id(1))
            .with_status(ClaimStatus::Rejected)
            .build();
        let submitted = ClaimBuilder::new()
            .with_id(fixtures::claim_id(2))
            .against(fixtures::record_id(1))
            .build();
        store.insert(rejected).unwrap();
        store.insert(submitted).unwrap();

        // First match regardless of status
        let found = store.find_by_record(fixtures::record_id(1)).unwrap();
        assert_eq!(found.id, fixtures::claim_id(1));

        // Blocking lookup skips the rejected claim
        let blocking = store
            .find_blocking_by_record(fixtures::record_id(1))
            .unwrap();
        assert_eq!(blocking.id, fixtures::claim_id(2));
    }

    #[test]
    fn test_blocking_lookup_ignores_rejected_only_records() {
        let store = InMemoryClaimStore::new();
        store
            .insert(
                ClaimBuilder::new()
                    .with_status(ClaimStatus::Rejected)
                    .build(),
            )
            .unwrap();

        assert!(store
            .find_blocking_by_record(fixtures::record_id(0))
            .is_none());
    }

    #[test]
    fn test_update_status_stamps_updated_at() {
        let store = InMemoryClaimStore::new();
        let claim = ClaimBuilder::new().build();
        store.insert(claim.clone()).unwrap();

        let updated = store
            .update_status(claim.id, ClaimStatus::Approved)
            .unwrap();
        assert_eq!(updated.status, ClaimStatus::Approved);
        assert!(updated.updated_at.is_some());
        assert_eq!(store.get(claim.id).unwrap().status, ClaimStatus::Approved);
    }

    #[test]
    fn test_update_status_unknown_id_fails() {
        let store = InMemoryClaimStore::new();
        assert!(matches!(
            store.update_status(ClaimId::from_millis(9999), ClaimStatus::Approved),
            Err(ClaimError::ClaimNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_claim_id_is_rejected() {
        let store = InMemoryClaimStore::new();
        let claim = ClaimBuilder::new().build();
        store.insert(claim.clone()).unwrap();
        assert!(store.insert(claim).is_err());
    }
}

mod snapshot_tests {
    use super::*;

    #[test]
    fn test_snapshot_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let snapshot = Snapshot::demo();
        snapshot.save(&path).unwrap();

        let loaded = Snapshot::load(&path).unwrap().unwrap();
        assert_eq!(loaded.records.len(), snapshot.records.len());
        assert_eq!(loaded.claims.len(), snapshot.claims.len());
        assert_eq!(loaded.records[0].id, snapshot.records[0].id);
        assert_eq!(loaded.claims[0].status, ClaimStatus::Approved);
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(Snapshot::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Snapshot::load(&path).is_err());
    }

    #[test]
    fn test_capture_reflects_store_mutations() {
        let (records, claims) = Snapshot::demo().into_stores();
        records.create(new_record("EMP002")).unwrap();

        let captured = Snapshot::capture(&records, &claims);
        assert_eq!(captured.records.len(), 3);
        assert_eq!(captured.claims.len(), 2);
    }

    #[test]
    fn test_demo_snapshot_uses_camel_case_wire_names() {
        let json = serde_json::to_value(Snapshot::demo()).unwrap();
        let record = &json["records"][0];
        assert_eq!(record["employeeId"], "EMP001");
        assert_eq!(record["type"], "consultation");
        assert_eq!(record["hospitalName"], "City Hospital");

        let claim = &json["claims"][1];
        assert_eq!(claim["status"], "submitted");
        assert_eq!(claim["recordType"], "lab-report");
        assert!(claim.get("updatedAt").is_none());
    }
}
