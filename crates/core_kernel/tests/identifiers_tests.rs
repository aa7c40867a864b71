//! Tests for typed identifiers and the id generator

use std::collections::HashSet;
use std::sync::Arc;

use core_kernel::{ClaimId, IdGenerator, RecordId};

#[test]
fn test_record_and_claim_ids_are_distinct_types() {
    let record_id = RecordId::from_millis(1704067200000);
    let claim_id = ClaimId::from_millis(1704067200000);

    // Same raw value, different display prefixes
    assert_eq!(record_id.to_string(), "REC-1704067200000");
    assert_eq!(claim_id.to_string(), "CLM-1704067200000");
}

#[test]
fn test_id_round_trips_through_display() {
    let original = RecordId::from_millis(1706745600000);
    let parsed: RecordId = original.to_string().parse().unwrap();
    assert_eq!(original, parsed);
}

#[test]
fn test_invalid_id_fails_to_parse() {
    assert!("not-a-number".parse::<RecordId>().is_err());
    assert!("REC-".parse::<RecordId>().is_err());
}

#[test]
fn test_generator_ids_unique_across_threads() {
    let gen = Arc::new(IdGenerator::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let gen = Arc::clone(&gen);
            std::thread::spawn(move || (0..500).map(|_| gen.next_millis()).collect::<Vec<_>>())
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "generator produced a duplicate id");
        }
    }
    assert_eq!(seen.len(), 8 * 500);
}

#[test]
fn test_generator_tracks_wall_clock() {
    let gen = IdGenerator::new();
    let before = chrono::Utc::now().timestamp_millis();
    let id = gen.next_millis();
    assert!(id >= before);
}
