//! Eligibility resolver
//!
//! The single definition of "claimable". Both callers go through
//! [`is_claimable`]: the selection list the employee picks a record from,
//! and the final guard inside claim submission.

use crate::claim::Claim;
use crate::record::Record;
use core_kernel::RecordId;

/// Returns the first claim that blocks new claims against this record,
/// meaning one whose status is `submitted` or `approved`. Rejected claims
/// never block resubmission.
pub fn find_blocking_claim(record_id: RecordId, claims: &[Claim]) -> Option<&Claim> {
    claims
        .iter()
        .find(|claim| claim.record_id == record_id && claim.status.is_blocking())
}

/// A record can accept a new claim iff it was uploaded by a hospital,
/// carries a strictly positive bill amount, and no blocking claim
/// references it.
pub fn is_claimable(record: &Record, claims: &[Claim]) -> bool {
    record.is_hospital_sourced()
        && record.has_positive_bill()
        && find_blocking_claim(record.id, claims).is_none()
}

/// Filters the records an employee may currently claim against
pub fn claimable_records(records: &[Record], claims: &[Claim]) -> Vec<Record> {
    records
        .iter()
        .filter(|record| is_claimable(record, claims))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimStatus;
    use crate::record::RecordKind;
    use chrono::Utc;
    use core_kernel::ClaimId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn record(id: i64, hospital: Option<&str>, bill: Option<Decimal>) -> Record {
        Record {
            id: RecordId::from_millis(id),
            employee_id: "EMP001".to_string(),
            employee_name: "John Doe".to_string(),
            kind: RecordKind::Consultation,
            description: "Annual health checkup".to_string(),
            treatment_details: None,
            bill_amount: bill,
            hospital_name: hospital.map(str::to_string),
            file_name: None,
            created_at: Utc::now(),
        }
    }

    fn claim(record_id: i64, status: ClaimStatus) -> Claim {
        Claim {
            id: ClaimId::from_millis(record_id + 1),
            employee_id: "EMP001".to_string(),
            employee_name: "John Doe".to_string(),
            record_id: RecordId::from_millis(record_id),
            amount: dec!(2500),
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

    #[test]
    fn test_self_uploaded_record_is_not_claimable() {
        let record = record(1, None, Some(dec!(2500)));
        assert!(!is_claimable(&record, &[]));
    }

    #[test]
    fn test_record_without_positive_bill_is_not_claimable() {
        assert!(!is_claimable(&record(1, Some("City Hospital"), None), &[]));
        assert!(!is_claimable(
            &record(1, Some("City Hospital"), Some(dec!(0))),
            &[]
        ));
    }

    #[test]
    fn test_hospital_record_with_bill_is_claimable() {
        let record = record(1, Some("City Hospital"), Some(dec!(2500)));
        assert!(is_claimable(&record, &[]));
    }

    #[test]
    fn test_blocking_claim_prevents_eligibility() {
        let record = record(1, Some("City Hospital"), Some(dec!(2500)));
        for status in [ClaimStatus::Submitted, ClaimStatus::Approved] {
            assert!(!is_claimable(&record, &[claim(1, status)]));
        }
    }

    #[test]
    fn test_rejected_claim_allows_resubmission() {
        let record = record(1, Some("City Hospital"), Some(dec!(2500)));
        assert!(is_claimable(&record, &[claim(1, ClaimStatus::Rejected)]));
    }

    #[test]
    fn test_claim_against_other_record_does_not_block() {
        let record = record(1, Some("City Hospital"), Some(dec!(2500)));
        assert!(is_claimable(&record, &[claim(2, ClaimStatus::Submitted)]));
    }

    #[test]
    fn test_claimable_records_applies_the_same_predicate() {
        let records = vec![
            record(1, Some("City Hospital"), Some(dec!(2500))),
            record(2, None, None),
            record(3, Some("City Hospital"), Some(dec!(1800))),
        ];
        let claims = vec![claim(3, ClaimStatus::Submitted)];

        let claimable = claimable_records(&records, &claims);
        assert_eq!(claimable.len(), 1);
        assert_eq!(claimable[0].id, RecordId::from_millis(1));
    }
}
