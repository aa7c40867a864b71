//! Record DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use domain_claims::{NewRecord, RecordKind};

/// Body of `POST /api/records`
///
/// The hospital name is not taken from the body: it is stamped from the
/// authenticated caller's identity, so a hospital can only upload records
/// under its own name and employee self-uploads carry none.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    #[validate(length(min = 1, message = "employeeId is required"))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "employeeName is required"))]
    pub employee_name: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(default)]
    pub description: String,
    pub treatment_details: Option<String>,
    #[serde(default, deserialize_with = "super::flexible_amount")]
    pub bill_amount: Option<Decimal>,
    pub file_name: Option<String>,
}

impl CreateRecordRequest {
    pub fn into_new_record(self, hospital_name: Option<String>) -> NewRecord {
        NewRecord {
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            kind: self.kind,
            description: self.description,
            treatment_details: self.treatment_details,
            bill_amount: self.bill_amount,
            hospital_name,
            file_name: self.file_name,
        }
    }
}
