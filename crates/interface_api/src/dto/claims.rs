//! Claim DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;
use core_kernel::RecordId;
use domain_claims::ClaimStatus;

/// A record id as it arrives off the wire
///
/// Historical clients sent both JSON numbers and strings; the typed id is
/// resolved here, at the boundary, so nothing downstream ever compares
/// loosely-typed values.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRecordId {
    Number(i64),
    Text(String),
}

impl RawRecordId {
    pub fn resolve(&self) -> Result<RecordId, ApiError> {
        match self {
            RawRecordId::Number(millis) => Ok(RecordId::from_millis(*millis)),
            RawRecordId::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(ApiError::Validation("no record selected".to_string()));
                }
                trimmed
                    .parse::<RecordId>()
                    .map_err(|_| ApiError::BadRequest(format!("invalid record id: {text}")))
            }
        }
    }
}

/// Body of `POST /api/claims`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    pub record_id: RawRecordId,
    #[validate(length(min = 1, message = "employeeId is required"))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "employeeName is required"))]
    pub employee_name: String,
    #[serde(default, deserialize_with = "super::flexible_amount")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub description: String,
    pub bill_file_name: Option<String>,
}

/// Body of `PUT /api/claims/{id}`
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ClaimStatus,
}
