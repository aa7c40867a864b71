//! Record handlers

use axum::{extract::State, http::StatusCode, Extension, Json};
use validator::Validate;

use crate::auth::{AuthClaims, Role};
use crate::dto::records::CreateRecordRequest;
use crate::error::ApiError;
use crate::handlers::require_role;
use crate::AppState;
use domain_claims::Record;

/// Lists all records
pub async fn list_records(
    State(state): State<AppState>,
    Extension(_caller): Extension<AuthClaims>,
) -> Json<Vec<Record>> {
    Json(state.service.list_records())
}

/// Lists the records the calling employee may currently claim against
pub async fn claimable_records(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthClaims>,
) -> Result<Json<Vec<Record>>, ApiError> {
    require_role(&caller, Role::Employee)?;
    let employee_id = caller
        .employee_id
        .as_deref()
        .ok_or_else(|| ApiError::Forbidden("no employee id on this account".to_string()))?;
    Ok(Json(state.service.claimable_records(employee_id)))
}

/// Creates a treatment record
///
/// Hospitals upload billed treatment records under their own name;
/// employees may add personal records, which are never claimable.
pub async fn create_record(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthClaims>,
    Json(request): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    request.validate()?;

    let hospital_name = match caller.role {
        Role::Hospital => Some(caller.name.clone()),
        Role::Employee => None,
        Role::Corporate => {
            return Err(ApiError::Forbidden(
                "corporate accounts cannot upload records".to_string(),
            ))
        }
    };

    let record = state
        .service
        .add_record(request.into_new_record(hospital_name))?;
    state.persist();

    Ok((StatusCode::CREATED, Json(record)))
}
