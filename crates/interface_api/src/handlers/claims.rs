//! Claim handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use crate::auth::{AuthClaims, Role};
use crate::dto::claims::{CreateClaimRequest, UpdateStatusRequest};
use crate::error::ApiError;
use crate::handlers::require_role;
use crate::AppState;
use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimSummary, SubmitClaim};

/// Lists all claims
pub async fn list_claims(
    State(state): State<AppState>,
    Extension(_caller): Extension<AuthClaims>,
) -> Json<Vec<Claim>> {
    Json(state.service.list_claims())
}

/// Files a new claim
pub async fn create_claim(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthClaims>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<Claim>), ApiError> {
    require_role(&caller, Role::Employee)?;
    request.validate()?;

    let record_id = request.record_id.resolve()?;
    let claim = state.service.submit_claim(SubmitClaim {
        record_id,
        employee_id: request.employee_id,
        employee_name: request.employee_name,
        amount: request.amount,
        description: request.description,
        bill_file_name: request.bill_file_name,
    })?;
    state.persist();

    Ok((StatusCode::CREATED, Json(claim)))
}

/// Applies a corporate review decision
pub async fn update_status(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthClaims>,
    Path(id): Path<ClaimId>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Claim>, ApiError> {
    require_role(&caller, Role::Corporate)?;

    let claim = state.service.transition_claim(id, request.status)?;
    state.persist();

    Ok(Json(claim))
}

/// Aggregate counts and sums for the corporate dashboard
pub async fn summary(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthClaims>,
) -> Result<Json<ClaimSummary>, ApiError> {
    require_role(&caller, Role::Corporate)?;
    Ok(Json(state.service.summary()))
}
