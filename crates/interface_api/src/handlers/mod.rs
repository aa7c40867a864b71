//! Request handlers

pub mod claims;
pub mod health;
pub mod login;
pub mod records;

use crate::auth::{AuthClaims, Role};
use crate::error::ApiError;

/// Rejects callers whose role does not match
///
/// Role enforcement is a presentation-layer concern; the core trusts the
/// identity it is handed.
pub(crate) fn require_role(claims: &AuthClaims, role: Role) -> Result<(), ApiError> {
    if claims.role == role {
        Ok(())
    } else {
        Err(ApiError::Forbidden(format!(
            "this operation requires the {role} role"
        )))
    }
}
