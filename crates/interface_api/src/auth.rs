//! Demo authentication
//!
//! The workflow ships with three fixed demo accounts, one per role.
//! Credentials are plaintext by design; what matters downstream is the
//! signed session token carrying the caller's role and subject identity,
//! which the handlers trust for role gating.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Actor roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Hospital,
    Corporate,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Employee => "employee",
            Role::Hospital => "hospital",
            Role::Corporate => "corporate",
        };
        write!(f, "{name}")
    }
}

/// A demo account
#[derive(Debug, Clone)]
pub struct DemoUser {
    pub id: u32,
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub name: &'static str,
    pub employee_id: Option<&'static str>,
}

/// The fixed demo directory
pub static DEMO_USERS: Lazy<Vec<DemoUser>> = Lazy::new(|| {
    vec![
        DemoUser {
            id: 1,
            email: "corporate@company.com",
            password: "demo123",
            role: Role::Corporate,
            name: "TechCorp HR",
            employee_id: None,
        },
        DemoUser {
            id: 2,
            email: "employee@company.com",
            password: "demo123",
            role: Role::Employee,
            name: "John Doe",
            employee_id: Some("EMP001"),
        },
        DemoUser {
            id: 3,
            email: "hospital@medical.com",
            password: "demo123",
            role: Role::Hospital,
            name: "City Hospital",
            employee_id: None,
        },
    ]
});

/// Looks up a demo account by credentials
pub fn authenticate(email: &str, password: &str) -> Option<&'static DemoUser> {
    DEMO_USERS
        .iter()
        .find(|user| user.email == email && user.password == password)
}

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Subject (user email)
    pub sub: String,
    /// Actor role
    pub role: Role,
    /// Display name; hospitals stamp this onto uploaded records
    pub name: String,
    /// Employee id, present for employee accounts
    pub employee_id: Option<String>,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
}

/// Creates a session token for an authenticated demo user
pub fn create_token(
    user: &DemoUser,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = AuthClaims {
        sub: user.email.to_string(),
        role: user.role,
        name: user.name.to_string(),
        employee_id: user.employee_id.map(str::to_string),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a session token
pub fn validate_token(token: &str, secret: &str) -> Result<AuthClaims, AuthError> {
    let token_data = decode::<AuthClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        if matches!(
            e.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ) {
            AuthError::TokenExpired
        } else {
            AuthError::InvalidToken
        }
    })?;

    Ok(token_data.claims)
}
