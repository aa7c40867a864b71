//! Authentication DTOs

use serde::{Deserialize, Serialize};

use crate::auth::{DemoUser, Role};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user; never carries the password
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u32,
    pub email: String,
    pub role: Role,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl From<&DemoUser> for UserResponse {
    fn from(user: &DemoUser) -> Self {
        Self {
            id: user.id,
            email: user.email.to_string(),
            role: user.role,
            name: user.name.to_string(),
            employee_id: user.employee_id.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserResponse,
}
