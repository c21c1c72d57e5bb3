//! Portal login endpoint.
//!
//! Credentials come from configuration and are compared in constant time
//! to mitigate timing attacks. There is no session or token model: the
//! portal client keeps its own logged-in state after a successful check.

use axum::{extract::State, Json};
use serde::Deserialize;
use subtle::ConstantTimeEq;

use crate::api::{error, success, ApiResult};
use crate::errors::AppError;
use crate::AppState;

/// Request body for the portal login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/login - Verify portal credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<()> {
    let Some(expected_password) = state.config.admin_password.as_deref() else {
        return error(AppError::Unauthorized(
            "Portal login is not configured".to_string(),
        ));
    };

    // Evaluate both comparisons before combining them
    let username_ok = constant_time_compare(&request.username, &state.config.admin_username);
    let password_ok = constant_time_compare(&request.password, expected_password);

    if username_ok && password_ok {
        success(())
    } else {
        error(AppError::Unauthorized("Invalid credentials".to_string()))
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}
