//! Settings API endpoints for the admin portal.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Settings, UpdateSettingsRequest};
use crate::AppState;

/// GET /api/settings - Get the settings singleton.
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Settings> {
    match state.repo.get_settings().await {
        Ok(Some(settings)) => success(settings),
        Ok(None) => error(AppError::NotFound("Settings not found".to_string())),
        Err(e) => error(e),
    }
}

/// PUT /api/settings - Update the settings singleton.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> ApiResult<Settings> {
    if request.hospital_name.trim().is_empty() {
        return error(AppError::Validation(
            "Hospital name is required".to_string(),
        ));
    }

    match state.repo.update_settings(&request).await {
        Ok(settings) => success(settings),
        Err(e) => error(e),
    }
}
