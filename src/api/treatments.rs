//! Treatment API endpoints for the admin portal.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateTreatmentRequest, Treatment};
use crate::AppState;

/// GET /api/treatments - List all treatments.
pub async fn list_treatments(State(state): State<AppState>) -> ApiResult<Vec<Treatment>> {
    match state.repo.list_treatments().await {
        Ok(treatments) => success(treatments),
        Err(e) => error(e),
    }
}

/// POST /api/treatments - Create a new treatment.
pub async fn create_treatment(
    State(state): State<AppState>,
    Json(request): Json<CreateTreatmentRequest>,
) -> ApiResult<Treatment> {
    if request.name.trim().is_empty() {
        return error(AppError::Validation("Name is required".to_string()));
    }

    match state.repo.create_treatment(&request).await {
        Ok(treatment) => success(treatment),
        Err(e) => error(e),
    }
}

/// DELETE /api/treatments/:id - Delete a treatment.
pub async fn delete_treatment(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    match state.repo.delete_treatment(id).await {
        Ok(()) => success(()),
        Err(e) => error(e),
    }
}
