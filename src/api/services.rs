//! Service API endpoints for the admin portal.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateServiceRequest, Service};
use crate::AppState;

/// GET /api/services - List all services.
pub async fn list_services(State(state): State<AppState>) -> ApiResult<Vec<Service>> {
    match state.repo.list_services().await {
        Ok(services) => success(services),
        Err(e) => error(e),
    }
}

/// POST /api/services - Create a new service.
pub async fn create_service(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRequest>,
) -> ApiResult<Service> {
    // Validate required fields
    if request.name.trim().is_empty() {
        return error(AppError::Validation("Name is required".to_string()));
    }
    if request.image.trim().is_empty() {
        return error(AppError::Validation("Image is required".to_string()));
    }

    match state.repo.create_service(&request).await {
        Ok(service) => success(service),
        Err(e) => error(e),
    }
}

/// DELETE /api/services/:id - Delete a service.
pub async fn delete_service(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    match state.repo.delete_service(id).await {
        Ok(()) => success(()),
        Err(e) => error(e),
    }
}
