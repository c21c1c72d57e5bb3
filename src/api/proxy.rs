//! Public content proxy endpoints.
//!
//! The read endpoints never fail outward; see `crate::proxy` for the
//! freshness and fallback policy. The contact form is the one public
//! write and reports store failure to the caller.

use axum::{extract::State, response::Response, Json};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::CreateContactRequest;
use crate::proxy::{self, FetchFailure, Resource};
use crate::AppState;

/// GET /api/proxy/services - Public list of services.
pub async fn proxy_services(State(state): State<AppState>) -> Response {
    let outcome =
        proxy::fetch_bounded(state.config.store_timeout, state.repo.list_services()).await;

    match outcome {
        Ok(services) => proxy::fresh(Resource::Services, services),
        Err(failure) => proxy::degraded(Resource::Services, &failure),
    }
}

/// GET /api/proxy/treatments - Public list of treatments.
pub async fn proxy_treatments(State(state): State<AppState>) -> Response {
    let outcome =
        proxy::fetch_bounded(state.config.store_timeout, state.repo.list_treatments()).await;

    match outcome {
        Ok(treatments) => proxy::fresh(Resource::Treatments, treatments),
        Err(failure) => proxy::degraded(Resource::Treatments, &failure),
    }
}

/// GET /api/proxy/settings - Public site settings.
///
/// A missing settings row is served as a degraded null, same as a failed
/// query; the public page cannot tell the difference and should not.
pub async fn proxy_settings(State(state): State<AppState>) -> Response {
    let outcome = proxy::fetch_bounded(state.config.store_timeout, async {
        state
            .repo
            .get_settings()
            .await?
            .ok_or_else(|| AppError::NotFound("Settings row missing".to_string()))
    })
    .await;

    match outcome {
        Ok(settings) => proxy::fresh(Resource::Settings, settings),
        Err(failure) => proxy::degraded(Resource::Settings, &failure),
    }
}

/// POST /api/proxy/contact - Public contact form submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactRequest>,
) -> ApiResult<()> {
    // Validate required fields
    if request.name.trim().is_empty() {
        return error(AppError::Validation("Name is required".to_string()));
    }
    if request.message.trim().is_empty() {
        return error(AppError::Validation("Message is required".to_string()));
    }

    let outcome =
        proxy::fetch_bounded(state.config.store_timeout, state.repo.create_message(&request))
            .await;

    match outcome {
        Ok(_message) => success(()),
        Err(FetchFailure::Timeout) => error(AppError::Database(
            "Store query timed out".to_string(),
        )),
        Err(FetchFailure::Store(e)) => error(e),
    }
}
