//! Contact message API endpoints for the admin portal.
//!
//! Messages are created through the public contact form, not here.

use axum::extract::{Path, State};

use super::{error, success, ApiResult};
use crate::models::ContactMessage;
use crate::AppState;

/// GET /api/messages - List all contact messages, newest first.
pub async fn list_messages(State(state): State<AppState>) -> ApiResult<Vec<ContactMessage>> {
    match state.repo.list_messages().await {
        Ok(messages) => success(messages),
        Err(e) => error(e),
    }
}

/// PUT /api/messages/:id/read - Mark a contact message as read.
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    match state.repo.mark_message_read(id).await {
        Ok(()) => success(()),
        Err(e) => error(e),
    }
}

/// DELETE /api/messages/:id - Delete a contact message.
pub async fn delete_message(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<()> {
    match state.repo.delete_message(id).await {
        Ok(()) => success(()),
        Err(e) => error(e),
    }
}
