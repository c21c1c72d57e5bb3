//! Service model for the public services section.

use serde::{Deserialize, Serialize};

/// A hospital service shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: String,
}

/// Request body for creating a new service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub image: String,
}
