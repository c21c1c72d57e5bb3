//! Treatment model for the public treatments list.

use serde::{Deserialize, Serialize};

/// An offered treatment shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treatment {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

/// Request body for creating a new treatment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTreatmentRequest {
    pub name: String,
}
