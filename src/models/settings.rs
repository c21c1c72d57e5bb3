//! Site settings model.
//!
//! Settings is a singleton: exactly one logical row, edited in place by
//! the portal.

use serde::{Deserialize, Serialize};

/// Hospital contact details and opening hours shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub id: i64,
    pub hospital_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub contact_address: String,
    pub working_hours: String,
}

/// Request body for updating the settings singleton.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettingsRequest {
    pub hospital_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub contact_address: String,
    pub working_hours: String,
}
