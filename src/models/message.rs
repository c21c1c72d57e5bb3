//! Contact message model.

use serde::{Deserialize, Serialize};

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Set by the portal once the message has been handled
    pub read: bool,
    pub created_at: String,
}

/// Request body for the public contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}
