//! Admin entity definitions.

use serde::{Deserialize, Serialize};

/// An administrator account. Admins carry only login credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub email: String,
    /// Argon2 PHC string. Never serialized into responses.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Registration payload for a new admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdmin {
    pub email: String,
    pub password: String,
}

/// Partial update for an existing admin. Unset fields keep their values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAdmin {
    pub email: Option<String>,
    pub password: Option<String>,
}
