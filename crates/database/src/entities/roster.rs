//! Roster entity definitions. Teachers and students share one row shape,
//! so a single entity serves both kinds.

use serde::{Deserialize, Serialize};

/// A teacher or student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterMember {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    /// Argon2 PHC string. Never serialized into responses.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    /// Free-text classroom label; no referential integrity against any
    /// classroom table.
    pub assigned_classroom: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Registration payload for a new teacher or student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRosterMember {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub assigned_classroom: Option<String>,
}

/// Partial update for an existing teacher or student. Unset fields keep
/// their values; `id` is never writable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRosterMember {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub assigned_classroom: Option<String>,
}
