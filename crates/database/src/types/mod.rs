//! Shared types for the database layer.

pub mod errors;

pub use errors::{IdentityError, IdentityResult};

/// Descriptor for one of the three identity schemas. Carries the storage
/// table and the human-facing label used in response messages, so one
/// repository and one set of services can be instantiated per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    Admin,
    Teacher,
    Student,
}

impl IdentityKind {
    pub fn table(&self) -> &'static str {
        match self {
            IdentityKind::Admin => "admins",
            IdentityKind::Teacher => "teachers",
            IdentityKind::Student => "students",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IdentityKind::Admin => "admin",
            IdentityKind::Teacher => "teacher",
            IdentityKind::Student => "student",
        }
    }
}
