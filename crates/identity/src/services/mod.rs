//! Business-logic services shared across the three entity kinds.

pub mod auth;
pub mod directory;
pub mod registration;

#[cfg(test)]
pub(crate) mod mock_store;

pub use auth::AuthService;
pub use directory::DirectoryService;
pub use registration::RegistrationService;
