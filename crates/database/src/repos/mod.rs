//! Repository implementations forming the identity store adapter.

pub mod admin_repository;
pub mod roster_repository;

pub use admin_repository::AdminRepository;
pub use roster_repository::RosterRepository;
