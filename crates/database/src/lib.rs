//! Chalkboard database crate.
//!
//! SQLite persistence for the school backend: connection management,
//! embedded migrations, and the per-kind repositories that make up the
//! identity store adapter.

use sqlx::SqlitePool;

use chalkboard_config::DatabaseConfig;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::prepare_database;
pub use migrations::run_migrations;

pub use repos::{AdminRepository, RosterRepository};

pub use entities::{
    admin::{Admin, NewAdmin, UpdateAdmin},
    roster::{NewRosterMember, RosterMember, UpdateRosterMember},
};

pub use types::{IdentityError, IdentityKind, IdentityResult};

/// Connect and bring the schema up to date.
pub async fn initialize_database(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let pool = prepare_database(config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
