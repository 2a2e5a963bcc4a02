//! Shared application state: one service bundle per entity kind.

use std::sync::Arc;

use chalkboard_database::{AdminRepository, IdentityKind, RosterRepository};
use chalkboard_identity::{
    AuthService, DirectoryService, IdentityStore, RegistrationService, TokenIssuer,
};
use sqlx::SqlitePool;

/// The three services instantiated for one entity kind.
pub struct IdentityServices<S> {
    pub kind: IdentityKind,
    pub registration: RegistrationService<S>,
    pub auth: AuthService<S>,
    pub directory: DirectoryService<S>,
}

impl<S: IdentityStore + Clone> IdentityServices<S> {
    fn new(store: S, tokens: TokenIssuer) -> Self {
        Self {
            kind: store.kind(),
            registration: RegistrationService::new(store.clone()),
            auth: AuthService::new(store.clone(), tokens),
            directory: DirectoryService::new(store),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub admins: Arc<IdentityServices<AdminRepository>>,
    pub teachers: Arc<IdentityServices<RosterRepository>>,
    pub students: Arc<IdentityServices<RosterRepository>>,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: TokenIssuer) -> Self {
        Self {
            admins: Arc::new(IdentityServices::new(
                AdminRepository::new(pool.clone()),
                tokens.clone(),
            )),
            teachers: Arc::new(IdentityServices::new(
                RosterRepository::new(pool.clone(), IdentityKind::Teacher),
                tokens.clone(),
            )),
            students: Arc::new(IdentityServices::new(
                RosterRepository::new(pool, IdentityKind::Student),
                tokens,
            )),
        }
    }
}
