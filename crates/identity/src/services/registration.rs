//! Registration flow: per-kind email uniqueness plus credential hashing.

use crate::password;
use crate::store::{IdentityRecord, IdentityStore, RegistrationInput};
use chalkboard_database::{IdentityError, IdentityResult};

/// Creates new identity records. Generic over the store so one
/// implementation serves admins, teachers and students.
pub struct RegistrationService<S> {
    store: S,
}

impl<S: IdentityStore> RegistrationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new identity. Fails with `DuplicateEmail` when another
    /// record of the same kind already uses the address. The plaintext
    /// password is hashed here and discarded; only the hash is persisted.
    ///
    /// The existence pre-check and the insert are not atomic; the store's
    /// unique constraint backstops concurrent registrations and also
    /// reports `DuplicateEmail`.
    pub async fn register(&self, request: S::NewRecord) -> IdentityResult<S::Record> {
        if self.store.find_by_email(request.email()).await?.is_some() {
            return Err(IdentityError::DuplicateEmail);
        }

        let password_hash = password::hash_password(request.password())?;
        let record = self.store.insert(&request, &password_hash).await?;

        tracing::info!(
            kind = self.store.kind().label(),
            id = record.id(),
            "registered new identity"
        );
        Ok(record)
    }
}
