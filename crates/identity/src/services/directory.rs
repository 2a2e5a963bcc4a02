//! Directory flows: lookups and mutations shared across entity kinds.

use crate::password;
use crate::store::{IdentityPatch, IdentityRecord, IdentityStore, RosterRecord, RosterStore};
use chalkboard_database::{IdentityError, IdentityResult};

/// Query and mutation operations over one kind's records.
pub struct DirectoryService<S> {
    store: S,
}

impl<S: IdentityStore> DirectoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> IdentityResult<Vec<S::Record>> {
        self.store.find_all().await
    }

    pub async fn get(&self, id: &str) -> IdentityResult<S::Record> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(IdentityError::NotFound)
    }

    /// Merge the supplied fields into an existing record. A replacement
    /// password is hashed here so the store only ever sees hashes; the id
    /// is never writable. Returns the re-read post-update record.
    pub async fn update(&self, id: &str, patch: S::Patch) -> IdentityResult<S::Record> {
        let password_hash = match patch.password() {
            Some(plaintext) => Some(password::hash_password(plaintext)?),
            None => None,
        };

        let record = self
            .store
            .update(id, &patch, password_hash.as_deref())
            .await?;

        tracing::info!(
            kind = self.store.kind().label(),
            id = record.id(),
            "updated identity"
        );
        Ok(record)
    }

    /// Hard delete, returning the record as it existed immediately before
    /// deletion. A missing id answers `NotFound` and leaves the store
    /// unmodified.
    pub async fn delete(&self, id: &str) -> IdentityResult<S::Record> {
        let record = self.get(id).await?;
        self.store.delete(id).await?;

        tracing::info!(
            kind = self.store.kind().label(),
            id = record.id(),
            "deleted identity"
        );
        Ok(record)
    }
}

impl<S> DirectoryService<S>
where
    S: RosterStore,
    S::Record: RosterRecord,
{
    /// Case-insensitive substring search over the name field. All records
    /// are loaded and filtered here rather than in the store; at this
    /// scale the simplicity wins over an indexed query. A blank query
    /// degenerates to `list_all`.
    pub async fn search_by_name(&self, query: &str) -> IdentityResult<Vec<S::Record>> {
        let all = self.store.find_all().await?;

        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(all);
        }

        Ok(all
            .into_iter()
            .filter(|record| {
                record
                    .name()
                    .map_or(false, |name| name.to_lowercase().contains(&needle))
            })
            .collect())
    }

    pub async fn find_by_classroom(&self, classroom: &str) -> IdentityResult<Vec<S::Record>> {
        self.store.find_by_classroom(classroom).await
    }
}
