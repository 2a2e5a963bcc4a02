//! Store abstraction used by the identity services.
//!
//! The services are generic over these traits so the same registration,
//! login and directory flows serve all three entity kinds, backed either
//! by the SQLite repositories or by an in-memory store in tests.

use async_trait::async_trait;
use chalkboard_database::{
    Admin, AdminRepository, IdentityKind, IdentityResult, NewAdmin, NewRosterMember,
    RosterMember, RosterRepository, UpdateAdmin, UpdateRosterMember,
};

/// A persisted identity of any kind.
pub trait IdentityRecord: Clone + Send + Sync {
    fn id(&self) -> &str;
    fn email(&self) -> &str;
    fn password_hash(&self) -> &str;
}

/// A roster record additionally carries a display name searched by the
/// directory service.
pub trait RosterRecord: IdentityRecord {
    fn name(&self) -> Option<&str>;
}

/// Registration payload: the fields every kind must supply to sign up.
pub trait RegistrationInput: Send + Sync {
    fn email(&self) -> &str;
    fn password(&self) -> &str;
}

/// Partial update payload. The plaintext replacement password, if any, is
/// hashed by the directory service before it reaches the store.
pub trait IdentityPatch: Send + Sync {
    fn password(&self) -> Option<&str>;
}

/// Persistence operations common to all entity kinds.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    type Record: IdentityRecord;
    type NewRecord: RegistrationInput;
    type Patch: IdentityPatch;

    fn kind(&self) -> IdentityKind;

    async fn find_all(&self) -> IdentityResult<Vec<Self::Record>>;
    async fn find_by_id(&self, id: &str) -> IdentityResult<Option<Self::Record>>;
    async fn find_by_email(&self, email: &str) -> IdentityResult<Option<Self::Record>>;
    /// Insert a record whose password has already been hashed. Must map a
    /// store-level email uniqueness violation to `DuplicateEmail`.
    async fn insert(
        &self,
        record: &Self::NewRecord,
        password_hash: &str,
    ) -> IdentityResult<Self::Record>;
    /// Merge the supplied fields and return the re-read post-update record.
    async fn update(
        &self,
        id: &str,
        patch: &Self::Patch,
        password_hash: Option<&str>,
    ) -> IdentityResult<Self::Record>;
    async fn delete(&self, id: &str) -> IdentityResult<()>;
}

/// Extra lookups available for teacher and student kinds.
#[async_trait]
pub trait RosterStore: IdentityStore {
    async fn find_by_classroom(&self, classroom: &str) -> IdentityResult<Vec<Self::Record>>;
}

impl IdentityRecord for Admin {
    fn id(&self) -> &str {
        &self.id
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl IdentityRecord for RosterMember {
    fn id(&self) -> &str {
        &self.id
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl RosterRecord for RosterMember {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl RegistrationInput for NewAdmin {
    fn email(&self) -> &str {
        &self.email
    }

    fn password(&self) -> &str {
        &self.password
    }
}

impl RegistrationInput for NewRosterMember {
    fn email(&self) -> &str {
        &self.email
    }

    fn password(&self) -> &str {
        &self.password
    }
}

impl IdentityPatch for UpdateAdmin {
    fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl IdentityPatch for UpdateRosterMember {
    fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

#[async_trait]
impl IdentityStore for AdminRepository {
    type Record = Admin;
    type NewRecord = NewAdmin;
    type Patch = UpdateAdmin;

    fn kind(&self) -> IdentityKind {
        IdentityKind::Admin
    }

    async fn find_all(&self) -> IdentityResult<Vec<Admin>> {
        AdminRepository::find_all(self).await
    }

    async fn find_by_id(&self, id: &str) -> IdentityResult<Option<Admin>> {
        AdminRepository::find_by_id(self, id).await
    }

    async fn find_by_email(&self, email: &str) -> IdentityResult<Option<Admin>> {
        AdminRepository::find_by_email(self, email).await
    }

    async fn insert(&self, record: &NewAdmin, password_hash: &str) -> IdentityResult<Admin> {
        AdminRepository::insert(self, record, password_hash).await
    }

    async fn update(
        &self,
        id: &str,
        patch: &UpdateAdmin,
        password_hash: Option<&str>,
    ) -> IdentityResult<Admin> {
        AdminRepository::update(self, id, patch, password_hash).await
    }

    async fn delete(&self, id: &str) -> IdentityResult<()> {
        AdminRepository::delete(self, id).await
    }
}

#[async_trait]
impl IdentityStore for RosterRepository {
    type Record = RosterMember;
    type NewRecord = NewRosterMember;
    type Patch = UpdateRosterMember;

    fn kind(&self) -> IdentityKind {
        RosterRepository::kind(self)
    }

    async fn find_all(&self) -> IdentityResult<Vec<RosterMember>> {
        RosterRepository::find_all(self).await
    }

    async fn find_by_id(&self, id: &str) -> IdentityResult<Option<RosterMember>> {
        RosterRepository::find_by_id(self, id).await
    }

    async fn find_by_email(&self, email: &str) -> IdentityResult<Option<RosterMember>> {
        RosterRepository::find_by_email(self, email).await
    }

    async fn insert(
        &self,
        record: &NewRosterMember,
        password_hash: &str,
    ) -> IdentityResult<RosterMember> {
        RosterRepository::insert(self, record, password_hash).await
    }

    async fn update(
        &self,
        id: &str,
        patch: &UpdateRosterMember,
        password_hash: Option<&str>,
    ) -> IdentityResult<RosterMember> {
        RosterRepository::update(self, id, patch, password_hash).await
    }

    async fn delete(&self, id: &str) -> IdentityResult<()> {
        RosterRepository::delete(self, id).await
    }
}

#[async_trait]
impl RosterStore for RosterRepository {
    async fn find_by_classroom(&self, classroom: &str) -> IdentityResult<Vec<RosterMember>> {
        RosterRepository::find_by_classroom(self, classroom).await
    }
}
