//! In-memory store used by the service unit tests.

use crate::store::{IdentityStore, RosterStore};
use async_trait::async_trait;
use chalkboard_database::{
    IdentityError, IdentityKind, IdentityResult, NewRosterMember, RosterMember,
    UpdateRosterMember,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockRosterStore {
    kind: IdentityKind,
    records: Arc<RwLock<HashMap<String, RosterMember>>>,
    next_id: Arc<RwLock<u64>>,
}

impl MockRosterStore {
    pub fn new(kind: IdentityKind) -> Self {
        Self {
            kind,
            records: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl IdentityStore for MockRosterStore {
    type Record = RosterMember;
    type NewRecord = NewRosterMember;
    type Patch = UpdateRosterMember;

    fn kind(&self) -> IdentityKind {
        self.kind
    }

    async fn find_all(&self) -> IdentityResult<Vec<RosterMember>> {
        let records = self.records.read().await;
        let mut all: Vec<_> = records.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: &str) -> IdentityResult<Option<RosterMember>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> IdentityResult<Option<RosterMember>> {
        let records = self.records.read().await;
        Ok(records.values().find(|r| r.email == email).cloned())
    }

    async fn insert(
        &self,
        record: &NewRosterMember,
        password_hash: &str,
    ) -> IdentityResult<RosterMember> {
        let mut records = self.records.write().await;
        if records.values().any(|r| r.email == record.email) {
            return Err(IdentityError::DuplicateEmail);
        }

        let mut next_id = self.next_id.write().await;
        let id = format!("{}-{}", self.kind.label(), *next_id);
        *next_id += 1;

        let now = chrono_free_timestamp(*next_id);
        let member = RosterMember {
            id: id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            password_hash: password_hash.to_string(),
            phone_number: record.phone_number.clone(),
            date_of_birth: record.date_of_birth.clone(),
            address: record.address.clone(),
            assigned_classroom: record.assigned_classroom.clone(),
            created_at: now.clone(),
            updated_at: now,
        };

        records.insert(id, member.clone());
        Ok(member)
    }

    async fn update(
        &self,
        id: &str,
        patch: &UpdateRosterMember,
        password_hash: Option<&str>,
    ) -> IdentityResult<RosterMember> {
        let mut records = self.records.write().await;
        let member = records.get_mut(id).ok_or(IdentityError::NotFound)?;

        if let Some(ref name) = patch.name {
            member.name = Some(name.clone());
        }
        if let Some(ref email) = patch.email {
            member.email = email.clone();
        }
        if let Some(ref phone) = patch.phone_number {
            member.phone_number = Some(phone.clone());
        }
        if let Some(ref dob) = patch.date_of_birth {
            member.date_of_birth = Some(dob.clone());
        }
        if let Some(ref address) = patch.address {
            member.address = Some(address.clone());
        }
        if let Some(ref classroom) = patch.assigned_classroom {
            member.assigned_classroom = Some(classroom.clone());
        }
        if let Some(hash) = password_hash {
            member.password_hash = hash.to_string();
        }

        Ok(member.clone())
    }

    async fn delete(&self, id: &str) -> IdentityResult<()> {
        let mut records = self.records.write().await;
        records.remove(id).map(|_| ()).ok_or(IdentityError::NotFound)
    }
}

#[async_trait]
impl RosterStore for MockRosterStore {
    async fn find_by_classroom(&self, classroom: &str) -> IdentityResult<Vec<RosterMember>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.assigned_classroom.as_deref() == Some(classroom))
            .cloned()
            .collect())
    }
}

// Monotonic fake timestamps keep find_all ordering stable without pulling
// a clock into the mock.
fn chrono_free_timestamp(counter: u64) -> String {
    format!("2024-01-01T00:00:{:02}Z", counter.min(59))
}
