//! Roster repository for database operations. One repository type serves
//! both the `teachers` and `students` tables, selected by `IdentityKind`.

use crate::entities::{NewRosterMember, RosterMember, UpdateRosterMember};
use crate::types::{IdentityError, IdentityKind, IdentityResult};
use chrono::Utc;
use sqlx::{Row, SqlitePool};

const COLUMNS: &str = "id, name, email, password_hash, phone_number, date_of_birth, address, assigned_classroom, created_at, updated_at";

/// Store adapter for one roster table (`teachers` or `students`).
#[derive(Clone)]
pub struct RosterRepository {
    pool: SqlitePool,
    kind: IdentityKind,
}

fn map_write_error(e: sqlx::Error) -> IdentityError {
    let message = e.to_string();
    if message.contains("UNIQUE constraint failed") && message.contains("email") {
        IdentityError::DuplicateEmail
    } else {
        IdentityError::Database(message)
    }
}

fn member_from_row(row: &sqlx::sqlite::SqliteRow) -> RosterMember {
    RosterMember {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        phone_number: row.get("phone_number"),
        date_of_birth: row.get("date_of_birth"),
        address: row.get("address"),
        assigned_classroom: row.get("assigned_classroom"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl RosterRepository {
    /// The kind selects the backing table; only roster kinds are valid here.
    pub fn new(pool: SqlitePool, kind: IdentityKind) -> Self {
        debug_assert!(kind != IdentityKind::Admin);
        Self { pool, kind }
    }

    pub fn kind(&self) -> IdentityKind {
        self.kind
    }

    fn table(&self) -> &'static str {
        self.kind.table()
    }

    pub async fn find_all(&self) -> IdentityResult<Vec<RosterMember>> {
        let query_str = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY created_at",
            self.table()
        );
        let rows = sqlx::query(&query_str).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(member_from_row).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> IdentityResult<Option<RosterMember>> {
        let query_str = format!("SELECT {COLUMNS} FROM {} WHERE id = ?", self.table());
        let row = sqlx::query(&query_str)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(member_from_row))
    }

    pub async fn find_by_email(&self, email: &str) -> IdentityResult<Option<RosterMember>> {
        let query_str = format!("SELECT {COLUMNS} FROM {} WHERE email = ?", self.table());
        let row = sqlx::query(&query_str)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(member_from_row))
    }

    pub async fn find_by_classroom(&self, classroom: &str) -> IdentityResult<Vec<RosterMember>> {
        let query_str = format!(
            "SELECT {COLUMNS} FROM {} WHERE assigned_classroom = ? ORDER BY created_at",
            self.table()
        );
        let rows = sqlx::query(&query_str)
            .bind(classroom)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(member_from_row).collect())
    }

    /// Insert a new member. The caller supplies the already-hashed
    /// password; plaintext never reaches this layer.
    pub async fn insert(
        &self,
        request: &NewRosterMember,
        password_hash: &str,
    ) -> IdentityResult<RosterMember> {
        let id = cuid2::cuid();
        let now = Utc::now().to_rfc3339();

        let query_str = format!(
            "INSERT INTO {} ({COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            self.table()
        );

        sqlx::query(&query_str)
            .bind(&id)
            .bind(&request.name)
            .bind(&request.email)
            .bind(password_hash)
            .bind(&request.phone_number)
            .bind(&request.date_of_birth)
            .bind(&request.address)
            .bind(&request.assigned_classroom)
            .bind(&now)
            .bind(&now)
            .execute(&self.pool)
            .await
            .map_err(map_write_error)?;

        self.find_by_id(&id).await?.ok_or_else(|| {
            IdentityError::Database(format!("failed to re-read created {}", self.kind.label()))
        })
    }

    /// Merge the supplied fields into an existing row and return the
    /// re-read post-update record.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateRosterMember,
        password_hash: Option<&str>,
    ) -> IdentityResult<RosterMember> {
        let now = Utc::now().to_rfc3339();

        let mut query_parts = Vec::new();
        let mut values = Vec::new();

        let text_fields = [
            ("name = ?", &request.name),
            ("email = ?", &request.email),
            ("phone_number = ?", &request.phone_number),
            ("date_of_birth = ?", &request.date_of_birth),
            ("address = ?", &request.address),
            ("assigned_classroom = ?", &request.assigned_classroom),
        ];
        for (clause, value) in text_fields {
            if let Some(value) = value {
                query_parts.push(clause);
                values.push(value.clone());
            }
        }

        if let Some(hash) = password_hash {
            query_parts.push("password_hash = ?");
            values.push(hash.to_string());
        }

        if query_parts.is_empty() {
            return self.find_by_id(id).await?.ok_or(IdentityError::NotFound);
        }

        query_parts.push("updated_at = ?");
        values.push(now);

        let query_str = format!(
            "UPDATE {} SET {} WHERE id = ?",
            self.table(),
            query_parts.join(", ")
        );

        let mut query = sqlx::query(&query_str);
        for value in values {
            query = query.bind(value);
        }
        query = query.bind(id);

        let result = query.execute(&self.pool).await.map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(IdentityError::NotFound);
        }

        self.find_by_id(id).await?.ok_or(IdentityError::NotFound)
    }

    /// Hard delete. The service layer reads the record first when the
    /// caller needs its prior contents.
    pub async fn delete(&self, id: &str) -> IdentityResult<()> {
        let query_str = format!("DELETE FROM {} WHERE id = ?", self.table());
        let result = sqlx::query(&query_str)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(IdentityError::NotFound);
        }

        Ok(())
    }
}
