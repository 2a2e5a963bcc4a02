//! Admin repository for database operations.

use crate::entities::{Admin, NewAdmin, UpdateAdmin};
use crate::types::{IdentityError, IdentityResult};
use chrono::Utc;
use sqlx::{Row, SqlitePool};

/// Store adapter for the `admins` table.
#[derive(Clone)]
pub struct AdminRepository {
    pool: SqlitePool,
}

fn map_insert_error(e: sqlx::Error) -> IdentityError {
    let message = e.to_string();
    if message.contains("UNIQUE constraint failed") && message.contains("email") {
        IdentityError::DuplicateEmail
    } else {
        IdentityError::Database(message)
    }
}

fn admin_from_row(row: &sqlx::sqlite::SqliteRow) -> Admin {
    Admin {
        id: row.get("id"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

impl AdminRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> IdentityResult<Vec<Admin>> {
        let rows = sqlx::query(
            "SELECT id, email, password_hash, created_at, updated_at FROM admins ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(admin_from_row).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> IdentityResult<Option<Admin>> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at, updated_at FROM admins WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(admin_from_row))
    }

    pub async fn find_by_email(&self, email: &str) -> IdentityResult<Option<Admin>> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at, updated_at FROM admins WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(admin_from_row))
    }

    /// Insert a new admin. The caller supplies the already-hashed password;
    /// plaintext never reaches this layer.
    pub async fn insert(&self, request: &NewAdmin, password_hash: &str) -> IdentityResult<Admin> {
        let id = cuid2::cuid();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO admins (id, email, password_hash, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.email)
        .bind(password_hash)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| IdentityError::Database("failed to re-read created admin".to_string()))
    }

    /// Merge the supplied fields into an existing row and return the
    /// re-read post-update record.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateAdmin,
        password_hash: Option<&str>,
    ) -> IdentityResult<Admin> {
        let now = Utc::now().to_rfc3339();

        let mut query_parts = Vec::new();
        let mut values = Vec::new();

        if let Some(ref email) = request.email {
            query_parts.push("email = ?");
            values.push(email.clone());
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

        let query_str = format!("UPDATE admins SET {} WHERE id = ?", query_parts.join(", "));

        let mut query = sqlx::query(&query_str);
        for value in values {
            query = query.bind(value);
        }
        query = query.bind(id);

        let result = query.execute(&self.pool).await.map_err(map_insert_error)?;

        if result.rows_affected() == 0 {
            return Err(IdentityError::NotFound);
        }

        self.find_by_id(id).await?.ok_or(IdentityError::NotFound)
    }

    /// Hard delete. The service layer reads the record first when the
    /// caller needs its prior contents.
    pub async fn delete(&self, id: &str) -> IdentityResult<()> {
        let result = sqlx::query("DELETE FROM admins WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(IdentityError::NotFound);
        }

        Ok(())
    }
}
