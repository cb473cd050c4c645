//! Credential store: user records and password verification.
//!
//! The clear password exists only inside `create_user`, which hashes it
//! exactly once before anything is persisted. No other operation writes
//! `password_hash`, so an already-hashed value can never be re-hashed.

use crate::{DbError, Result as DbResult};

use rolo_core::User;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a user from a clear password.
    ///
    /// The password is salted and hashed here; the store only ever sees
    /// the hash. A username collision surfaces as `DuplicateUsername`
    /// via the unique index, leaving the store unchanged.
    pub async fn create_user(&self, username: &str, password: &str) -> DbResult<User> {
        let password_hash = rolo_auth::hash_password(password)?;
        let user = User::new(username.to_string(), password_hash);

        let id = user.id.to_string();
        let created_at = user.created_at.timestamp();
        let updated_at = user.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (id, username, password_hash, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db) = e
                && db.is_unique_violation()
            {
                return DbError::DuplicateUsername {
                    username: username.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                };
            }
            DbError::from(e)
        })?;

        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> DbResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, password_hash, created_at, updated_at
                FROM users
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user_row(&r)).transpose()
    }

    /// Check a candidate password against the stored hash.
    ///
    /// A malformed stored hash verifies false rather than erroring; the
    /// caller cannot distinguish it from a wrong password.
    pub fn verify_password(user: &User, candidate: &str) -> bool {
        rolo_auth::verify_password(candidate, &user.password_hash).is_ok()
    }
}

fn map_user_row(row: &SqliteRow) -> DbResult<User> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
