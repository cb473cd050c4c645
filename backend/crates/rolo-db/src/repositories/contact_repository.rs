//! Contact store: owner-scoped CRUD on contact records.
//!
//! `user_id` is whatever owner identifier the caller supplied; listing
//! filters on it verbatim. Updates are last-write-wins and deletes are
//! hard deletes.

use crate::{DbError, Result as DbResult};

use rolo_core::{Contact, ContactChanges};

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, contact: &Contact) -> DbResult<()> {
        let id = contact.id.to_string();
        let created_at = contact.created_at.timestamp();
        let updated_at = contact.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO contacts (id, user_id, name, email, phone, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&contact.user_id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbResult<Option<Contact>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, user_id, name, email, phone, created_at, updated_at
                FROM contacts
                WHERE id = ?
            "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_contact_row(&r)).transpose()
    }

    /// All contacts whose owner identifier equals `user_id`.
    pub async fn find_by_owner(&self, user_id: &str) -> DbResult<Vec<Contact>> {
        let rows = sqlx::query(
            r#"
                SELECT id, user_id, name, email, phone, created_at, updated_at
                FROM contacts
                WHERE user_id = ?
                ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_contact_row).collect()
    }

    /// Merge `changes` into the stored record and return the result.
    ///
    /// `None` when no contact has this id. No version check: concurrent
    /// updates race and the last write wins.
    pub async fn update(&self, id: Uuid, changes: &ContactChanges) -> DbResult<Option<Contact>> {
        let Some(mut contact) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        contact.apply(changes);

        let id_str = contact.id.to_string();
        let updated_at = contact.updated_at.timestamp();

        sqlx::query(
            r#"
                UPDATE contacts
                SET user_id = ?, name = ?, email = ?, phone = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&contact.user_id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(updated_at)
        .bind(&id_str)
        .execute(&self.pool)
        .await?;

        Ok(Some(contact))
    }

    /// Hard-delete a contact. `false` when no row matched.
    pub async fn delete(&self, id: Uuid) -> DbResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(&id_str)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_contact_row(row: &SqliteRow) -> DbResult<Contact> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Contact {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in contacts.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in contacts.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in contacts.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
