//! Contact entity - an address-book entry scoped to one owner.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A contact record. `user_id` is the owner identifier supplied by the
/// caller; it is stored verbatim with no referential check, so contacts
/// can outlive (or never match) a user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial field replacement for an update. `None` leaves the stored
/// value untouched; last write wins, there is no version check.
#[derive(Debug, Clone, Default)]
pub struct ContactChanges {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Contact {
    pub fn new(user_id: String, name: String, email: String, phone: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            email,
            phone,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a set of changes into this contact and bump `updated_at`.
    pub fn apply(&mut self, changes: &ContactChanges) {
        if let Some(ref user_id) = changes.user_id {
            self.user_id = user_id.clone();
        }
        if let Some(ref name) = changes.name {
            self.name = name.clone();
        }
        if let Some(ref email) = changes.email {
            self.email = email.clone();
        }
        if let Some(ref phone) = changes.phone {
            self.phone = phone.clone();
        }
        self.updated_at = Utc::now();
    }
}
