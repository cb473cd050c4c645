//! User entity - an account that owns contacts.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user. The password is only ever held as a one-way hash
/// (PHC string); the clear password never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    /// Unique across all users, enforced by the store at write time.
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from an already-hashed password.
    pub fn new(username: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
