use rolo_core::Contact;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Wire representation of a contact (camelCase field names are the
/// external contract).
#[derive(Debug, Serialize)]
pub struct ContactDto {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactDto {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            user_id: contact.user_id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}
