use serde::Deserialize;

/// Request body for creating a contact.
///
/// Every field defaults to empty: this layer performs no required-field
/// validation, matching the client form's bypassable "required" hints.
#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}
