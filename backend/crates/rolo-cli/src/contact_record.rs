use serde::{Deserialize, Serialize};

/// Client-side view of a contact as the API returns it.
///
/// Extra wire fields (timestamps) are ignored; the list UI only renders
/// these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}
