use rolo_core::ContactChanges;

use serde::Deserialize;

/// Request body for updating a contact. Absent fields keep their stored
/// values (the original UI sends the whole record; partial bodies work
/// the same way).
#[derive(Debug, Deserialize)]
pub struct UpdateContactRequest {
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<UpdateContactRequest> for ContactChanges {
    fn from(req: UpdateContactRequest) -> Self {
        Self {
            user_id: req.user_id,
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}
