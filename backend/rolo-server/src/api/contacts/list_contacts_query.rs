use serde::Deserialize;

/// Query parameters for listing contacts
#[derive(Debug, Deserialize)]
pub struct ListContactsQuery {
    /// Owner identifier. Self-reported by the caller; the server trusts
    /// it as-is (see DESIGN.md on the ownership trust gap).
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}
