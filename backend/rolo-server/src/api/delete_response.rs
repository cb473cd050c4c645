use serde::Serialize;

/// Confirmation body for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
