use serde::Deserialize;

/// Request body for POST /api/auth
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub username: String,
    pub password: String,
    /// "signup" or "login"; anything else is rejected
    pub action: String,
}
