use serde::Serialize;

/// Identity returned on successful signup or login.
///
/// Only the id and username ever leave the server; password material in
/// any form stays in the store.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub id: String,
    pub username: String,
}
