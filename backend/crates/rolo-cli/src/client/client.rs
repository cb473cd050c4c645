use crate::{CliClientResult, ClientError, ContactRecord};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the rolo-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        // Check for error response
        #[allow(clippy::collapsible_if)]
        if !status.is_success() {
            if let Some(error) = body.get("error") {
                let code = error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string();
                return Err(ClientError::Api {
                    code,
                    message,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(body)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Sign up or log in; `action` is "signup" or "login"
    pub async fn auth(
        &self,
        username: &str,
        password: &str,
        action: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct AuthRequest<'a> {
            username: &'a str,
            password: &'a str,
            action: &'a str,
        }

        let body = AuthRequest {
            username,
            password,
            action,
        };
        let req = self.request(Method::POST, "/api/auth").json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Contact Operations
    // =========================================================================

    /// List contacts owned by `user_id`
    pub async fn list_contacts(&self, user_id: &str) -> CliClientResult<Vec<ContactRecord>> {
        let req = self.request(Method::GET, &format!("/api/contacts?userId={}", user_id));
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Create a contact owned by `user_id`
    pub async fn create_contact(
        &self,
        user_id: &str,
        name: &str,
        email: &str,
        phone: &str,
    ) -> CliClientResult<ContactRecord> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            #[serde(rename = "userId")]
            user_id: &'a str,
            name: &'a str,
            email: &'a str,
            phone: &'a str,
        }

        let body = CreateRequest {
            user_id,
            name,
            email,
            phone,
        };
        let req = self.request(Method::POST, "/api/contacts").json(&body);
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Update a contact (full field replace, like the form submit)
    pub async fn update_contact(
        &self,
        id: &str,
        name: &str,
        email: &str,
        phone: &str,
    ) -> CliClientResult<ContactRecord> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            name: &'a str,
            email: &'a str,
            phone: &'a str,
        }

        let body = UpdateRequest { name, email, phone };
        let req = self
            .request(Method::PUT, &format!("/api/contacts/{}", id))
            .json(&body);
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Delete a contact
    pub async fn delete_contact(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/contacts/{}", id));
        self.execute(req).await
    }
}
