//! Client session state.
//!
//! Holds at most one identity at a time, mirrored to the session file so
//! it survives restarts. Login and signup never throw to the caller:
//! failures land in the log and come back as `false`, the same way the
//! original UI context swallowed fetch errors.

use crate::client::Client;
use crate::session::session_identity::SessionIdentity;
use crate::session::session_store::SessionStore;

pub struct AuthSession {
    store: SessionStore,
    current: Option<SessionIdentity>,
}

impl AuthSession {
    /// Initialize from the persisted session file, if one exists.
    pub fn load(store: SessionStore) -> Self {
        let current = store.load();
        Self { store, current }
    }

    /// The current identity; `None` means not authenticated.
    pub fn current(&self) -> Option<&SessionIdentity> {
        self.current.as_ref()
    }

    /// Log in against the auth endpoint. `true` on success.
    pub async fn login(&mut self, client: &Client, username: &str, password: &str) -> bool {
        self.authenticate(client, username, password, "login").await
    }

    /// Sign up against the auth endpoint. `true` on success.
    pub async fn signup(&mut self, client: &Client, username: &str, password: &str) -> bool {
        self.authenticate(client, username, password, "signup").await
    }

    async fn authenticate(
        &mut self,
        client: &Client,
        username: &str,
        password: &str,
        action: &str,
    ) -> bool {
        match client.auth(username, password, action).await {
            Ok(body) => match serde_json::from_value::<SessionIdentity>(body) {
                Ok(identity) => {
                    if let Err(e) = self.store.save(&identity) {
                        // The in-memory session still works for this run
                        log::warn!("Failed to persist session: {}", e);
                    }
                    self.current = Some(identity);
                    true
                }
                Err(e) => {
                    log::error!("Malformed {} response: {}", action, e);
                    false
                }
            },
            Err(e) => {
                log::error!("{} failed: {}", action, e);
                false
            }
        }
    }

    /// Clear the in-memory identity and the session file synchronously.
    pub fn logout(&mut self) {
        self.current = None;
        if let Err(e) = self.store.clear() {
            log::warn!("Failed to clear session file: {}", e);
        }
    }
}
