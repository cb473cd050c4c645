pub mod auth_session;
pub mod client;
pub mod contact_list;
pub mod contact_record;
pub mod session;

#[cfg(test)]
mod tests;

pub use auth_session::AuthSession;
pub use client::{CliClientResult, Client, ClientError};
pub use contact_list::{ContactForm, ContactList};
pub use contact_record::ContactRecord;
pub use session::error::{Result as SessionResult, SessionError};
pub use session::session_identity::SessionIdentity;
pub use session::session_store::SessionStore;
