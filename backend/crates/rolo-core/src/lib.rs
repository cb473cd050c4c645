pub mod models;

#[cfg(test)]
mod tests;

pub use error_location::ErrorLocation;
pub use models::contact::{Contact, ContactChanges};
pub use models::user::User;
