use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {reason}")]
    Hash { reason: String },

    #[error("Stored password hash is malformed")]
    MalformedHash,

    #[error("Invalid password")]
    Mismatch,
}

pub type Result<T> = std::result::Result<T, PasswordError>;
