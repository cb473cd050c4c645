//! Persisted session identity.
//!
//! One JSON file under a fixed path holds the current identity so a
//! session survives process restarts. Reads are forgiving (a missing or
//! corrupted file is just "no session"); writes are atomic.

use crate::session::error::{Result as SessionResult, SessionError};
use crate::session::session_identity::SessionIdentity;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::{info, warn};

const SESSION_FILENAME: &str = "session.json";

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `<user data dir>/rolo/session.json`.
    pub fn default_path() -> SessionResult<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("rolo").join(SESSION_FILENAME))
            .ok_or_else(SessionError::data_dir)
    }

    /// Load the persisted identity, if any.
    ///
    /// A missing file means no session (first run or after logout). A
    /// file that cannot be read or parsed logs a warning and also reads
    /// as no session; the user just logs in again.
    pub fn load(&self) -> Option<SessionIdentity> {
        if !self.path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read session file {:?}: {}", self.path, e);
                return None;
            }
        };

        match serde_json::from_str::<SessionIdentity>(&contents) {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!("Session file corrupted at {:?}: {}", self.path, e);
                None
            }
        }
    }

    /// Save the identity using atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    ///
    /// This prevents corruption if the process dies mid-write.
    pub fn save(&self, identity: &SessionIdentity) -> SessionResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| SessionError::dir_creation(dir.to_path_buf(), e))?;
        }

        let temp_path = self
            .path
            .with_extension(format!("tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(identity)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        info!("Saved session for {}", identity.username);
        Ok(())
    }

    /// Remove the persisted identity. Missing file is not an error.
    pub fn clear(&self) -> SessionResult<()> {
        if !self.path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.path)
            .map_err(|e| SessionError::file_remove(self.path.clone(), e))?;

        info!("Cleared session file {:?}", self.path);
        Ok(())
    }
}
