//! Port discovery file.
//!
//! The server writes this file after binding to a port. The CLI reads it
//! to discover the server URL without a manual --server flag.
//!
//! File location: `<config_dir>/server.json`
//!
//! A server that crashes without cleanup leaves the file behind; the next
//! server start simply overwrites it, and a CLI pointed at a stale file
//! gets a connection error it would have gotten anyway.

use crate::{Config, ConfigError, ConfigErrorResult};

use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

const PORT_FILENAME: &str = "server.json";

/// Information stored in the port discovery file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortFileInfo {
    /// Process ID of the server that wrote this file
    pub pid: u32,
    /// Port the server is listening on
    pub port: u16,
    /// Host the server is bound to
    pub host: String,
    /// ISO 8601 timestamp when the server started
    pub started_at: String,
    /// Server version for diagnostics
    pub version: String,
}

impl PortFileInfo {
    /// Path of the port discovery file inside the config directory.
    pub fn path() -> ConfigErrorResult<PathBuf> {
        Ok(Config::config_dir()?.join(PORT_FILENAME))
    }

    /// Write a port discovery file to the config directory.
    ///
    /// Called by the server after `TcpListener::bind()` succeeds; the
    /// port argument is the actual bound port (matters with port 0).
    pub fn write(port: u16, host: &str) -> ConfigErrorResult<PathBuf> {
        let path = Self::path()?;

        if let Some(dir) = path.parent()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let info = PortFileInfo {
            pid: std::process::id(),
            port,
            host: host.to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        let json = serde_json::to_string_pretty(&info)
            .map_err(|e| ConfigError::config(format!("Failed to serialize port file: {}", e)))?;

        std::fs::write(&path, json).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    /// Read the port discovery file, if one exists.
    ///
    /// A missing file is `None`; an unreadable or corrupted file logs a
    /// warning and is also `None` (the CLI falls back to asking for an
    /// explicit --server flag).
    pub fn read() -> ConfigErrorResult<Option<PortFileInfo>> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(None);
        }

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read port file {}: {}", path.display(), e);
                return Ok(None);
            }
        };

        match serde_json::from_str::<PortFileInfo>(&contents) {
            Ok(info) => Ok(Some(info)),
            Err(e) => {
                warn!("Port file corrupted at {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    /// Remove the port discovery file. Missing file is not an error.
    pub fn remove() -> ConfigErrorResult<()> {
        let path = Self::path()?;

        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| ConfigError::Io { path, source: e })?;
        }

        Ok(())
    }
}
