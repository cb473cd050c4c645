//! Explicit database handle.
//!
//! Connected once at process start and passed by handle to whoever needs
//! it; request handlers clone the pool out of it. There is no global
//! connection cache.

use crate::{DbError, Result};

use rolo_core::ErrorLocation;

use std::panic::Location;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database named by `url` (e.g. `sqlite://rolo.db`).
    ///
    /// The database file is created when missing; pool sizing and busy
    /// timeout are fixed, there is one pool per process.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| DbError::Initialization {
                message: format!("Invalid database url: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Run pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// A cloned pool handle for injection into request state.
    pub fn pool(&self) -> SqlitePool {
        self.pool.clone()
    }
}
