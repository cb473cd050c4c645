use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string, e.g. `sqlite://rolo.db`. Required: there is no
    /// default database and the process must fail at startup without one.
    pub url: Option<String>,
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.url.as_deref() {
            Some(url) if !url.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::database(
                "database.url must be set (config.toml or ROLO_DATABASE_URL)",
            )),
        }
    }

    /// The validated connection string.
    pub fn url(&self) -> ConfigErrorResult<&str> {
        self.validate()?;
        Ok(self.url.as_deref().unwrap_or_default())
    }
}
