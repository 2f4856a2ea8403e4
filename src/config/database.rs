//! Database configuration
//!
//! SQLite connection settings and pool construction with SQLx.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use super::{flag_or, parse_or, ConfigError};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://FleetManagement.db";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub busy_timeout: Duration,
    pub foreign_keys: bool,
    /// `None` keeps idle connections open forever, which an in-memory
    /// database needs to survive.
    pub idle_timeout: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 4,
            busy_timeout: Duration::from_secs(5),
            foreign_keys: false,
            idle_timeout: Some(Duration::from_secs(300)),
        }
    }
}

impl DatabaseConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", defaults.max_connections)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            url: lookup("DATABASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.url),
            max_connections,
            busy_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DATABASE_BUSY_TIMEOUT_SECS",
                defaults.busy_timeout.as_secs(),
            )?),
            foreign_keys: flag_or(&lookup, "DATABASE_FOREIGN_KEYS", defaults.foreign_keys)?,
            idle_timeout: defaults.idle_timeout,
        })
    }

    /// Private in-memory database, used by tests
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            idle_timeout: None,
            ..Self::default()
        }
    }

    pub fn with_foreign_keys(mut self, enabled: bool) -> Self {
        self.foreign_keys = enabled;
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Create the connection pool; the database file is created if missing
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .foreign_keys(self.foreign_keys)
            .busy_timeout(self.busy_timeout);

        let max_lifetime = if self.is_in_memory() {
            None
        } else {
            Some(Duration::from_secs(3600))
        };

        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(max_lifetime)
            .connect_with(options)
            .await
    }
}
