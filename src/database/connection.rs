//! SQLite connection
//!
//! Opens the pool described by [`DatabaseConfig`] and makes sure the schema
//! exists before the pool is handed out.

use sqlx::SqlitePool;

use crate::config::DatabaseConfig;
use crate::database::schema::create_tables;

/// Ready-to-use database handle
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Connect and initialize the schema
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        tracing::info!(
            url = %config.url,
            foreign_keys = config.foreign_keys,
            max_connections = config.max_connections,
            "connecting to database"
        );

        let pool = config.create_pool().await?;
        create_tables(&pool).await?;

        Ok(Self { pool })
    }

    /// Connect using settings from the environment
    pub async fn new_default() -> anyhow::Result<Self> {
        let config = DatabaseConfig::from_env()?;
        Ok(Self::connect(&config).await?)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
