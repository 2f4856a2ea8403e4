//! Shared application state
//!
//! Handed to every Axum handler through `State<AppState>`.

use sqlx::SqlitePool;

use crate::config::environment::EnvironmentConfig;
use crate::controllers::FleetController;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }

    /// Controller bound to this state's pool
    pub fn controller(&self) -> FleetController {
        FleetController::new(self.pool.clone())
    }
}
