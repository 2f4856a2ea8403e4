//! Data models
//!
//! Row types for the four fleet tables, the table catalogue and the
//! condition type used by the generic routines.

pub mod condition;
pub mod driver;
pub mod maintenance_task;
pub mod table;
pub mod trip;
pub mod vehicle;

pub use condition::{Condition, SqlValue};
pub use driver::Driver;
pub use maintenance_task::MaintenanceTask;
pub use table::Table;
pub use trip::Trip;
pub use vehicle::Vehicle;

use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

/// A row type stored in one of the fleet tables
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Sync + Unpin + 'static {
    const TABLE: Table;

    /// Display values, one per entry of `Table::columns`.
    fn cells(&self) -> Vec<String>;
}
