//! Maintenance task model
//!
//! `vehicle_id` references `Vehicle`. A task without a completion date is
//! still open.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Entity, Table};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MaintenanceTask {
    pub task_id: i64,
    pub vehicle_id: i64,
    pub task_description: String,
    pub due_date: NaiveDate,
    pub completion_date: Option<NaiveDate>,
}

impl Entity for MaintenanceTask {
    const TABLE: Table = Table::MaintenanceTask;

    fn cells(&self) -> Vec<String> {
        vec![
            self.task_id.to_string(),
            self.vehicle_id.to_string(),
            self.task_description.clone(),
            self.due_date.format("%Y-%m-%d").to_string(),
            self.completion_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ]
    }
}
