//! Trip model
//!
//! References both `Vehicle` and `Driver`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Entity, Table};

const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub trip_id: i64,
    pub vehicle_id: i64,
    pub driver_id: i64,
    pub start_location: String,
    pub end_location: String,
    pub distance: f64,
    pub fuel_consumption: f64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl Entity for Trip {
    const TABLE: Table = Table::Trip;

    fn cells(&self) -> Vec<String> {
        vec![
            self.trip_id.to_string(),
            self.vehicle_id.to_string(),
            self.driver_id.to_string(),
            self.start_location.clone(),
            self.end_location.clone(),
            format!("{:.2}", self.distance),
            format!("{:.2}", self.fuel_consumption),
            self.start_time.format(TIMESTAMP_DISPLAY).to_string(),
            self.end_time.format(TIMESTAMP_DISPLAY).to_string(),
        ]
    }
}
