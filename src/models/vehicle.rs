//! Vehicle model
//!
//! Maps to the `Vehicle` table. `VIN` and `registration_number` are unique.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Entity, Table};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub vehicle_id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[sqlx(rename = "VIN")]
    pub vin: String,
    pub registration_number: String,
}

impl Entity for Vehicle {
    const TABLE: Table = Table::Vehicle;

    fn cells(&self) -> Vec<String> {
        vec![
            self.vehicle_id.to_string(),
            self.make.clone(),
            self.model.clone(),
            self.year.to_string(),
            self.vin.clone(),
            self.registration_number.clone(),
        ]
    }
}
