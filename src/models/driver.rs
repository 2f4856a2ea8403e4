//! Driver model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Entity, Table};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub driver_id: i64,
    pub name: String,
    pub license_number: String,
    pub contact_number: String,
}

impl Entity for Driver {
    const TABLE: Table = Table::Driver;

    fn cells(&self) -> Vec<String> {
        vec![
            self.driver_id.to_string(),
            self.name.clone(),
            self.license_number.clone(),
            self.contact_number.clone(),
        ]
    }
}
