use serde::Deserialize;
use validator::Validate;

use super::{lenient, require_criteria, text, AddRequest, DeleteRequest, EntityRequests, SearchRequest};
use crate::models::{Condition, SqlValue, Vehicle};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::validate_not_empty;

// Add Vehicle form
#[derive(Debug, Deserialize, Validate)]
pub struct AddVehicleRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub make: String,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub model: String,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(
        required(message = "is required"),
        range(min = 1900, max = 2100, message = "must be between 1900 and 2100")
    )]
    pub year: Option<i32>,

    #[serde(default, alias = "VIN")]
    #[validate(custom = "validate_not_empty")]
    pub vin: String,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub registration_number: String,
}

impl AddRequest for AddVehicleRequest {
    type Entity = Vehicle;

    fn into_values(self) -> AppResult<Vec<(&'static str, SqlValue)>> {
        let year = self
            .year
            .ok_or_else(|| validation_error("year", "is required"))?;

        Ok(vec![
            ("make", text(&self.make)),
            ("model", text(&self.model)),
            ("year", year.into()),
            ("VIN", text(&self.vin)),
            ("registration_number", text(&self.registration_number)),
        ])
    }
}

// Delete Vehicle form
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteVehicleRequest {
    #[serde(default, deserialize_with = "lenient")]
    #[validate(
        required(message = "is required"),
        range(min = 1, message = "must be a positive id")
    )]
    pub vehicle_id: Option<i64>,
}

impl DeleteRequest for DeleteVehicleRequest {
    type Entity = Vehicle;

    fn condition(&self) -> AppResult<Condition> {
        let vehicle_id = self
            .vehicle_id
            .ok_or_else(|| validation_error("vehicle_id", "is required"))?;
        Ok(Condition::matching("vehicle_id", vehicle_id))
    }
}

// Search Vehicle form: id, then model, then VIN, then registration number
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchVehicleRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub vehicle_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub model: Option<String>,
    #[serde(default, alias = "VIN", deserialize_with = "lenient")]
    pub vin: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub registration_number: Option<String>,
}

impl SearchRequest for SearchVehicleRequest {
    type Entity = Vehicle;

    fn criteria(&self) -> AppResult<Vec<Condition>> {
        let criteria = [
            self.vehicle_id.map(|v| Condition::matching("vehicle_id", v)),
            self.model.as_deref().map(|v| Condition::matching("model", v)),
            self.vin.as_deref().map(|v| Condition::matching("VIN", v)),
            self.registration_number
                .as_deref()
                .map(|v| Condition::matching("registration_number", v)),
        ];
        require_criteria(criteria.into_iter().flatten().collect())
    }
}

impl EntityRequests for Vehicle {
    type Add = AddVehicleRequest;
    type Delete = DeleteVehicleRequest;
    type Search = SearchVehicleRequest;
}
