use serde::Deserialize;
use validator::Validate;

use super::{lenient, require_criteria, text, AddRequest, DeleteRequest, EntityRequests, SearchRequest};
use crate::models::{Condition, SqlValue, Trip};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{parse_timestamp, validate_finite, validate_not_empty};

// Add Trip form
#[derive(Debug, Deserialize, Validate)]
pub struct AddTripRequest {
    #[serde(default, deserialize_with = "lenient")]
    #[validate(
        required(message = "is required"),
        range(min = 1, message = "must be a positive id")
    )]
    pub vehicle_id: Option<i64>,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(
        required(message = "is required"),
        range(min = 1, message = "must be a positive id")
    )]
    pub driver_id: Option<i64>,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub start_location: String,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub end_location: String,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(required(message = "is required"), custom = "validate_finite")]
    pub distance: Option<f64>,

    #[serde(default, deserialize_with = "lenient")]
    #[validate(required(message = "is required"), custom = "validate_finite")]
    pub fuel_consumption: Option<f64>,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub start_time: String,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub end_time: String,
}

impl AddRequest for AddTripRequest {
    type Entity = Trip;

    fn into_values(self) -> AppResult<Vec<(&'static str, SqlValue)>> {
        let vehicle_id = self
            .vehicle_id
            .ok_or_else(|| validation_error("vehicle_id", "is required"))?;
        let driver_id = self
            .driver_id
            .ok_or_else(|| validation_error("driver_id", "is required"))?;
        let distance = self
            .distance
            .ok_or_else(|| validation_error("distance", "is required"))?;
        let fuel_consumption = self
            .fuel_consumption
            .ok_or_else(|| validation_error("fuel_consumption", "is required"))?;

        Ok(vec![
            ("vehicle_id", vehicle_id.into()),
            ("driver_id", driver_id.into()),
            ("start_location", text(&self.start_location)),
            ("end_location", text(&self.end_location)),
            ("distance", distance.into()),
            ("fuel_consumption", fuel_consumption.into()),
            ("start_time", parse_timestamp("start_time", &self.start_time)?.into()),
            ("end_time", parse_timestamp("end_time", &self.end_time)?.into()),
        ])
    }
}

// Delete Trip form; both locations must match
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteTripRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub start_location: String,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub end_location: String,
}

impl DeleteRequest for DeleteTripRequest {
    type Entity = Trip;

    fn condition(&self) -> AppResult<Condition> {
        Ok(Condition::matching("start_location", text(&self.start_location))
            .and("end_location", text(&self.end_location)))
    }
}

// Search Trip form: start location, then end location
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchTripRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub start_location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub end_location: Option<String>,
}

impl SearchRequest for SearchTripRequest {
    type Entity = Trip;

    fn criteria(&self) -> AppResult<Vec<Condition>> {
        let criteria = [
            self.start_location
                .as_deref()
                .map(|v| Condition::matching("start_location", v)),
            self.end_location
                .as_deref()
                .map(|v| Condition::matching("end_location", v)),
        ];
        require_criteria(criteria.into_iter().flatten().collect())
    }
}

impl EntityRequests for Trip {
    type Add = AddTripRequest;
    type Delete = DeleteTripRequest;
    type Search = SearchTripRequest;
}
