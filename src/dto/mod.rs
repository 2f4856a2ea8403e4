//! Request and response DTOs
//!
//! Each table has an add, a delete and a search request. They deserialize
//! from HTML form posts as well as JSON bodies and query strings.

pub mod api_response;
pub mod driver_dto;
pub mod maintenance_task_dto;
pub mod trip_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;
use validator::Validate;

use crate::models::{Condition, Entity, SqlValue};
use crate::utils::errors::AppResult;

/// Data for one new row
pub trait AddRequest: Validate + DeserializeOwned + Send + Sync + 'static {
    type Entity: Entity;

    /// Column/value pairs to insert. Called after validation.
    fn into_values(self) -> AppResult<Vec<(&'static str, SqlValue)>>;
}

/// Selects rows to remove
pub trait DeleteRequest: Validate + DeserializeOwned + Send + Sync + 'static {
    type Entity: Entity;

    fn condition(&self) -> AppResult<Condition>;
}

/// Lookup criteria, tried in order until one matches
pub trait SearchRequest: Validate + DeserializeOwned + Send + Sync + 'static {
    type Entity: Entity;

    /// One single-term condition per filled-in field, in priority order.
    fn criteria(&self) -> AppResult<Vec<Condition>>;
}

/// Ties an entity to its request types
pub trait EntityRequests: Entity {
    type Add: AddRequest<Entity = Self>;
    type Delete: DeleteRequest<Entity = Self>;
    type Search: SearchRequest<Entity = Self>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Text(String),
    Value(T),
}

/// Deserialize an optional value that may arrive as text.
///
/// HTML forms submit every input as a string, blank ones included; JSON
/// sends native numbers. Blank text is treated as absent.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
{
    match Option::<Lenient<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Lenient::Value(value)) => Ok(Some(value)),
        Some(Lenient::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                trimmed.parse().map(Some).map_err(de::Error::custom)
            }
        }
    }
}

/// Collects the criteria of a search form, failing when none was given.
pub(crate) fn require_criteria(criteria: Vec<Condition>) -> AppResult<Vec<Condition>> {
    if criteria.is_empty() {
        return Err(crate::utils::errors::bad_request_error(
            "Enter at least one field to search by",
        ));
    }
    Ok(criteria)
}

/// Owned, trimmed copy of a required text field
pub(crate) fn text(value: &str) -> SqlValue {
    SqlValue::Text(value.trim().to_string())
}
