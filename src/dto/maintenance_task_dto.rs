use serde::Deserialize;
use validator::Validate;

use super::{lenient, require_criteria, text, AddRequest, DeleteRequest, EntityRequests, SearchRequest};
use crate::models::{Condition, MaintenanceTask, SqlValue};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::{parse_date, parse_optional_date, validate_not_empty};

// Add Maintenance Task form
#[derive(Debug, Deserialize, Validate)]
pub struct AddMaintenanceTaskRequest {
    #[serde(default, deserialize_with = "lenient")]
    #[validate(
        required(message = "is required"),
        range(min = 1, message = "must be a positive id")
    )]
    pub vehicle_id: Option<i64>,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub task_description: String,

    /// `YYYY-MM-DD`
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub due_date: String,

    #[serde(default)]
    pub completion_date: Option<String>,
}

impl AddRequest for AddMaintenanceTaskRequest {
    type Entity = MaintenanceTask;

    fn into_values(self) -> AppResult<Vec<(&'static str, SqlValue)>> {
        let vehicle_id = self
            .vehicle_id
            .ok_or_else(|| validation_error("vehicle_id", "is required"))?;
        let due_date = parse_date("due_date", &self.due_date)?;
        let completion_date =
            parse_optional_date("completion_date", self.completion_date.as_deref())?;

        Ok(vec![
            ("vehicle_id", vehicle_id.into()),
            ("task_description", text(&self.task_description)),
            ("due_date", due_date.into()),
            ("completion_date", completion_date.into()),
        ])
    }
}

// Delete Maintenance Task form; removes every task of the vehicle
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteMaintenanceTaskRequest {
    #[serde(default, deserialize_with = "lenient")]
    #[validate(
        required(message = "is required"),
        range(min = 1, message = "must be a positive id")
    )]
    pub vehicle_id: Option<i64>,
}

impl DeleteRequest for DeleteMaintenanceTaskRequest {
    type Entity = MaintenanceTask;

    fn condition(&self) -> AppResult<Condition> {
        let vehicle_id = self
            .vehicle_id
            .ok_or_else(|| validation_error("vehicle_id", "is required"))?;
        Ok(Condition::matching("vehicle_id", vehicle_id))
    }
}

// Search Maintenance Task form: vehicle id, then due date
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchMaintenanceTaskRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub vehicle_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub due_date: Option<String>,
}

impl SearchRequest for SearchMaintenanceTaskRequest {
    type Entity = MaintenanceTask;

    fn criteria(&self) -> AppResult<Vec<Condition>> {
        let mut criteria = Vec::new();
        if let Some(vehicle_id) = self.vehicle_id {
            criteria.push(Condition::matching("vehicle_id", vehicle_id));
        }
        if let Some(due_date) = self.due_date.as_deref() {
            criteria.push(Condition::matching("due_date", parse_date("due_date", due_date)?));
        }
        require_criteria(criteria)
    }
}

impl EntityRequests for MaintenanceTask {
    type Add = AddMaintenanceTaskRequest;
    type Delete = DeleteMaintenanceTaskRequest;
    type Search = SearchMaintenanceTaskRequest;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_add_values_with_blank_completion_date() {
        let request = AddMaintenanceTaskRequest {
            vehicle_id: Some(3),
            task_description: "Oil change".to_string(),
            due_date: "2024-06-01".to_string(),
            completion_date: Some(String::new()),
        };
        assert!(request.validate().is_ok());

        let values = request.into_values().unwrap();
        assert_eq!(values[2].1, SqlValue::Date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert_eq!(values[3], ("completion_date", SqlValue::Null));
    }

    #[test]
    fn test_add_rejects_bad_due_date() {
        let request = AddMaintenanceTaskRequest {
            vehicle_id: Some(3),
            task_description: "Oil change".to_string(),
            due_date: "June 1st".to_string(),
            completion_date: None,
        };
        assert!(request.into_values().is_err());
    }

    #[test]
    fn test_search_by_due_date_binds_a_date() {
        let request = SearchMaintenanceTaskRequest {
            vehicle_id: None,
            due_date: Some("2024-06-01".to_string()),
        };
        assert_eq!(
            request.criteria().unwrap(),
            vec![Condition::matching(
                "due_date",
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
            )]
        );
    }
}
