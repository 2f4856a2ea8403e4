use serde::Deserialize;
use validator::Validate;

use super::{lenient, require_criteria, text, AddRequest, DeleteRequest, EntityRequests, SearchRequest};
use crate::models::{Condition, Driver, SqlValue};
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_not_empty;

// Add Driver form
#[derive(Debug, Deserialize, Validate)]
pub struct AddDriverRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub name: String,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub license_number: String,

    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub contact_number: String,
}

impl AddRequest for AddDriverRequest {
    type Entity = Driver;

    fn into_values(self) -> AppResult<Vec<(&'static str, SqlValue)>> {
        Ok(vec![
            ("name", text(&self.name)),
            ("license_number", text(&self.license_number)),
            ("contact_number", text(&self.contact_number)),
        ])
    }
}

// Delete Driver form; drivers are removed by name
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteDriverRequest {
    #[serde(default)]
    #[validate(custom = "validate_not_empty")]
    pub name: String,
}

impl DeleteRequest for DeleteDriverRequest {
    type Entity = Driver;

    fn condition(&self) -> AppResult<Condition> {
        Ok(Condition::matching("name", text(&self.name)))
    }
}

// Search Driver form: id, then name, then license, then contact number
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchDriverRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub driver_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub license_number: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub contact_number: Option<String>,
}

impl SearchRequest for SearchDriverRequest {
    type Entity = Driver;

    fn criteria(&self) -> AppResult<Vec<Condition>> {
        let criteria = [
            self.driver_id.map(|v| Condition::matching("driver_id", v)),
            self.name.as_deref().map(|v| Condition::matching("name", v)),
            self.license_number
                .as_deref()
                .map(|v| Condition::matching("license_number", v)),
            self.contact_number
                .as_deref()
                .map(|v| Condition::matching("contact_number", v)),
        ];
        require_criteria(criteria.into_iter().flatten().collect())
    }
}

impl EntityRequests for Driver {
    type Add = AddDriverRequest;
    type Delete = DeleteDriverRequest;
    type Search = SearchDriverRequest;
}
