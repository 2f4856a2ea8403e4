use sqlx::SqlitePool;
use validator::Validate;

use crate::dto::{AddRequest, DeleteRequest, SearchRequest};
use crate::models::{Entity, Table};
use crate::repositories::FleetRepository;
use crate::utils::errors::AppResult;

/// Result of a delete, with the message shown to the user
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub table: Table,
    pub deleted: u64,
}

impl DeleteOutcome {
    pub fn message(&self) -> String {
        match self.deleted {
            0 => format!("No {} matched; nothing was deleted.", self.table.label()),
            1 => format!("{} deleted successfully!", self.table.label()),
            n => format!("{} deleted successfully! ({} rows)", self.table.label(), n),
        }
    }
}

pub struct FleetController {
    repository: FleetRepository,
}

impl FleetController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: FleetRepository::new(pool),
        }
    }

    /// Validate and insert; returns the new row id
    pub async fn add<R: AddRequest>(&self, request: R) -> AppResult<i64> {
        request.validate()?;
        let values = request.into_values()?;
        self.repository.insert(<R::Entity as Entity>::TABLE, values).await
    }

    pub async fn delete<R: DeleteRequest>(&self, request: &R) -> AppResult<DeleteOutcome> {
        request.validate()?;
        let condition = request.condition()?;
        let deleted = self
            .repository
            .delete(<R::Entity as Entity>::TABLE, condition)
            .await?;

        Ok(DeleteOutcome {
            table: <R::Entity as Entity>::TABLE,
            deleted,
        })
    }

    /// Try each criterion in order and return the first non-empty result.
    /// An empty vector means nothing matched.
    pub async fn search<R: SearchRequest>(&self, request: &R) -> AppResult<Vec<R::Entity>> {
        request.validate()?;

        for condition in request.criteria()? {
            let rows = self.repository.search::<R::Entity>(condition).await?;
            if !rows.is_empty() {
                return Ok(rows);
            }
        }

        Ok(Vec::new())
    }

    pub async fn list<E: Entity>(&self) -> AppResult<Vec<E>> {
        self.repository.list::<E>().await
    }
}

/// Success message for an insert
pub fn added_message(table: Table) -> String {
    format!("{} added successfully!", table.label())
}

/// Warning for a search without results
pub fn not_found_message(table: Table) -> String {
    format!("{} not found.", table.label())
}
