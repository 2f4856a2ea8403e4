//! Generic table routines
//!
//! One insert, one delete and one search routine shared by all four
//! tables. Table and column names come from the [`Table`] catalogue and
//! every value is a bound parameter.

use sqlx::sqlite::SqliteArguments;
use sqlx::SqlitePool;

use crate::models::{Condition, Entity, SqlValue, Table};
use crate::utils::errors::{bad_request_error, internal_error, AppResult};

pub struct FleetRepository {
    pool: SqlitePool,
}

impl FleetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert one row and return its id
    pub async fn insert(
        &self,
        table: Table,
        values: Vec<(&'static str, SqlValue)>,
    ) -> AppResult<i64> {
        if values.is_empty() {
            return Err(bad_request_error("Nothing to insert"));
        }
        check_columns(table, values.iter().map(|(column, _)| *column))?;

        let columns: Vec<&str> = values.iter().map(|(column, _)| *column).collect();
        let placeholders = vec!["?"; values.len()].join(", ");
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table.name(),
            columns.join(", "),
            placeholders
        );

        let mut args = SqliteArguments::default();
        for (_, value) in values {
            value.add_to(&mut args);
        }

        let result = sqlx::query_with(&query, args).execute(&self.pool).await?;
        let id = result.last_insert_rowid();

        tracing::info!(table = %table, id, "row inserted");
        Ok(id)
    }

    /// Delete the rows matching `condition` and return how many went away.
    /// An empty condition is refused.
    pub async fn delete(&self, table: Table, condition: Condition) -> AppResult<u64> {
        if condition.is_empty() {
            return Err(bad_request_error("Refusing to delete without a condition"));
        }
        check_columns(table, condition.columns())?;

        let query = format!("DELETE FROM {} WHERE {}", table.name(), condition.to_sql());
        let description = condition.to_string();

        let result = sqlx::query_with(&query, condition.into_arguments())
            .execute(&self.pool)
            .await?;
        let deleted = result.rows_affected();

        tracing::info!(table = %table, condition = %description, deleted, "rows deleted");
        Ok(deleted)
    }

    /// Rows matching `condition`, ordered by primary key
    pub async fn search<E: Entity>(&self, condition: Condition) -> AppResult<Vec<E>> {
        let table = E::TABLE;
        if condition.is_empty() {
            return self.list().await;
        }
        check_columns(table, condition.columns())?;

        let query = format!(
            "SELECT * FROM {} WHERE {} ORDER BY {}",
            table.name(),
            condition.to_sql(),
            table.primary_key()
        );
        let description = condition.to_string();

        let rows = sqlx::query_as_with::<_, E, _>(&query, condition.into_arguments())
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(table = %table, condition = %description, found = rows.len(), "search");
        Ok(rows)
    }

    /// Every row of the table, ordered by primary key
    pub async fn list<E: Entity>(&self) -> AppResult<Vec<E>> {
        let table = E::TABLE;
        let query = format!(
            "SELECT * FROM {} ORDER BY {}",
            table.name(),
            table.primary_key()
        );

        let rows = sqlx::query_as::<_, E>(&query).fetch_all(&self.pool).await?;
        Ok(rows)
    }
}

fn check_columns<'a>(table: Table, mut columns: impl Iterator<Item = &'a str>) -> AppResult<()> {
    match columns.find(|column| !table.has_column(column)) {
        Some(column) => Err(internal_error(&format!(
            "column '{}' does not belong to table {}",
            column, table
        ))),
        None => Ok(()),
    }
}
