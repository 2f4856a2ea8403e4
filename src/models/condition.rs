//! Row conditions
//!
//! A [`Condition`] is a conjunction of `column = value` terms. Columns are
//! static names checked against the target table; values are always bound
//! as statement parameters, never spliced into SQL.

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::sqlite::SqliteArguments;
use sqlx::Arguments;
use std::fmt;

/// A value bound to a statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl SqlValue {
    /// Append this value to a SQLite argument list
    pub fn add_to(self, args: &mut SqliteArguments<'_>) {
        match self {
            SqlValue::Null => args.add(None::<String>),
            SqlValue::Integer(v) => args.add(v),
            SqlValue::Real(v) => args.add(v),
            SqlValue::Text(v) => args.add(v),
            SqlValue::Date(v) => args.add(v),
            SqlValue::Timestamp(v) => args.add(v),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Integer(v) => write!(f, "{}", v),
            SqlValue::Real(v) => write!(f, "{}", v),
            SqlValue::Text(v) => write!(f, "'{}'", v.replace('\'', "''")),
            SqlValue::Date(v) => write!(f, "'{}'", v.format("%Y-%m-%d")),
            SqlValue::Timestamp(v) => write!(f, "'{}'", v.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Integer(v.into())
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(v: NaiveDate) -> Self {
        SqlValue::Date(v)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(v: NaiveDateTime) -> Self {
        SqlValue::Timestamp(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

/// Conjunction of equality terms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    terms: Vec<(&'static str, SqlValue)>,
}

impl Condition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-term condition
    pub fn matching(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::new().and(column, value)
    }

    /// Add a term
    pub fn and(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.terms.push((column, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.terms.iter().map(|(column, _)| *column)
    }

    /// SQL text for a `WHERE` clause with `?` placeholders
    pub fn to_sql(&self) -> String {
        self.terms
            .iter()
            .map(|(column, _)| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// Arguments matching the placeholders of [`Condition::to_sql`]
    pub fn into_arguments<'q>(self) -> SqliteArguments<'q> {
        let mut args = SqliteArguments::default();
        for (_, value) in self.terms {
            value.add_to(&mut args);
        }
        args
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .terms
            .iter()
            .map(|(column, value)| format!("{} = {}", column, value))
            .collect::<Vec<_>>()
            .join(" AND ");
        f.write_str(&rendered)
    }
}
