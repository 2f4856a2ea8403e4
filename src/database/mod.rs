//! Database module
//!
//! Connection handling and schema initialization for the SQLite store.

pub mod connection;
pub mod schema;

pub use connection::DatabaseConnection;
pub use schema::create_tables;
