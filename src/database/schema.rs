//! Schema initialization
//!
//! Creates the four fleet tables. Every statement is
//! `CREATE TABLE IF NOT EXISTS`, so running it on an existing database
//! changes nothing.

use sqlx::SqlitePool;

use crate::models::Table;

const CREATE_VEHICLE: &str = r#"
CREATE TABLE IF NOT EXISTS Vehicle (
    vehicle_id INTEGER PRIMARY KEY,
    make TEXT NOT NULL,
    model TEXT NOT NULL,
    year INTEGER NOT NULL,
    VIN TEXT UNIQUE NOT NULL,
    registration_number TEXT UNIQUE NOT NULL
)
"#;

const CREATE_DRIVER: &str = r#"
CREATE TABLE IF NOT EXISTS Driver (
    driver_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    license_number TEXT UNIQUE NOT NULL,
    contact_number TEXT NOT NULL
)
"#;

const CREATE_MAINTENANCE_TASK: &str = r#"
CREATE TABLE IF NOT EXISTS MaintenanceTask (
    task_id INTEGER PRIMARY KEY,
    vehicle_id INTEGER NOT NULL,
    task_description TEXT NOT NULL,
    due_date DATE NOT NULL,
    completion_date DATE,
    FOREIGN KEY (vehicle_id) REFERENCES Vehicle(vehicle_id)
)
"#;

// distance and fuel_consumption are REAL so whole numbers keep their type.
const CREATE_TRIP: &str = r#"
CREATE TABLE IF NOT EXISTS Trip (
    trip_id INTEGER PRIMARY KEY,
    vehicle_id INTEGER NOT NULL,
    driver_id INTEGER NOT NULL,
    start_location TEXT NOT NULL,
    end_location TEXT NOT NULL,
    distance REAL NOT NULL,
    fuel_consumption REAL NOT NULL,
    start_time TIMESTAMP NOT NULL,
    end_time TIMESTAMP NOT NULL,
    FOREIGN KEY (vehicle_id) REFERENCES Vehicle(vehicle_id),
    FOREIGN KEY (driver_id) REFERENCES Driver(driver_id)
)
"#;

/// DDL for one table
pub fn create_statement(table: Table) -> &'static str {
    match table {
        Table::Vehicle => CREATE_VEHICLE,
        Table::Driver => CREATE_DRIVER,
        Table::MaintenanceTask => CREATE_MAINTENANCE_TASK,
        Table::Trip => CREATE_TRIP,
    }
}

/// Create every table that does not exist yet, parents first, in one transaction
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for table in Table::ALL {
        sqlx::query(create_statement(table)).execute(&mut *tx).await?;
        tracing::debug!(table = %table, "table ensured");
    }

    tx.commit().await?;
    Ok(())
}
