//! Table catalogue
//!
//! The four tables of the fleet schema, their column lists and the names
//! used for them in SQL, URLs and on screen.

use std::fmt;
use std::str::FromStr;

/// Tables of the fleet schema, in dependency order (parents first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Vehicle,
    Driver,
    MaintenanceTask,
    Trip,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Vehicle,
        Table::Driver,
        Table::MaintenanceTask,
        Table::Trip,
    ];

    /// SQL table name
    pub fn name(self) -> &'static str {
        match self {
            Table::Vehicle => "Vehicle",
            Table::Driver => "Driver",
            Table::MaintenanceTask => "MaintenanceTask",
            Table::Trip => "Trip",
        }
    }

    /// Human-readable name used in headings and messages
    pub fn label(self) -> &'static str {
        match self {
            Table::Vehicle => "Vehicle",
            Table::Driver => "Driver",
            Table::MaintenanceTask => "Maintenance Task",
            Table::Trip => "Trip",
        }
    }

    /// URL path segment
    pub fn slug(self) -> &'static str {
        match self {
            Table::Vehicle => "vehicles",
            Table::Driver => "drivers",
            Table::MaintenanceTask => "maintenance-tasks",
            Table::Trip => "trips",
        }
    }

    pub fn primary_key(self) -> &'static str {
        match self {
            Table::Vehicle => "vehicle_id",
            Table::Driver => "driver_id",
            Table::MaintenanceTask => "task_id",
            Table::Trip => "trip_id",
        }
    }

    /// Columns in declaration order
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Vehicle => &[
                "vehicle_id",
                "make",
                "model",
                "year",
                "VIN",
                "registration_number",
            ],
            Table::Driver => &["driver_id", "name", "license_number", "contact_number"],
            Table::MaintenanceTask => &[
                "task_id",
                "vehicle_id",
                "task_description",
                "due_date",
                "completion_date",
            ],
            Table::Trip => &[
                "trip_id",
                "vehicle_id",
                "driver_id",
                "start_location",
                "end_location",
                "distance",
                "fuel_consumption",
                "start_time",
                "end_time",
            ],
        }
    }

    /// SQLite column names are case-insensitive.
    pub fn has_column(self, column: &str) -> bool {
        self.columns().iter().any(|c| c.eq_ignore_ascii_case(column))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = String;

    /// Accepts the SQL name or the URL slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s) || t.slug() == s)
            .ok_or_else(|| format!("unknown table '{}'", s))
    }
}
