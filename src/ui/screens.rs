//! Per-table screen definitions
//!
//! The form fields of each table's add, delete and search screens. Field
//! names match the request DTOs they are posted to.

use super::FormField;
use crate::dto::EntityRequests;
use crate::models::{Driver, MaintenanceTask, Trip, Vehicle};

pub trait Screens: EntityRequests {
    const ADD_FIELDS: &'static [FormField];
    const DELETE_FIELDS: &'static [FormField];
    const SEARCH_FIELDS: &'static [FormField];
}

impl Screens for Vehicle {
    const ADD_FIELDS: &'static [FormField] = &[
        FormField::text("make", "Make"),
        FormField::text("model", "Model"),
        FormField::integer("year", "Year", Some(1900), Some(2100)),
        FormField::text("vin", "VIN"),
        FormField::text("registration_number", "Registration Number"),
    ];
    const DELETE_FIELDS: &'static [FormField] =
        &[FormField::integer("vehicle_id", "Vehicle ID", Some(1), None)];
    const SEARCH_FIELDS: &'static [FormField] = &[
        FormField::integer("vehicle_id", "Vehicle ID", None, None).optional(),
        FormField::text("model", "Model").optional(),
        FormField::text("vin", "VIN").optional(),
        FormField::text("registration_number", "Registration Number").optional(),
    ];
}

impl Screens for Driver {
    const ADD_FIELDS: &'static [FormField] = &[
        FormField::text("name", "Name"),
        FormField::text("license_number", "License Number"),
        FormField::text("contact_number", "Contact Number"),
    ];
    const DELETE_FIELDS: &'static [FormField] = &[FormField::text("name", "Name")];
    const SEARCH_FIELDS: &'static [FormField] = &[
        FormField::integer("driver_id", "Driver ID", None, None).optional(),
        FormField::text("name", "Name").optional(),
        FormField::text("license_number", "License Number").optional(),
        FormField::text("contact_number", "Contact Number").optional(),
    ];
}

impl Screens for MaintenanceTask {
    const ADD_FIELDS: &'static [FormField] = &[
        FormField::integer("vehicle_id", "Vehicle ID", Some(1), None),
        FormField::text("task_description", "Task Description"),
        FormField::date("due_date", "Due Date"),
        FormField::date("completion_date", "Completion Date").optional(),
    ];
    const DELETE_FIELDS: &'static [FormField] =
        &[FormField::integer("vehicle_id", "Vehicle ID", Some(1), None)];
    const SEARCH_FIELDS: &'static [FormField] = &[
        FormField::integer("vehicle_id", "Vehicle ID", None, None).optional(),
        FormField::date("due_date", "Due Date").optional(),
    ];
}

impl Screens for Trip {
    const ADD_FIELDS: &'static [FormField] = &[
        FormField::integer("vehicle_id", "Vehicle ID", Some(1), None),
        FormField::integer("driver_id", "Driver ID", Some(1), None),
        FormField::text("start_location", "Start Location"),
        FormField::text("end_location", "End Location"),
        FormField::decimal("distance", "Distance"),
        FormField::decimal("fuel_consumption", "Fuel Consumption"),
        FormField::datetime("start_time", "Start Time"),
        FormField::datetime("end_time", "End Time"),
    ];
    const DELETE_FIELDS: &'static [FormField] = &[
        FormField::text("start_location", "Start Location"),
        FormField::text("end_location", "End Location"),
    ];
    const SEARCH_FIELDS: &'static [FormField] = &[
        FormField::text("start_location", "Start Location").optional(),
        FormField::text("end_location", "End Location").optional(),
    ];
}
