pub mod fleet_controller;

pub use fleet_controller::{added_message, not_found_message, DeleteOutcome, FleetController};
