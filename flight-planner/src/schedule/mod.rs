//! Flight schedule loading.
//!
//! Reads the flight collection the planner searches from a JSON file: an
//! array of objects with `flight_no`, `start_city`, `departure_time`,
//! `end_city`, `arrival_time` and `fare`.

mod error;
mod loader;

pub use error::ScheduleError;
pub use loader::{load_flights, parse_flights};
