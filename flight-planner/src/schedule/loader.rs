//! JSON schedule parsing.

use std::path::Path;

use tracing::info;

use crate::domain::Flight;

use super::error::ScheduleError;

/// Parse a JSON array of flights, validating each record.
pub fn parse_flights(json: &str) -> Result<Vec<Flight>, ScheduleError> {
    let flights: Vec<Flight> = serde_json::from_str(json)?;
    for flight in &flights {
        flight.validate()?;
    }
    Ok(flights)
}

/// Read and parse a schedule file.
pub fn load_flights(path: &Path) -> Result<Vec<Flight>, ScheduleError> {
    let json = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let flights = parse_flights(&json)?;
    info!(path = %path.display(), flights = flights.len(), "Loaded flight schedule");

    Ok(flights)
}
