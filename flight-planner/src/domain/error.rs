//! Domain error types.
//!
//! These errors represent validation failures in flight records and
//! itineraries. They are distinct from search and IO errors.

use super::{CityId, FlightNo, Time};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A flight record is malformed
    #[error("invalid flight {flight_no}: {reason}")]
    InvalidFlight {
        flight_no: FlightNo,
        reason: &'static str,
    },

    /// A flight names a city beyond the planner's city bound
    #[error("flight {flight_no} names city {city}, but city ids must be below {max_cities}")]
    CityOutOfRange {
        flight_no: FlightNo,
        city: CityId,
        max_cities: usize,
    },

    /// Consecutive flights don't share a city
    #[error("flight {from} does not land where flight {to} departs")]
    FlightsNotConnected { from: FlightNo, to: FlightNo },

    /// Consecutive flights are too close together
    #[error("layover between flights {from} and {to} is shorter than {required}")]
    LayoverTooShort {
        from: FlightNo,
        to: FlightNo,
        required: Time,
    },
}
