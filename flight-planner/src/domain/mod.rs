//! Domain types for the flight route planner.
//!
//! Flights are immutable records; itineraries are chains of flights that
//! connect city to city with enough ground time between legs.

mod error;
mod flight;
mod itinerary;

pub use error::DomainError;
pub use flight::{CityId, Fare, Flight, FlightNo, Time};
pub use itinerary::Itinerary;
