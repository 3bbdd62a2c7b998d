//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{CityId, Fare, Flight, FlightNo, Time};
use crate::planner::SearchResult;

/// Request to plan a route between two cities.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Origin city
    pub from: CityId,

    /// Destination city
    pub to: CityId,

    /// Earliest departure of the first flight (defaults to 0)
    pub earliest: Option<Time>,

    /// Latest arrival of any flight (defaults to unbounded)
    pub latest: Option<Time>,

    /// Objective name (defaults to "fewest-flights-earliest")
    pub objective: Option<String>,
}

/// A flight in a planned route.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    pub flight_no: FlightNo,
    pub start_city: CityId,
    pub departure_time: Time,
    pub end_city: CityId,
    pub arrival_time: Time,
    pub fare: Fare,
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    /// "found", "no_route" or "same_city"
    pub status: &'static str,

    /// Flights in travel order
    pub flights: Vec<FlightResult>,

    /// Number of flights taken
    pub hop_count: usize,

    /// Number of changes between flights
    pub connections: usize,

    /// Sum of all fares
    pub total_fare: Fare,

    /// Departure of the first flight
    pub departure_time: Option<Time>,

    /// Arrival of the last flight
    pub arrival_time: Option<Time>,

    /// Number of flights expanded during search
    pub flights_explored: usize,
}

/// Response describing the loaded schedule.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// Number of flights
    pub flights: usize,

    /// Number of cities covered
    pub cities: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<&Flight> for FlightResult {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_no: flight.flight_no,
            start_city: flight.start_city,
            departure_time: flight.departure_time,
            end_city: flight.end_city,
            arrival_time: flight.arrival_time,
            fare: flight.fare,
        }
    }
}

impl PlanRouteResponse {
    /// Create from a planner search result.
    pub fn from_result(result: &SearchResult) -> Self {
        let itinerary = &result.itinerary;
        Self {
            status: result.status.as_str(),
            flights: itinerary.iter().map(FlightResult::from).collect(),
            hop_count: itinerary.hop_count(),
            connections: itinerary.connection_count(),
            total_fare: itinerary.total_fare(),
            departure_time: itinerary.departure_time(),
            arrival_time: itinerary.arrival_time(),
            flights_explored: result.flights_explored,
        }
    }
}
