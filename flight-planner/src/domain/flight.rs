//! Flight record type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Dense city index in `[0, m)`.
pub type CityId = usize;

/// Dense flight identifier in `[0, n)`.
pub type FlightNo = usize;

/// Opaque non-negative time value. No unit or time zone is implied.
pub type Time = u64;

/// Opaque non-negative fare. No currency is implied.
pub type Fare = u64;

/// A single scheduled direct flight between two cities.
///
/// Flights are plain data. The only invariant checked is that a flight
/// does not arrive before it departs, see [`Flight::validate`].
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Flight;
///
/// let flight = Flight::new(0, 0, 10, 1, 70, 120);
/// assert!(flight.validate().is_ok());
/// assert_eq!(flight.to_string(), "Flight(0, 0, 10, 1, 70, 120)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flight {
    /// Unique flight identifier
    pub flight_no: FlightNo,
    /// City the flight departs from
    pub start_city: CityId,
    /// Departure time
    pub departure_time: Time,
    /// City the flight lands in
    pub end_city: CityId,
    /// Arrival time
    pub arrival_time: Time,
    /// Cost of taking this flight
    pub fare: Fare,
}

impl Flight {
    /// Creates a new flight record.
    pub fn new(
        flight_no: FlightNo,
        start_city: CityId,
        departure_time: Time,
        end_city: CityId,
        arrival_time: Time,
        fare: Fare,
    ) -> Self {
        Self {
            flight_no,
            start_city,
            departure_time,
            end_city,
            arrival_time,
            fare,
        }
    }

    /// Checks that the flight does not arrive before it departs.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.arrival_time < self.departure_time {
            return Err(DomainError::InvalidFlight {
                flight_no: self.flight_no,
                reason: "arrival time is before departure time",
            });
        }
        Ok(())
    }

    /// Earliest time a connecting flight may depart after this one lands.
    pub fn earliest_connection(&self, min_layover: Time) -> Time {
        self.arrival_time.saturating_add(min_layover)
    }

    /// Returns true if `next` can follow this flight in an itinerary.
    ///
    /// The next flight must leave from the city this one lands in, and no
    /// earlier than `min_layover` after landing.
    pub fn connects_to(&self, next: &Flight, min_layover: Time) -> bool {
        self.end_city == next.start_city
            && next.departure_time >= self.earliest_connection(min_layover)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight({}, {}, {}, {}, {}, {})",
            self.flight_no,
            self.start_city,
            self.departure_time,
            self.end_city,
            self.arrival_time,
            self.fare
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_zero_duration() {
        let flight = Flight::new(3, 1, 50, 2, 50, 0);
        assert!(flight.validate().is_ok());
    }

    #[test]
    fn validate_rejects_arrival_before_departure() {
        let flight = Flight::new(7, 1, 50, 2, 40, 10);
        let err = flight.validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidFlight { flight_no: 7, .. }));
    }

    #[test]
    fn connects_requires_matching_city() {
        let first = Flight::new(0, 0, 0, 1, 10, 5);
        let wrong_city = Flight::new(1, 2, 100, 3, 110, 5);
        assert!(!first.connects_to(&wrong_city, 20));
    }

    #[test]
    fn connects_requires_layover() {
        let first = Flight::new(0, 0, 0, 1, 10, 5);
        let tight = Flight::new(1, 1, 29, 2, 40, 5);
        let exact = Flight::new(2, 1, 30, 2, 40, 5);

        assert!(!first.connects_to(&tight, 20));
        assert!(first.connects_to(&exact, 20));
        assert!(first.connects_to(&tight, 0));
    }

    #[test]
    fn earliest_connection_saturates() {
        let flight = Flight::new(0, 0, 0, 1, Time::MAX - 5, 5);
        assert_eq!(flight.earliest_connection(20), Time::MAX);
    }

    #[test]
    fn json_field_names() {
        let flight = Flight::new(1, 2, 3, 4, 5, 6);
        let json = serde_json::to_value(flight).unwrap();

        assert_eq!(json["flight_no"], 1);
        assert_eq!(json["start_city"], 2);
        assert_eq!(json["departure_time"], 3);
        assert_eq!(json["end_city"], 4);
        assert_eq!(json["arrival_time"], 5);
        assert_eq!(json["fare"], 6);
    }
}
