//! Itinerary types.
//!
//! An `Itinerary` is an ordered chain of flights from an origin city to a
//! destination city. An empty itinerary means no route was produced.

use super::{CityId, DomainError, Fare, Flight, Time};

/// An ordered, legally connected sequence of flights.
///
/// # Invariants
///
/// - Consecutive flights connect: the next flight leaves from the city the
///   previous one lands in.
/// - Consecutive flights respect the minimum layover the itinerary was
///   built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    flights: Vec<Flight>,
}

impl Itinerary {
    /// Constructs an itinerary, checking that every pair of consecutive
    /// flights connects with at least `min_layover` of ground time.
    ///
    /// An empty list of flights is accepted and yields an empty itinerary.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - A flight lands in a different city than the next one leaves from
    /// - The layover between two flights is shorter than `min_layover`
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{Flight, Itinerary};
    ///
    /// let first = Flight::new(0, 0, 0, 1, 10, 5);
    /// let second = Flight::new(1, 1, 40, 2, 60, 5);
    ///
    /// let itinerary = Itinerary::new(vec![first, second], 20).unwrap();
    /// assert_eq!(itinerary.hop_count(), 2);
    /// assert_eq!(itinerary.total_fare(), 10);
    ///
    /// // 5 units on the ground is not enough
    /// let rushed = Flight::new(2, 1, 15, 2, 60, 5);
    /// assert!(Itinerary::new(vec![first, rushed], 20).is_err());
    /// ```
    pub fn new(flights: Vec<Flight>, min_layover: Time) -> Result<Self, DomainError> {
        for window in flights.windows(2) {
            let (prev, next) = (&window[0], &window[1]);
            if prev.end_city != next.start_city {
                return Err(DomainError::FlightsNotConnected {
                    from: prev.flight_no,
                    to: next.flight_no,
                });
            }
            if next.departure_time < prev.earliest_connection(min_layover) {
                return Err(DomainError::LayoverTooShort {
                    from: prev.flight_no,
                    to: next.flight_no,
                    required: min_layover,
                });
            }
        }

        Ok(Self { flights })
    }

    /// Wraps flights the planner has already chained legally.
    pub(crate) fn from_chain(flights: Vec<Flight>) -> Self {
        Self { flights }
    }

    /// Creates an empty itinerary.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the flights in travel order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Returns true if the itinerary has no flights.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Number of flights taken.
    pub fn hop_count(&self) -> usize {
        self.flights.len()
    }

    /// Number of connections (flights minus one, zero when empty).
    pub fn connection_count(&self) -> usize {
        self.flights.len().saturating_sub(1)
    }

    /// Sum of the fares of every flight.
    ///
    /// Saturates at `Fare::MAX`, matching how searches accumulate cost.
    pub fn total_fare(&self) -> Fare {
        self.flights
            .iter()
            .fold(0, |total: Fare, f| total.saturating_add(f.fare))
    }

    /// City the itinerary starts from.
    pub fn origin(&self) -> Option<CityId> {
        self.flights.first().map(|f| f.start_city)
    }

    /// City the itinerary ends in.
    pub fn destination(&self) -> Option<CityId> {
        self.flights.last().map(|f| f.end_city)
    }

    /// Departure time of the first flight.
    pub fn departure_time(&self) -> Option<Time> {
        self.flights.first().map(|f| f.departure_time)
    }

    /// Arrival time of the last flight.
    pub fn arrival_time(&self) -> Option<Time> {
        self.flights.last().map(|f| f.arrival_time)
    }

    /// Iterates over the flights in travel order.
    pub fn iter(&self) -> std::slice::Iter<'_, Flight> {
        self.flights.iter()
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a Flight;
    type IntoIter = std::slice::Iter<'a, Flight>;

    fn into_iter(self) -> Self::IntoIter {
        self.flights.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip_flights() -> (Flight, Flight, Flight) {
        (
            Flight::new(0, 0, 0, 1, 10, 5),
            Flight::new(1, 1, 40, 2, 60, 5),
            Flight::new(2, 0, 0, 2, 100, 20),
        )
    }

    #[test]
    fn empty_itinerary() {
        let itinerary = Itinerary::new(Vec::new(), 20).unwrap();

        assert!(itinerary.is_empty());
        assert_eq!(itinerary, Itinerary::empty());
        assert_eq!(itinerary.hop_count(), 0);
        assert_eq!(itinerary.connection_count(), 0);
        assert_eq!(itinerary.total_fare(), 0);
        assert_eq!(itinerary.origin(), None);
        assert_eq!(itinerary.arrival_time(), None);
    }

    #[test]
    fn direct_itinerary() {
        let (_, _, direct) = round_trip_flights();
        let itinerary = Itinerary::new(vec![direct], 20).unwrap();

        assert_eq!(itinerary.hop_count(), 1);
        assert_eq!(itinerary.connection_count(), 0);
        assert_eq!(itinerary.origin(), Some(0));
        assert_eq!(itinerary.destination(), Some(2));
        assert_eq!(itinerary.departure_time(), Some(0));
        assert_eq!(itinerary.arrival_time(), Some(100));
        assert_eq!(itinerary.total_fare(), 20);
    }

    #[test]
    fn connecting_itinerary() {
        let (first, second, _) = round_trip_flights();
        let itinerary = Itinerary::new(vec![first, second], 20).unwrap();

        assert_eq!(itinerary.connection_count(), 1);
        assert_eq!(itinerary.origin(), Some(0));
        assert_eq!(itinerary.destination(), Some(2));
        assert_eq!(itinerary.arrival_time(), Some(60));
        assert_eq!(itinerary.total_fare(), 10);

        let numbers: Vec<_> = itinerary.iter().map(|f| f.flight_no).collect();
        assert_eq!(numbers, vec![0, 1]);
    }

    #[test]
    fn rejects_disconnected_flights() {
        let (first, _, direct) = round_trip_flights();
        let err = Itinerary::new(vec![first, direct], 20).unwrap_err();

        assert!(matches!(
            err,
            DomainError::FlightsNotConnected { from: 0, to: 2 }
        ));
    }

    #[test]
    fn rejects_short_layover() {
        let (first, _, _) = round_trip_flights();
        let rushed = Flight::new(5, 1, 29, 2, 60, 5);
        let err = Itinerary::new(vec![first, rushed], 20).unwrap_err();

        assert!(matches!(
            err,
            DomainError::LayoverTooShort {
                from: 0,
                to: 5,
                required: 20
            }
        ));
    }

    #[test]
    fn total_fare_saturates() {
        let first = Flight::new(0, 0, 0, 1, 10, Fare::MAX - 1);
        let second = Flight::new(1, 1, 40, 2, 60, 5);
        let itinerary = Itinerary::new(vec![first, second], 20).unwrap();

        assert_eq!(itinerary.total_fare(), Fare::MAX);
    }
}
