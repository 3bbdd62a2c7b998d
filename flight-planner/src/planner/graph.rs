//! Flight graph: the flight collection plus a departures index by city.
//!
//! Search nodes are flights, not cities. Two flights are joined by an edge
//! when the second can legally follow the first; edges are never stored,
//! they are derived on demand from the departures index.

use crate::domain::{CityId, DomainError, Flight, Time};

/// Index into the flight collection; the node identifier used by searches.
pub type FlightIdx = usize;

/// Immutable flight collection with a per-city departures index.
///
/// `departures[c]` lists the indices of flights leaving city `c` in their
/// original order. The index covers every city up to the largest id seen,
/// so its length is `max_city + 1` (one for an empty collection).
#[derive(Debug, Clone)]
pub struct FlightGraph {
    flights: Vec<Flight>,
    departures: Vec<Vec<FlightIdx>>,
}

impl FlightGraph {
    /// Build the departures index in a single pass over `flights`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a flight names a city id at or above `max_cities`.
    pub fn build(flights: Vec<Flight>, max_cities: usize) -> Result<Self, DomainError> {
        let mut city_count = 1;
        for flight in &flights {
            for city in [flight.start_city, flight.end_city] {
                if city >= max_cities {
                    return Err(DomainError::CityOutOfRange {
                        flight_no: flight.flight_no,
                        city,
                        max_cities,
                    });
                }
                // city < max_cities, so this cannot overflow
                city_count = city_count.max(city + 1);
            }
        }

        let mut departures = vec![Vec::new(); city_count];
        for (idx, flight) in flights.iter().enumerate() {
            departures[flight.start_city].push(idx);
        }

        Ok(Self { flights, departures })
    }

    /// Returns the flight at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range. Indices handed out by the graph are
    /// always in range.
    pub fn flight(&self, idx: FlightIdx) -> &Flight {
        &self.flights[idx]
    }

    /// All flights, in index order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Number of flights (search nodes).
    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    /// Number of cities covered by the departures index.
    pub fn city_count(&self) -> usize {
        self.departures.len()
    }

    /// Returns true if `city` is covered by the departures index.
    pub fn contains_city(&self, city: CityId) -> bool {
        city < self.departures.len()
    }

    /// Indices of flights leaving `city`, in index order.
    ///
    /// Unknown cities have no departures.
    pub fn departures_from(&self, city: CityId) -> &[FlightIdx] {
        self.departures
            .get(city)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Flights that may open an itinerary from `start_city`: departing no
    /// earlier than `earliest` and arriving no later than `latest`.
    pub fn first_legs(
        &self,
        start_city: CityId,
        earliest: Time,
        latest: Time,
    ) -> impl Iterator<Item = FlightIdx> + '_ {
        self.departures_from(start_city)
            .iter()
            .copied()
            .filter(move |&idx| {
                let flight = &self.flights[idx];
                flight.departure_time >= earliest && flight.arrival_time <= latest
            })
    }

    /// Flights that may legally follow flight `from`.
    ///
    /// A connection leaves from the city `from` lands in, departs at least
    /// `min_layover` after it lands, and arrives no later than `latest`.
    pub fn connections(
        &self,
        from: FlightIdx,
        latest: Time,
        min_layover: Time,
    ) -> impl Iterator<Item = FlightIdx> + '_ {
        let incoming = self.flights[from];
        self.departures_from(incoming.end_city)
            .iter()
            .copied()
            .filter(move |&idx| {
                let next = &self.flights[idx];
                next.arrival_time <= latest && incoming.connects_to(next, min_layover)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::MAX_CITIES;

    fn sample() -> FlightGraph {
        let flights = vec![
            Flight::new(0, 0, 0, 1, 10, 5),
            Flight::new(1, 1, 40, 2, 60, 5),
            Flight::new(2, 0, 0, 2, 100, 20),
            Flight::new(3, 1, 25, 3, 35, 1),
            Flight::new(4, 1, 30, 0, 200, 1),
        ];
        FlightGraph::build(flights, MAX_CITIES).unwrap()
    }

    #[test]
    fn empty_collection_has_one_city() {
        let graph = FlightGraph::build(Vec::new(), MAX_CITIES).unwrap();
        assert_eq!(graph.city_count(), 1);
        assert_eq!(graph.flight_count(), 0);
        assert!(graph.departures_from(0).is_empty());
    }

    #[test]
    fn city_count_covers_destinations() {
        let graph = sample();
        assert_eq!(graph.city_count(), 4);
        assert!(graph.contains_city(3));
        assert!(!graph.contains_city(4));
        assert!(graph.departures_from(3).is_empty());
    }

    #[test]
    fn city_ids_must_be_below_bound() {
        let err = FlightGraph::build(vec![Flight::new(6, 0, 0, usize::MAX, 10, 1)], MAX_CITIES)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::CityOutOfRange {
                flight_no: 6,
                city: usize::MAX,
                max_cities: MAX_CITIES,
            }
        );

        let err = FlightGraph::build(vec![Flight::new(2, 4, 0, 1, 10, 1)], 4).unwrap_err();
        assert!(matches!(err, DomainError::CityOutOfRange { city: 4, .. }));

        let graph = FlightGraph::build(vec![Flight::new(2, 3, 0, 1, 10, 1)], 4).unwrap();
        assert_eq!(graph.city_count(), 4);
    }

    #[test]
    fn departures_keep_index_order() {
        let graph = sample();
        assert_eq!(graph.departures_from(0), &[0, 2]);
        assert_eq!(graph.departures_from(1), &[1, 3, 4]);
        assert!(graph.departures_from(2).is_empty());
        assert!(graph.departures_from(99).is_empty());
    }

    #[test]
    fn first_legs_respect_window() {
        let graph = sample();
        let legs: Vec<_> = graph.first_legs(0, 0, 100).collect();
        assert_eq!(legs, vec![0, 2]);

        let legs: Vec<_> = graph.first_legs(0, 0, 50).collect();
        assert_eq!(legs, vec![0]);

        let legs: Vec<_> = graph.first_legs(0, 1, 100).collect();
        assert!(legs.is_empty());
    }

    #[test]
    fn connections_apply_layover_and_deadline() {
        let graph = sample();

        // Flight 3 leaves 15 after flight 0 lands: too tight
        let next: Vec<_> = graph.connections(0, 100, 20).collect();
        assert_eq!(next, vec![1]);

        // Flight 4 lands after the deadline unless it is extended
        let next: Vec<_> = graph.connections(0, 200, 20).collect();
        assert_eq!(next, vec![1, 4]);

        let next: Vec<_> = graph.connections(0, 100, 0).collect();
        assert_eq!(next, vec![1, 3]);
    }

    #[test]
    fn connections_from_dead_end() {
        let graph = sample();
        assert_eq!(graph.connections(1, 1000, 20).count(), 0);
    }
}
