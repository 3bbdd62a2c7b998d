//! Route search algorithms.
//!
//! Every search runs over flight nodes: a flight is reachable from another
//! when it leaves the city the other lands in after the minimum layover.
//! Each query allocates its own visited/predecessor state, so a `Planner`
//! can be shared freely between callers.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::collections::{PriorityQueue, Queue};
use crate::domain::{CityId, DomainError, Fare, Flight, Itinerary, Time};

use super::config::SearchConfig;
use super::graph::{FlightGraph, FlightIdx};
use super::path::SearchState;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A query named a city the flight collection doesn't cover
    #[error("unknown city {city}: known cities are 0..{city_count}")]
    UnknownCity { city: CityId, city_count: usize },

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// What a search optimizes for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Objective {
    /// Fewest flights, then earliest arrival
    #[default]
    FewestFlightsEarliest,
    /// Lowest total fare
    Cheapest,
    /// Fewest flights, then lowest total fare
    FewestFlightsCheapest,
}

impl Objective {
    /// Returns the objective's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::FewestFlightsEarliest => "fewest-flights-earliest",
            Objective::Cheapest => "cheapest",
            Objective::FewestFlightsCheapest => "fewest-flights-cheapest",
        }
    }
}

impl FromStr for Objective {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fewest-flights-earliest" => Ok(Objective::FewestFlightsEarliest),
            "cheapest" => Ok(Objective::Cheapest),
            "fewest-flights-cheapest" => Ok(Objective::FewestFlightsCheapest),
            other => Err(SearchError::InvalidRequest(format!(
                "unknown objective: {other}"
            ))),
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// City the itinerary starts from.
    pub start_city: CityId,

    /// City the itinerary must reach.
    pub end_city: CityId,

    /// The first flight may not depart before this time.
    pub earliest_departure: Time,

    /// No flight may arrive after this time.
    pub latest_arrival: Time,

    /// What to optimize for.
    pub objective: Objective,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(
        start_city: CityId,
        end_city: CityId,
        earliest_departure: Time,
        latest_arrival: Time,
        objective: Objective,
    ) -> Self {
        Self {
            start_city,
            end_city,
            earliest_departure,
            latest_arrival,
            objective,
        }
    }
}

/// Why a search produced the itinerary it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteStatus {
    /// A qualifying itinerary was found
    Found,
    /// No itinerary satisfies the request
    NoRoute,
    /// Start and end are the same city; nothing to fly
    SameCity,
}

impl RouteStatus {
    /// Returns the status's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::Found => "found",
            RouteStatus::NoRoute => "no_route",
            RouteStatus::SameCity => "same_city",
        }
    }
}

/// Result of a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best itinerary; empty unless `status` is `Found`.
    pub itinerary: Itinerary,

    /// Distinguishes the two empty outcomes.
    pub status: RouteStatus,

    /// Number of flight nodes expanded during search.
    pub flights_explored: usize,
}

impl SearchResult {
    /// Result for a request whose start and end coincide.
    pub fn same_city() -> Self {
        Self {
            itinerary: Itinerary::empty(),
            status: RouteStatus::SameCity,
            flights_explored: 0,
        }
    }

    fn from_search(itinerary: Itinerary, flights_explored: usize) -> Self {
        let status = if itinerary.is_empty() {
            RouteStatus::NoRoute
        } else {
            RouteStatus::Found
        };
        Self {
            itinerary,
            status,
            flights_explored,
        }
    }
}

/// Breadth-first label: a flight reached after `hops` flights.
#[derive(Debug, Clone, Copy)]
struct HopLabel {
    flight: FlightIdx,
    hops: usize,
    arrival: Time,
}

impl HopLabel {
    /// Fewer hops wins; equal hops fall back to earlier arrival.
    fn improves_on(&self, other: &HopLabel) -> bool {
        self.hops < other.hops || (self.hops == other.hops && self.arrival < other.arrival)
    }
}

/// Cheapest-route label: cumulative fare to reach and take `flight`.
#[derive(Debug, Clone, Copy)]
struct CostLabel {
    cost: Fare,
    flight: FlightIdx,
}

fn cheaper(a: &CostLabel, b: &CostLabel) -> bool {
    a.cost < b.cost
}

/// Fewest-flights-cheapest label. `via` is the flight this entry was
/// relaxed from and becomes the predecessor when the entry settles.
#[derive(Debug, Clone, Copy)]
struct HopCostLabel {
    hops: usize,
    cost: Fare,
    flight: FlightIdx,
    via: Option<FlightIdx>,
}

fn fewer_hops_then_cheaper(a: &HopCostLabel, b: &HopCostLabel) -> bool {
    a.hops < b.hops || (a.hops == b.hops && a.cost < b.cost)
}

/// Route planner over an immutable flight collection.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::Flight;
/// use flight_planner::planner::Planner;
///
/// let planner = Planner::new(vec![
///     Flight::new(0, 0, 0, 1, 10, 5),
///     Flight::new(1, 1, 40, 2, 60, 5),
///     Flight::new(2, 0, 0, 2, 100, 20),
/// ])
/// .unwrap();
///
/// let cheapest = planner.cheapest_route(0, 2, 0, 100).unwrap();
/// assert_eq!(cheapest.total_fare(), 10);
///
/// let fewest = planner.least_flights_earliest_route(0, 2, 0, 100).unwrap();
/// assert_eq!(fewest.hop_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    graph: FlightGraph,
    config: SearchConfig,
}

impl Planner {
    /// Create a planner with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any flight arrives before it departs or names a
    /// city id at or above [`MAX_CITIES`](super::MAX_CITIES).
    pub fn new(flights: Vec<Flight>) -> Result<Self, DomainError> {
        Self::with_config(flights, SearchConfig::default())
    }

    /// Create a planner with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any flight arrives before it departs or names a
    /// city id at or above `config.max_cities`.
    pub fn with_config(flights: Vec<Flight>, config: SearchConfig) -> Result<Self, DomainError> {
        for flight in &flights {
            flight.validate()?;
        }

        let graph = FlightGraph::build(flights, config.max_cities)?;
        debug!(
            flights = graph.flight_count(),
            cities = graph.city_count(),
            min_layover = config.min_layover,
            "Built flight graph"
        );

        Ok(Self { graph, config })
    }

    /// The flight graph the planner searches.
    pub fn graph(&self) -> &FlightGraph {
        &self.graph
    }

    /// The planner's configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Fewest flights, ties broken by earliest arrival.
    ///
    /// Returns an empty itinerary if no route exists or `start_city ==
    /// end_city`.
    pub fn least_flights_earliest_route(
        &self,
        start_city: CityId,
        end_city: CityId,
        t1: Time,
        t2: Time,
    ) -> Result<Itinerary, SearchError> {
        let request =
            SearchRequest::new(start_city, end_city, t1, t2, Objective::FewestFlightsEarliest);
        self.search(&request).map(|result| result.itinerary)
    }

    /// Lowest total fare.
    ///
    /// Returns an empty itinerary if no route exists or `start_city ==
    /// end_city`.
    pub fn cheapest_route(
        &self,
        start_city: CityId,
        end_city: CityId,
        t1: Time,
        t2: Time,
    ) -> Result<Itinerary, SearchError> {
        let request = SearchRequest::new(start_city, end_city, t1, t2, Objective::Cheapest);
        self.search(&request).map(|result| result.itinerary)
    }

    /// Fewest flights, ties broken by lowest total fare.
    ///
    /// Returns an empty itinerary if no route exists or `start_city ==
    /// end_city`.
    pub fn least_flights_cheapest_route(
        &self,
        start_city: CityId,
        end_city: CityId,
        t1: Time,
        t2: Time,
    ) -> Result<Itinerary, SearchError> {
        let request =
            SearchRequest::new(start_city, end_city, t1, t2, Objective::FewestFlightsCheapest);
        self.search(&request).map(|result| result.itinerary)
    }

    /// Run the search selected by `request.objective`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either city is outside the flight collection. A
    /// same-city request short-circuits before that check.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        if request.start_city == request.end_city {
            return Ok(SearchResult::same_city());
        }
        self.check_city(request.start_city)?;
        self.check_city(request.end_city)?;

        let (itinerary, flights_explored) = match request.objective {
            Objective::FewestFlightsEarliest => self.fewest_flights_earliest(request),
            Objective::Cheapest => self.cheapest(request),
            Objective::FewestFlightsCheapest => self.fewest_flights_cheapest(request),
        };

        debug!(
            objective = %request.objective,
            start = request.start_city,
            end = request.end_city,
            hops = itinerary.hop_count(),
            flights_explored,
            "Search complete"
        );

        Ok(SearchResult::from_search(itinerary, flights_explored))
    }

    fn check_city(&self, city: CityId) -> Result<(), SearchError> {
        if self.graph.contains_city(city) {
            Ok(())
        } else {
            Err(SearchError::UnknownCity {
                city,
                city_count: self.graph.city_count(),
            })
        }
    }

    /// Breadth-first search over flights.
    ///
    /// A flight is marked visited the first time it is enqueued, so only
    /// the first path found to each flight is ever extended. Hop counts are
    /// minimal; arrival-time ties are settled among whichever terminal
    /// flights the traversal reaches.
    fn fewest_flights_earliest(&self, request: &SearchRequest) -> (Itinerary, usize) {
        let graph = &self.graph;
        let mut state = SearchState::new(graph.flight_count());
        let mut queue = Queue::new();

        for idx in graph.first_legs(
            request.start_city,
            request.earliest_departure,
            request.latest_arrival,
        ) {
            state.mark_visited(idx);
            queue.enqueue(HopLabel {
                flight: idx,
                hops: 1,
                arrival: graph.flight(idx).arrival_time,
            });
        }

        let mut best: Option<HopLabel> = None;
        let mut explored = 0;

        while let Some(label) = queue.dequeue() {
            explored += 1;

            if graph.flight(label.flight).end_city == request.end_city
                && best.is_none_or(|b| label.improves_on(&b))
            {
                best = Some(label);
            }

            trace!(
                flight = label.flight,
                hops = label.hops,
                queued = queue.len(),
                "BFS expanding flight"
            );

            for next in graph.connections(
                label.flight,
                request.latest_arrival,
                self.config.min_layover,
            ) {
                if state.is_visited(next) {
                    continue;
                }
                state.mark_visited(next);
                state.set_predecessor(next, Some(label.flight));
                queue.enqueue(HopLabel {
                    flight: next,
                    hops: label.hops + 1,
                    arrival: graph.flight(next).arrival_time,
                });
            }
        }

        let terminal = best.map(|b| b.flight);
        (state.reconstruct(graph, terminal), explored)
    }

    /// Dijkstra over flights keyed by cumulative fare.
    ///
    /// An entry is only inserted when it strictly improves the best known
    /// cost for its flight; superseded entries are skipped on extraction.
    fn cheapest(&self, request: &SearchRequest) -> (Itinerary, usize) {
        let graph = &self.graph;
        let mut state = SearchState::new(graph.flight_count());
        let mut best_cost: Vec<Option<Fare>> = vec![None; graph.flight_count()];
        let mut heap = PriorityQueue::new(cheaper);

        for idx in graph.first_legs(
            request.start_city,
            request.earliest_departure,
            request.latest_arrival,
        ) {
            let fare = graph.flight(idx).fare;
            heap.insert(CostLabel { cost: fare, flight: idx });
            best_cost[idx] = Some(fare);
        }

        let mut best: Option<CostLabel> = None;
        let mut explored = 0;

        while let Ok(label) = heap.extract_min() {
            if state.is_visited(label.flight) {
                continue;
            }
            state.mark_visited(label.flight);
            explored += 1;

            if graph.flight(label.flight).end_city == request.end_city
                && best.is_none_or(|b| label.cost < b.cost)
            {
                best = Some(label);
            }

            trace!(
                flight = label.flight,
                cost = label.cost,
                queued = heap.len(),
                "Settled flight"
            );

            for next in graph.connections(
                label.flight,
                request.latest_arrival,
                self.config.min_layover,
            ) {
                let new_cost = label.cost.saturating_add(graph.flight(next).fare);
                if best_cost[next].is_none_or(|known| new_cost < known) {
                    best_cost[next] = Some(new_cost);
                    state.set_predecessor(next, Some(label.flight));
                    heap.insert(CostLabel {
                        cost: new_cost,
                        flight: next,
                    });
                }
            }
        }

        let terminal = best.map(|b| b.flight);
        (state.reconstruct(graph, terminal), explored)
    }

    /// Dijkstra over flights keyed by `(hops, cost)`.
    ///
    /// Every legal connection out of a settled flight is inserted without
    /// comparing against earlier entries for the same target; the visited
    /// check on extraction discards all but the best.
    fn fewest_flights_cheapest(&self, request: &SearchRequest) -> (Itinerary, usize) {
        let graph = &self.graph;
        let mut state = SearchState::new(graph.flight_count());
        let seeds = graph
            .first_legs(
                request.start_city,
                request.earliest_departure,
                request.latest_arrival,
            )
            .map(|idx| HopCostLabel {
                hops: 1,
                cost: graph.flight(idx).fare,
                flight: idx,
                via: None,
            });
        let mut heap = PriorityQueue::from_iter_with(fewer_hops_then_cheaper, seeds);

        let mut best: Option<HopCostLabel> = None;
        let mut explored = 0;

        while let Ok(label) = heap.extract_min() {
            if state.is_visited(label.flight) {
                continue;
            }
            state.mark_visited(label.flight);
            state.set_predecessor(label.flight, label.via);
            explored += 1;

            if graph.flight(label.flight).end_city == request.end_city
                && best.is_none_or(|b| fewer_hops_then_cheaper(&label, &b))
            {
                best = Some(label);
            }

            trace!(
                flight = label.flight,
                hops = label.hops,
                cost = label.cost,
                queued = heap.len(),
                "Settled flight"
            );

            for next in graph.connections(
                label.flight,
                request.latest_arrival,
                self.config.min_layover,
            ) {
                if state.is_visited(next) {
                    continue;
                }
                heap.insert(HopCostLabel {
                    hops: label.hops + 1,
                    cost: label.cost.saturating_add(graph.flight(next).fare),
                    flight: next,
                    via: Some(label.flight),
                });
            }
        }

        let terminal = best.map(|b| b.flight);
        (state.reconstruct(graph, terminal), explored)
    }
}
