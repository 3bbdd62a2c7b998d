//! Route planner over a fixed flight schedule.
//!
//! This module implements the search engine that answers: "given these
//! flights, what is the best way from city A to city B within a time
//! window?"
//!
//! Search nodes are individual flights. Breadth-first search finds the
//! fewest-flights route; label-setting searches over a comparator-driven
//! heap find the cheapest and fewest-flights-cheapest routes.

mod config;
mod graph;
mod path;
mod search;


pub use config::{MAX_CITIES, MIN_LAYOVER, SearchConfig};
pub use graph::{FlightGraph, FlightIdx};
pub use search::{Objective, Planner, RouteStatus, SearchError, SearchRequest, SearchResult};
