//! Per-search bookkeeping and itinerary reconstruction.

use crate::domain::Itinerary;

use super::graph::{FlightGraph, FlightIdx};

/// Visited flags and predecessor links for one search.
///
/// Sized to the flight collection and dropped when the search returns.
#[derive(Debug)]
pub(crate) struct SearchState {
    visited: Vec<bool>,
    predecessor: Vec<Option<FlightIdx>>,
}

impl SearchState {
    pub(crate) fn new(flight_count: usize) -> Self {
        Self {
            visited: vec![false; flight_count],
            predecessor: vec![None; flight_count],
        }
    }

    pub(crate) fn is_visited(&self, idx: FlightIdx) -> bool {
        self.visited[idx]
    }

    pub(crate) fn mark_visited(&mut self, idx: FlightIdx) {
        self.visited[idx] = true;
    }

    pub(crate) fn set_predecessor(&mut self, idx: FlightIdx, prev: Option<FlightIdx>) {
        self.predecessor[idx] = prev;
    }

    /// Walk predecessor links back from `terminal` and return the flights in
    /// travel order. No terminal means no route, which is an empty itinerary.
    pub(crate) fn reconstruct(
        &self,
        graph: &FlightGraph,
        terminal: Option<FlightIdx>,
    ) -> Itinerary {
        let mut path = Vec::new();
        let mut current = terminal;
        while let Some(idx) = current {
            path.push(*graph.flight(idx));
            current = self.predecessor[idx];
        }
        path.reverse();

        Itinerary::from_chain(path)
    }
}
