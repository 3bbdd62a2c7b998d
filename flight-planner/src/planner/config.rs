//! Search configuration for the route planner.

use crate::domain::Time;

/// Minimum ground time between the arrival of one flight and the departure
/// of the next.
pub const MIN_LAYOVER: Time = 20;

/// Default upper bound on city ids. The departures index holds one slot per
/// city, so ids at or beyond this are rejected when the planner is built.
pub const MAX_CITIES: usize = 1 << 20;

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Minimum ground time required for a connection.
    /// Connections tighter than this are rejected.
    pub min_layover: Time,

    /// Exclusive upper bound on the city ids a schedule may use.
    pub max_cities: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given layover and the default
    /// city bound.
    pub fn new(min_layover: Time) -> Self {
        Self {
            min_layover,
            max_cities: MAX_CITIES,
        }
    }

    /// Replace the city bound.
    pub fn with_max_cities(mut self, max_cities: usize) -> Self {
        self.max_cities = max_cities;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(MIN_LAYOVER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.min_layover, 20);
        assert_eq!(config.max_cities, MAX_CITIES);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(45).with_max_cities(8);
        assert_eq!(config.min_layover, 45);
        assert_eq!(config.max_cities, 8);
        assert_ne!(config, SearchConfig::default());
    }
}
