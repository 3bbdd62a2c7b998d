//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::Planner;

/// Shared application state.
///
/// The planner is immutable once built, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// Route planner over the loaded schedule
    pub planner: Arc<Planner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}
