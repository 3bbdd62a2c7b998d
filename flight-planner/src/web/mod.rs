//! Web layer for the flight route planner.
//!
//! Provides HTTP endpoints for inspecting the schedule and planning routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
