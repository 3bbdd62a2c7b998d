use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use flight_planner::planner::{Planner, SearchConfig};
use flight_planner::schedule::load_flights;
use flight_planner::web::{AppState, create_router};

/// Address to listen on when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Schedule location is required
    let flights_path = std::env::var("FLIGHTS_PATH")
        .map(PathBuf::from)
        .expect("FLIGHTS_PATH must point to a JSON flight schedule");

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("BIND_ADDR must be a socket address such as 127.0.0.1:3000");

    let mut search_config = SearchConfig::default();
    if let Ok(raw) = std::env::var("MIN_LAYOVER") {
        match raw.parse() {
            Ok(min_layover) => search_config.min_layover = min_layover,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid MIN_LAYOVER"),
        }
    }
    if let Ok(raw) = std::env::var("MAX_CITIES") {
        match raw.parse() {
            Ok(max_cities) => search_config.max_cities = max_cities,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid MAX_CITIES"),
        }
    }

    // Load the schedule and build the planner (fail fast if unusable)
    let flights = load_flights(&flights_path).expect("Failed to load flight schedule");
    let planner = Planner::with_config(flights, search_config).expect("Invalid flight schedule");
    info!(
        flights = planner.graph().flight_count(),
        cities = planner.graph().city_count(),
        min_layover = planner.config().min_layover,
        "Planner ready"
    );

    let app = create_router(AppState::new(planner));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    info!("Flight planner listening on http://{addr}");
    info!("  GET /health    - Health check");
    info!("  GET /schedule  - Loaded schedule size");
    info!("  GET /route     - Plan a route (from, to, earliest, latest, objective)");

    axum::serve(listener, app).await.expect("Server error");
}
