//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::Time;
use crate::planner::{Objective, SearchError, SearchRequest};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/schedule", get(schedule_summary))
        .route("/route", get(plan_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Size of the loaded schedule.
async fn schedule_summary(State(state): State<AppState>) -> Json<ScheduleResponse> {
    let graph = state.planner.graph();
    Json(ScheduleResponse {
        flights: graph.flight_count(),
        cities: graph.city_count(),
    })
}

/// Plan a route between two cities.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>, AppError> {
    let objective = req
        .objective
        .as_deref()
        .map(str::parse::<Objective>)
        .transpose()?
        .unwrap_or_default();

    let request = SearchRequest::new(
        req.from,
        req.to,
        req.earliest.unwrap_or(0),
        req.latest.unwrap_or(Time::MAX),
        objective,
    );

    let result = state.planner.search(&request)?;
    Ok(Json(PlanRouteResponse::from_result(&result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRequest(message) => AppError::BadRequest { message },
            SearchError::UnknownCity { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Flight;
    use crate::planner::Planner;
    use axum::http::Uri;

    fn state() -> AppState {
        let planner = Planner::new(vec![
            Flight::new(0, 0, 0, 1, 10, 5),
            Flight::new(1, 1, 40, 2, 60, 5),
            Flight::new(2, 0, 0, 2, 100, 20),
        ])
        .unwrap();
        AppState::new(planner)
    }

    fn query(uri: &'static str) -> Query<PlanRouteRequest> {
        Query::try_from_uri(&Uri::from_static(uri)).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn schedule_counts() {
        let Json(summary) = schedule_summary(State(state())).await;
        assert_eq!(summary.flights, 3);
        assert_eq!(summary.cities, 3);
    }

    #[tokio::test]
    async fn default_objective_is_fewest_flights() {
        let Json(resp) = plan_route(State(state()), query("/route?from=0&to=2"))
            .await
            .unwrap();

        assert_eq!(resp.status, "found");
        assert_eq!(resp.hop_count, 1);
        assert_eq!(resp.connections, 0);
        assert_eq!(resp.flights[0].flight_no, 2);
    }

    #[tokio::test]
    async fn cheapest_objective() {
        let Json(resp) = plan_route(
            State(state()),
            query("/route?from=0&to=2&earliest=0&latest=100&objective=cheapest"),
        )
        .await
        .unwrap();

        assert_eq!(resp.status, "found");
        assert_eq!(resp.total_fare, 10);
        assert_eq!(resp.arrival_time, Some(60));
    }

    #[tokio::test]
    async fn no_route_within_window() {
        let Json(resp) = plan_route(
            State(state()),
            query("/route?from=0&to=2&latest=50&objective=fewest-flights-cheapest"),
        )
        .await
        .unwrap();

        assert_eq!(resp.status, "no_route");
        assert!(resp.flights.is_empty());
    }

    #[tokio::test]
    async fn same_city_status() {
        let Json(resp) = plan_route(State(state()), query("/route?from=1&to=1"))
            .await
            .unwrap();

        assert_eq!(resp.status, "same_city");
        assert_eq!(resp.flights_explored, 0);
    }

    #[tokio::test]
    async fn unknown_objective_is_bad_request() {
        let err = plan_route(State(state()), query("/route?from=0&to=2&objective=fastest"))
            .await
            .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_city_is_bad_request() {
        let err = plan_route(State(state()), query("/route?from=0&to=12"))
            .await
            .unwrap_err();

        let AppError::BadRequest { message } = &err;
        assert_eq!(message, "unknown city 12: known cities are 0..3");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }
}
