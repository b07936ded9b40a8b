//! API handlers for the flights REST endpoints

pub mod flights;
pub mod health;
pub mod openapi;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let docs = state.config.server.docs;

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Flights
        .route(
            "/flights",
            get(flights::list_flights).post(flights::create_flight),
        )
        .route(
            "/flights/:id",
            get(flights::get_flight)
                .put(flights::update_flight)
                .delete(flights::delete_flight),
        )
        .with_state(state);

    let mut app = Router::new().nest("/api/v1", api_v1);

    if docs {
        app = app.merge(openapi::create_openapi_router());
    }

    app.layer(TraceLayer::new_for_http()).layer(cors)
}
