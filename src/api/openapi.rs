//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{flights, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Flights API",
        version = "1.0.0",
        description = "CRUD REST API for flight records"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Flights
        flights::list_flights,
        flights::get_flight,
        flights::create_flight,
        flights::update_flight,
        flights::delete_flight,
    ),
    components(
        schemas(
            crate::models::flight::Flight,
            crate::models::flight::FlightRequest,
            crate::models::response::FlightResponse,
            crate::models::response::FlightListResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "flights", description = "Flight management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
