//! Flights API endpoints
//!
//! Handlers return the service envelope as-is; its `responseCode` becomes
//! the HTTP status.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::models::{
    flight::{Flight, FlightRequest},
    response::{ApiResponse, FlightListResponse, FlightResponse},
};

/// List all flights
#[utoipa::path(
    get,
    path = "/flights",
    tag = "flights",
    responses(
        (status = 200, description = "Flight list", body = FlightListResponse),
        (status = 500, description = "Database failure", body = FlightListResponse)
    )
)]
pub async fn list_flights(State(state): State<crate::AppState>) -> ApiResponse<Vec<Flight>> {
    state.services.flights.list().await
}

/// Get flight by ID
#[utoipa::path(
    get,
    path = "/flights/{id}",
    tag = "flights",
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight details", body = FlightResponse),
        (status = 404, description = "Flight not found", body = FlightResponse),
        (status = 500, description = "Database failure", body = FlightResponse)
    )
)]
pub async fn get_flight(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> ApiResponse<Flight> {
    state.services.flights.get_by_id(id).await
}

/// Create a flight
#[utoipa::path(
    post,
    path = "/flights",
    tag = "flights",
    request_body = FlightRequest,
    responses(
        (status = 201, description = "Flight created", body = FlightResponse),
        (status = 500, description = "Database failure", body = FlightResponse)
    )
)]
pub async fn create_flight(
    State(state): State<crate::AppState>,
    Json(data): Json<FlightRequest>,
) -> ApiResponse<Flight> {
    state.services.flights.create(&data).await
}

/// Replace every field of a flight
#[utoipa::path(
    put,
    path = "/flights/{id}",
    tag = "flights",
    params(("id" = i32, Path, description = "Flight ID")),
    request_body = FlightRequest,
    responses(
        (status = 200, description = "Flight updated", body = FlightResponse),
        (status = 404, description = "Flight not found", body = FlightResponse),
        (status = 500, description = "Database failure", body = FlightResponse)
    )
)]
pub async fn update_flight(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<FlightRequest>,
) -> ApiResponse<Flight> {
    state.services.flights.update(id, &data).await
}

/// Delete a flight
#[utoipa::path(
    delete,
    path = "/flights/{id}",
    tag = "flights",
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight deleted, body holds its last state", body = FlightResponse),
        (status = 404, description = "Flight not found", body = FlightResponse),
        (status = 500, description = "Database failure", body = FlightResponse)
    )
)]
pub async fn delete_flight(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> ApiResponse<Flight> {
    state.services.flights.delete(id).await
}
