//! Flights service
//!
//! Every operation answers with an [`ApiResponse`]; repository errors are
//! absorbed here and never reach the HTTP layer as `Err`.

use std::sync::Arc;

use crate::{
    error::AppError,
    models::{
        flight::{Flight, FlightRequest},
        response::ApiResponse,
    },
    repository::flights::FlightStore,
};

#[derive(Clone)]
pub struct FlightsService {
    store: Arc<dyn FlightStore>,
}

fn not_found<T>(id: i32) -> ApiResponse<T> {
    ApiResponse::not_found(format!("Flight with id: {} was not found.", id))
}

fn fault<T>(action: &str, err: &AppError) -> ApiResponse<T> {
    tracing::error!("Flight store failure ({}): {}", action, err);
    ApiResponse::fault(format!("An error occurred {}: {}", action, err))
}

impl FlightsService {
    pub fn new(store: Arc<dyn FlightStore>) -> Self {
        Self { store }
    }

    /// List all flights
    pub async fn list(&self) -> ApiResponse<Vec<Flight>> {
        match self.store.list().await {
            Ok(flights) => ApiResponse::ok(flights),
            Err(e) => fault("retrieving the flights from the database", &e),
        }
    }

    /// Get flight by ID
    pub async fn get_by_id(&self, id: i32) -> ApiResponse<Flight> {
        match self.lookup(id).await {
            Ok(flight) => ApiResponse::ok(flight),
            Err(response) => response,
        }
    }

    /// Create a flight
    pub async fn create(&self, data: &FlightRequest) -> ApiResponse<Flight> {
        match self.store.add(data).await {
            Ok(flight) => {
                tracing::info!("Created flight {} ({})", flight.id, flight.flight_number);
                ApiResponse::created(flight)
            }
            Err(e) => fault("saving the flight on the database", &e),
        }
    }

    /// Overwrite every field of an existing flight
    pub async fn update(&self, id: i32, data: &FlightRequest) -> ApiResponse<Flight> {
        let mut flight = match self.lookup(id).await {
            Ok(flight) => flight,
            Err(response) => return response,
        };

        flight.apply(data);

        match self.store.save(&flight).await {
            Ok(()) => {
                tracing::info!("Updated flight {}", id);
                ApiResponse::ok(flight)
            }
            // Deleted between lookup and save
            Err(AppError::NotFound(_)) => not_found(id),
            Err(e) => fault("updating the flight on the database", &e),
        }
    }

    /// Delete a flight, answering with its last state
    pub async fn delete(&self, id: i32) -> ApiResponse<Flight> {
        let flight = match self.lookup(id).await {
            Ok(flight) => flight,
            Err(response) => return response,
        };

        match self.store.remove(id).await {
            Ok(()) => {
                tracing::info!("Deleted flight {}", id);
                ApiResponse::ok(flight)
            }
            Err(AppError::NotFound(_)) => not_found(id),
            Err(e) => fault("deleting the flight on the database", &e),
        }
    }

    async fn lookup(&self, id: i32) -> Result<Flight, ApiResponse<Flight>> {
        match self.store.find(id).await {
            Ok(Some(flight)) => Ok(flight),
            Ok(None) => Err(not_found(id)),
            Err(e) => Err(fault("retrieving the flight from the database", &e)),
        }
    }
}
