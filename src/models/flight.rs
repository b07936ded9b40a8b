//! Flight model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Flight record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: i32,
    pub flight_number: i32,
    pub airline_name: String,
    /// IATA code of the departure airport (not validated)
    pub departure_airport_code: String,
    /// IATA code of the destination airport (not validated)
    pub destination_airport_code: String,
    pub departure_date_time: DateTime<Utc>,
    pub arrival_date_time: DateTime<Utc>,
    pub passenger_capacity: i32,
}

/// Create / update flight request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightRequest {
    pub flight_number: i32,
    pub airline_name: String,
    pub departure_airport_code: String,
    pub destination_airport_code: String,
    pub departure_date_time: DateTime<Utc>,
    pub arrival_date_time: DateTime<Utc>,
    pub passenger_capacity: i32,
}

impl Flight {
    /// Overwrite every field from `data`, keeping the identity.
    pub fn apply(&mut self, data: &FlightRequest) {
        self.flight_number = data.flight_number;
        self.airline_name = data.airline_name.clone();
        self.departure_airport_code = data.departure_airport_code.clone();
        self.destination_airport_code = data.destination_airport_code.clone();
        self.departure_date_time = data.departure_date_time;
        self.arrival_date_time = data.arrival_date_time;
        self.passenger_capacity = data.passenger_capacity;
    }
}

impl From<&Flight> for FlightRequest {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_number: flight.flight_number,
            airline_name: flight.airline_name.clone(),
            departure_airport_code: flight.departure_airport_code.clone(),
            destination_airport_code: flight.destination_airport_code.clone(),
            departure_date_time: flight.departure_date_time,
            arrival_date_time: flight.arrival_date_time,
            passenger_capacity: flight.passenger_capacity,
        }
    }
}
