//! Flights repository

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::flight::{Flight, FlightRequest},
};

/// Persistence operations the flight service relies on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FlightStore: Send + Sync {
    /// All flights, ordered by id
    async fn list(&self) -> AppResult<Vec<Flight>>;

    async fn find(&self, id: i32) -> AppResult<Option<Flight>>;

    /// Insert a new flight and return it with its generated id
    async fn add(&self, data: &FlightRequest) -> AppResult<Flight>;

    /// Write back every column of an existing flight
    async fn save(&self, flight: &Flight) -> AppResult<()>;

    async fn remove(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct FlightsRepository {
    pool: Pool<Sqlite>,
}

impl FlightsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlightStore for FlightsRepository {
    async fn list(&self) -> AppResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, Flight>("SELECT * FROM flights ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find(&self, id: i32) -> AppResult<Option<Flight>> {
        let row = sqlx::query_as::<_, Flight>("SELECT * FROM flights WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn add(&self, data: &FlightRequest) -> AppResult<Flight> {
        let row = sqlx::query_as::<_, Flight>(
            r#"
            INSERT INTO flights (
                flight_number, airline_name, departure_airport_code,
                destination_airport_code, departure_date_time, arrival_date_time,
                passenger_capacity
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.flight_number)
        .bind(&data.airline_name)
        .bind(&data.departure_airport_code)
        .bind(&data.destination_airport_code)
        .bind(data.departure_date_time)
        .bind(data.arrival_date_time)
        .bind(data.passenger_capacity)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn save(&self, flight: &Flight) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE flights SET
                flight_number = $1,
                airline_name = $2,
                departure_airport_code = $3,
                destination_airport_code = $4,
                departure_date_time = $5,
                arrival_date_time = $6,
                passenger_capacity = $7
            WHERE id = $8
            "#,
        )
        .bind(flight.flight_number)
        .bind(&flight.airline_name)
        .bind(&flight.departure_airport_code)
        .bind(&flight.destination_airport_code)
        .bind(flight.departure_date_time)
        .bind(flight.arrival_date_time)
        .bind(flight.passenger_capacity)
        .bind(flight.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Flight {} not found", flight.id)));
        }
        Ok(())
    }

    async fn remove(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Flight {} not found", id)));
        }
        Ok(())
    }
}
