//! Data models for the flights API

pub mod flight;
pub mod response;

// Re-export commonly used types
pub use flight::{Flight, FlightRequest};
pub use response::ApiResponse;
