//! Uniform response envelope returned by every flight operation

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::flight::Flight;

/// Outcome of a service operation, independent of the transport status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(FlightResponse = ApiResponse<Flight>, FlightListResponse = ApiResponse<Vec<Flight>>)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub request_failed: bool,
    /// "200", "201", "404" or "500"
    pub response_code: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self::success("200", data)
    }

    pub fn created(data: T) -> Self {
        Self::success("201", data)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure("404", message)
    }

    pub fn fault(message: impl Into<String>) -> Self {
        Self::failure("500", message)
    }

    fn success(code: &str, data: T) -> Self {
        Self {
            request_failed: false,
            response_code: code.to_string(),
            error_message: String::new(),
            data: Some(data),
        }
    }

    fn failure(code: &str, message: impl Into<String>) -> Self {
        Self {
            request_failed: true,
            response_code: code.to_string(),
            error_message: message.into(),
            data: None,
        }
    }

    /// Transport status matching the envelope code
    pub fn status(&self) -> StatusCode {
        self.response_code
            .parse::<u16>()
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
