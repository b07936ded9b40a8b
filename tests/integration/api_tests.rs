//! API integration tests
//!
//! Each test builds the full router over its own in-memory SQLite database.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use flights_api::{
    api,
    config::AppConfig,
    models::flight::FlightRequest,
    repository::{self, flights::FlightStore, Repository},
    services::Services,
    AppState,
};

async fn test_repository() -> Repository {
    let mut config = AppConfig::default();
    config.database.url = "sqlite::memory:".to_string();

    let pool = repository::connect(&config.database)
        .await
        .expect("Failed to open in-memory database");
    Repository::new(pool)
}

async fn test_app() -> Router {
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(test_repository().await)),
    };
    api::create_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

fn acme_flight() -> Value {
    json!({
        "flightNumber": 100,
        "airlineName": "Acme",
        "departureAirportCode": "JFK",
        "destinationAirportCode": "LAX",
        "departureDateTime": "2025-01-01T10:00:00Z",
        "arrivalDateTime": "2025-01-01T13:00:00Z",
        "passengerCapacity": 180
    })
}

fn globex_flight() -> Value {
    json!({
        "flightNumber": 2040,
        "airlineName": "Globex",
        "departureAirportCode": "CDG",
        "destinationAirportCode": "NRT",
        "departureDateTime": "2025-03-15T22:45:00Z",
        "arrivalDateTime": "2025-03-16T17:10:00Z",
        "passengerCapacity": 320
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_create_get_delete_scenario() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::POST, "/api/v1/flights", Some(acme_flight())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["requestFailed"], false);
    assert_eq!(body["responseCode"], "201");
    assert_eq!(body["data"]["id"], 1);
    for (key, value) in acme_flight().as_object().unwrap() {
        assert_eq!(&body["data"][key], value, "field {}", key);
    }
    let created = body["data"].clone();

    let (status, body) = send(&app, Method::GET, "/api/v1/flights/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseCode"], "200");
    assert_eq!(body["data"], created);

    let (status, body) = send(&app, Method::DELETE, "/api/v1/flights/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requestFailed"], false);
    assert_eq!(body["data"], created);

    let (status, body) = send(&app, Method::GET, "/api/v1/flights/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["requestFailed"], true);
    assert_eq!(body["responseCode"], "404");
    assert_eq!(body["errorMessage"], "Flight with id: 1 was not found.");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_created_flights_get_distinct_ids() {
    let app = test_app().await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let (_, body) = send(&app, Method::POST, "/api/v1/flights", Some(acme_flight())).await;
        ids.push(body["data"]["id"].as_i64().expect("No flight ID"));
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    // Identities are not reused after a delete
    send(&app, Method::DELETE, &format!("/api/v1/flights/{}", ids[2]), None).await;
    let (_, body) = send(&app, Method::POST, "/api/v1/flights", Some(acme_flight())).await;
    let new_id = body["data"]["id"].as_i64().expect("No flight ID");
    assert!(!ids.contains(&new_id));
}

#[tokio::test]
async fn test_list_flights() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/flights", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    send(&app, Method::POST, "/api/v1/flights", Some(acme_flight())).await;
    send(&app, Method::POST, "/api/v1/flights", Some(globex_flight())).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/flights", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseCode"], "200");
    let flights = body["data"].as_array().expect("data is not an array");
    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0]["airlineName"], "Acme");
    assert_eq!(flights[1]["airlineName"], "Globex");
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let app = test_app().await;

    let (_, body) = send(&app, Method::POST, "/api/v1/flights", Some(acme_flight())).await;
    let id = body["data"]["id"].as_i64().expect("No flight ID");
    let uri = format!("/api/v1/flights/{}", id);

    let (status, body) = send(&app, Method::PUT, &uri, Some(globex_flight())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["responseCode"], "200");
    assert_eq!(body["data"]["id"], id);

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(body["data"]["id"], id);
    for (key, value) in globex_flight().as_object().unwrap() {
        assert_eq!(&body["data"][key], value, "field {}", key);
    }
}

#[tokio::test]
async fn test_missing_flight_yields_404_envelopes() {
    let app = test_app().await;

    let cases = [
        (Method::GET, None),
        (Method::PUT, Some(acme_flight())),
        (Method::DELETE, None),
    ];

    for (method, body) in cases {
        let (status, body) = send(&app, method.clone(), "/api/v1/flights/42", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", method);
        assert_eq!(body["requestFailed"], true);
        assert_eq!(body["responseCode"], "404");
        assert!(body.get("data").is_none());
    }
}

#[tokio::test]
async fn test_malformed_requests_are_rejected() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/flights",
        Some(json!({ "flightNumber": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::GET, "/api/v1/flights/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/flights/{id}"].is_object());
}

#[tokio::test]
async fn test_repository_save_and_remove_report_missing_rows() {
    let repository = test_repository().await;
    let store = &repository.flights;

    let data: FlightRequest = serde_json::from_value(acme_flight()).unwrap();
    let mut flight = store.add(&data).await.unwrap();
    assert_eq!(store.find(flight.id).await.unwrap(), Some(flight.clone()));

    flight.passenger_capacity = 150;
    store.save(&flight).await.unwrap();
    assert_eq!(
        store.find(flight.id).await.unwrap().map(|f| f.passenger_capacity),
        Some(150)
    );

    store.remove(flight.id).await.unwrap();
    assert!(store.find(flight.id).await.unwrap().is_none());
    assert!(store.save(&flight).await.is_err());
    assert!(store.remove(flight.id).await.is_err());
    assert!(store.list().await.unwrap().is_empty());
}
