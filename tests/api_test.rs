//! HTTP façade tests
//!
//! These drive the router with a stub backend and verify that exactly the
//! published operations are reachable and that backend payloads pass through
//! unmodified.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::json;
use tokio::sync::Mutex;
use tower::ServiceExt;

use traindata::api::{create_router, AppState};
use traindata::service::TrainDataBackend;
use traindata::types::{Seat, SeatId, Train};
use traindata::{Error, Result};

fn sample_train() -> Train {
    let mut seats = HashMap::new();
    seats.insert(
        "1A".to_string(),
        Seat {
            coach: "A".to_string(),
            seat_number: "1".to_string(),
            booking_reference: String::new(),
        },
    );
    Train { seats }
}

/// Records every backend call so tests can assert on dispatch
#[derive(Default)]
struct StubBackend {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl TrainDataBackend for StubBackend {
    async fn data_for_train(&self, train_id: &str) -> Result<Train> {
        self.calls
            .lock()
            .await
            .push(format!("data_for_train:{train_id}"));
        if train_id == "ghost" {
            return Err(Error::TrainNotFound(train_id.to_string()));
        }
        Ok(sample_train())
    }

    async fn reserve(
        &self,
        train_id: &str,
        seats: &[SeatId],
        booking_reference: &str,
    ) -> Result<Train> {
        self.calls.lock().await.push(format!(
            "reserve:{train_id}:{}:{booking_reference}",
            seats.join("+")
        ));
        if booking_reference == "taken" {
            return Err(Error::SeatConflict {
                seat: seats[0].clone(),
                existing: "75bcd15".to_string(),
            });
        }
        Ok(sample_train())
    }

    async fn reset(&self, train_id: &str) -> Result<Train> {
        self.calls.lock().await.push(format!("reset:{train_id}"));
        Ok(sample_train())
    }
}

fn router_with_stub() -> (Router, Arc<StubBackend>) {
    let stub = Arc::new(StubBackend::default());
    let state = AppState::new(stub.clone());
    (create_router(state), stub)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn data_for_train_routes_to_backend() {
    let (app, stub) = router_with_stub();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/data_for_train/express_2000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value, serde_json::to_value(sample_train()).unwrap());
    assert_eq!(
        *stub.calls.lock().await,
        vec!["data_for_train:express_2000"]
    );
}

#[tokio::test]
async fn reserve_routes_with_parsed_body() {
    let (app, stub) = router_with_stub();

    let body = json!({
        "train_id": "express_2000",
        "seats": ["1A", "2A"],
        "booking_reference": "75bcd15"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reserve")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        *stub.calls.lock().await,
        vec!["reserve:express_2000:1A+2A:75bcd15"]
    );
}

#[tokio::test]
async fn reset_routes_to_backend() {
    let (app, stub) = router_with_stub();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reset/express_2000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(*stub.calls.lock().await, vec!["reset:express_2000"]);
}

#[tokio::test]
async fn unlisted_paths_never_reach_the_backend() {
    let (app, stub) = router_with_stub();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/secret_method")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(stub.calls.lock().await.is_empty());
}

#[tokio::test]
async fn missing_train_maps_to_not_found() {
    let (app, _stub) = router_with_stub();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/data_for_train/ghost")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seat_conflict_maps_to_conflict() {
    let (app, _stub) = router_with_stub();

    let body = json!({
        "train_id": "express_2000",
        "seats": ["1A"],
        "booking_reference": "taken"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reserve")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn health_reports_version() {
    let (app, _stub) = router_with_stub();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}
