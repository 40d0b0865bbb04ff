use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tower::ServiceExt;

use tow_fleet_backend::config::environment::EnvironmentConfig;
use tow_fleet_backend::repositories::VehicleRegistry;
use tow_fleet_backend::{create_app, AppState};

// Función helper para crear la app de test con una semilla fija
fn create_test_app() -> Router {
    let registry = VehicleRegistry::seeded(StdRng::seed_from_u64(42));
    create_app(AppState::new(EnvironmentConfig::default(), registry))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["vehicles"], 20);
}

#[tokio::test]
async fn test_list_vehicles() {
    let app = create_test_app();
    let (status, body) = send(&app, get("/api/vehicles")).await;

    assert_eq!(status, StatusCode::OK);
    let vehicles = body.as_array().unwrap();
    assert_eq!(vehicles.len(), 20);
    assert_eq!(
        vehicles[0],
        json!({
            "id": "TOW-001",
            "status": "Active",
            "providerName": "QuickFix Towing",
            "driverName": "Mike",
            "lat": 40.7128,
            "lng": -74.006,
            "rating": 4.9
        })
    );

    // Sin mutaciones intermedias la lista es idéntica
    let (_, again) = send(&app, get("/api/vehicles")).await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn test_simulate_moves_vehicles() {
    let app = create_test_app();
    let (_, before) = send(&app, get("/api/vehicles")).await;
    let (status, after) = send(&app, post_empty("/api/vehicles/simulate")).await;

    assert_eq!(status, StatusCode::OK);
    let before = before.as_array().unwrap();
    let after = after.as_array().unwrap();
    assert_eq!(before.len(), after.len());

    for (old, new) in before.iter().zip(after) {
        assert_eq!(old["id"], new["id"]);
        let dlat = new["lat"].as_f64().unwrap() - old["lat"].as_f64().unwrap();
        let dlng = new["lng"].as_f64().unwrap() - old["lng"].as_f64().unwrap();
        assert!(dlat.abs() <= 0.005);
        assert!(dlng.abs() <= 0.005);
        assert!(["Active", "Busy", "Offline"].contains(&new["status"].as_str().unwrap()));
    }

    let (_, listed) = send(&app, get("/api/vehicles")).await;
    assert_eq!(listed.as_array().unwrap(), after);
}

#[tokio::test]
async fn test_update_vehicle_by_provider() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        post_json(
            "/api/vehicles/update",
            json!({ "providerName": "QuickFix Towing", "status": "Busy" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "TOW-001");
    assert_eq!(body["status"], "Busy");

    let (_, listed) = send(&app, get("/api/vehicles")).await;
    assert_eq!(listed[0]["status"], "Busy");
}

#[tokio::test]
async fn test_update_unknown_provider_returns_404() {
    let app = create_test_app();
    let (_, before) = send(&app, get("/api/vehicles")).await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/vehicles/update",
            json!({ "providerName": "Nonexistent Co", "status": "Busy" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Provider not found" }));

    let (_, after) = send(&app, get("/api/vehicles")).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_update_passes_unknown_status_through() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        post_json(
            "/api/vehicles/update",
            json!({ "providerName": "Hoboken Hook", "status": "ACTIVE" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "TOW-011");
    assert_eq!(body["status"], "ACTIVE");

    let (_, stats) = send(&app, get("/api/vehicles/stats")).await;
    assert_eq!(stats["other"], 1);
}

#[tokio::test]
async fn test_update_missing_field_is_validation_error() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        post_json("/api/vehicles/update", json!({ "providerName": "QuickFix Towing" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "status"]));
}

#[tokio::test]
async fn test_update_without_json_body_is_rejected() {
    let app = create_test_app();
    let (status, body) = send(&app, post_empty("/api/vehicles/update")).await;

    assert!(status.is_client_error());
    assert!(body["detail"].is_array());
}

#[tokio::test]
async fn test_fleet_stats() {
    let app = create_test_app();
    let (status, body) = send(&app, get("/api/vehicles/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "total": 20,
            "active": 11,
            "busy": 5,
            "offline": 4,
            "other": 0
        })
    );
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = create_test_app();
    let request = Request::get("/api/vehicles")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

fn create_restricted_cors_app() -> Router {
    let config = EnvironmentConfig {
        cors_origins: vec!["http://ok.example".to_string()],
        ..EnvironmentConfig::default()
    };
    let registry = VehicleRegistry::seeded(StdRng::seed_from_u64(42));
    create_app(AppState::new(config, registry))
}

#[tokio::test]
async fn test_cors_allow_list_echoes_allowed_origin() {
    let app = create_restricted_cors_app();
    let request = Request::get("/api/vehicles")
        .header(header::ORIGIN, "http://ok.example")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://ok.example"
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_cors_allow_list_rejects_foreign_origin() {
    let app = create_restricted_cors_app();
    let request = Request::get("/api/vehicles")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_cors_allow_list_preflight_on_update() {
    let app = create_restricted_cors_app();
    let request = Request::options("/api/vehicles/update")
        .header(header::ORIGIN, "http://ok.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://ok.example"
    );
}

#[tokio::test]
async fn test_health_reports_empty_registry() {
    let registry = VehicleRegistry::new(Vec::new(), StdRng::seed_from_u64(1)).unwrap();
    let app = create_app(AppState::new(EnvironmentConfig::default(), registry));

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "empty");
    assert_eq!(body["vehicles"], 0);
}
