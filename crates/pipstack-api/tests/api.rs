//! API integration tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use pipstack_api::{create_router, ApiConfig, AppState};

fn test_app() -> axum::Router {
    let config = ApiConfig {
        template_path: concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../pipstack-edit/templates/pip.json"
        )
        .into(),
        ..ApiConfig::default()
    };
    create_router(AppState::new(config))
}

fn post_composition(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/compositions")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_composition() {
    let response = test_app()
        .oneshot(post_composition(json!({
            "video": "https://cdn.example.com/main.mp4",
            "pip": "https://cdn.example.com/overlay.mp4",
            "position": "bottomLeft",
            "duration": 10
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let edit = body_json(response).await;
    let pip_clip = &edit["timeline"]["tracks"][0]["clips"][0];
    assert_eq!(pip_clip["asset"]["src"], "https://cdn.example.com/overlay.mp4");
    assert_eq!(pip_clip["position"], "bottomLeft");
    assert_eq!(pip_clip["length"], 10.0);
    assert_eq!(pip_clip["offset"]["x"], 0.02);
    assert_eq!(pip_clip["offset"]["y"], 0.035);
    assert_eq!(
        edit["timeline"]["tracks"][1]["clips"][0]["asset"]["src"],
        "https://cdn.example.com/main.mp4"
    );
}

#[tokio::test]
async fn test_invalid_position_is_a_bad_request() {
    let response = test_app()
        .oneshot(post_composition(json!({
            "video": "https://cdn.example.com/main.mp4",
            "pip": "https://cdn.example.com/overlay.mp4",
            "position": "center"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body["detail"],
        "\"position\" must be one of [topLeft, topRight, bottomLeft, bottomRight]"
    );
}

#[tokio::test]
async fn test_missing_video_is_a_bad_request() {
    let response = test_app()
        .oneshot(post_composition(json!({
            "pip": "https://cdn.example.com/overlay.mp4",
            "position": "topLeft"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["detail"], "\"video\" is required");
}

#[tokio::test]
async fn test_missing_template_is_an_internal_error() {
    let config = ApiConfig {
        template_path: "/nonexistent/pip.json".into(),
        ..ApiConfig::default()
    };
    let app = create_router(AppState::new(config));

    let response = app
        .oneshot(post_composition(json!({
            "video": "https://cdn.example.com/main.mp4",
            "pip": "https://cdn.example.com/overlay.mp4",
            "position": "topLeft"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_ready_endpoint() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["template"]["status"], "ok");
}

#[tokio::test]
async fn test_ready_degrades_without_template() {
    let config = ApiConfig {
        template_path: "/nonexistent/pip.json".into(),
        ..ApiConfig::default()
    };
    let app = create_router(AppState::new(config));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
