use auth_stub_api::router;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router()
}

fn post_auth(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/auth")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn object_payload_is_acknowledged() {
    let response = app().oneshot(post_auth(r#"{"user":"alice"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"ok": true, "id": "user123"}));
}

#[tokio::test]
async fn empty_object_is_acknowledged() {
    let response = app().oneshot(post_auth("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"ok": true, "id": "user123"}));
}

#[tokio::test]
async fn array_payload_is_acknowledged() {
    let response = app().oneshot(post_auth("[1,2,3]")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"ok": true, "id": "user123"}));
}

#[tokio::test]
async fn scalar_payloads_are_acknowledged() {
    for body in ["42", "\"token\"", "null", "true"] {
        let response = app().oneshot(post_auth(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "body {body}");
        assert_eq!(body_json(response).await, json!({"ok": true, "id": "user123"}));
    }
}

#[tokio::test]
async fn response_body_is_exact() {
    let response = app()
        .oneshot(post_auth(r#"{"auth":"deadbeef","addr":"1.2.3.4:5","ts":1}"#))
        .await
        .unwrap();

    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    assert_eq!(&body[..], br#"{"ok":true,"id":"user123"}"#);
}

#[tokio::test]
async fn missing_content_type_is_still_parsed() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth")
                .body(Body::from(r#"{"user":"bob"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let response = app().oneshot(post_auth("not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("bad request"));
}

#[tokio::test]
async fn empty_body_is_rejected() {
    let response = app().oneshot(post_auth("")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn large_body_is_still_acknowledged() {
    let big = format!(r#"{{"pad":"{}"}}"#, "x".repeat(1_500_000));
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth")
                .header("content-type", "application/json")
                .body(Body::from(big))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"ok": true, "id": "user123"}));
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"ok": true}));
}
