mod common;

use axum::http::{Method, StatusCode};

#[tokio::test]
async fn healthz_works() {
    let (app, _tmp) = common::build_test_router().await;
    let (status, body) = common::send(&app, Method::GET, "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let (app, _tmp) = common::build_test_router().await;
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let id = response.headers().get("x-request-id").unwrap();
    assert!(!id.to_str().unwrap().is_empty());
}

#[tokio::test]
async fn client_request_id_is_echoed_back() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let (app, _tmp) = common::build_test_router().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .header("x-request-id", "trace-me-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me-42");
}
