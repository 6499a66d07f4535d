use crate::fixtures::create_test_app;
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use bandtree_web::models::PathResponse;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_path_basic() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/path?from_id=joni&to_id=herbie")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let path_response: PathResponse = serde_json::from_slice(&body).unwrap();

    let path = path_response.path.expect("path should exist");
    assert_eq!(path.len(), 4);
    assert_eq!(path[0].id, "joni");
    assert_eq!(path[3].id, "herbie");
    assert_eq!(path_response.degrees, Some(3));
    assert_eq!(path_response.steps.len(), 3);
    assert!(path_response.search_stats.musicians_visited > 0);
}

#[tokio::test]
async fn test_path_steps_carry_connecting_releases() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/path?from_id=joni&to_id=herbie")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let path_response: PathResponse = serde_json::from_slice(&body).unwrap();

    let first_step = &path_response.steps[0];
    assert_eq!(first_step.from.id, "joni");
    assert_eq!(first_step.to.id, "jaco");

    // Catalog order, duplicates preserved.
    let release_ids: Vec<&str> = first_step
        .releases
        .iter()
        .map(|release| release.id.as_str())
        .collect();
    assert_eq!(release_ids, ["hejira", "mingus"]);
    assert_eq!(first_step.releases[0].year, Some(1976));
}

#[tokio::test]
async fn test_path_same_musician() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/path?from_id=joni&to_id=joni")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let path_response: PathResponse = serde_json::from_slice(&body).unwrap();

    let path = path_response.path.expect("same musician is a path");
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].id, "joni");
    assert_eq!(path_response.degrees, Some(0));
    assert!(path_response.steps.is_empty());
}

#[tokio::test]
async fn test_path_unknown_musician_is_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/path?from_id=ghost&to_id=joni")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let path_response: PathResponse = serde_json::from_slice(&body).unwrap();

    assert!(path_response.path.is_none());
    assert_eq!(path_response.degrees, None);
    assert!(path_response.steps.is_empty());
}

#[tokio::test]
async fn test_path_disconnected_musicians() {
    let app = create_test_app();

    // Nick only appears on a solo release.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/path?from_id=joni&to_id=nick")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let path_response: PathResponse = serde_json::from_slice(&body).unwrap();

    assert!(path_response.path.is_none());
}

#[tokio::test]
async fn test_path_missing_parameter_is_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/path?from_id=joni")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
