use crate::fixtures::create_test_app;
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use bandtree_web::models::{HealthResponse, StatsResponse};
use tower::util::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_stats_counts() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let stats: StatsResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(stats.musicians, 5);
    assert_eq!(stats.releases, 6);
    assert_eq!(stats.bands, 4);
}
