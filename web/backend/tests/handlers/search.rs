use crate::fixtures::create_test_app;
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use bandtree_web::models::SearchResponse;
use tower::util::ServiceExt;

#[tokio::test]
async fn test_search_by_substring() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/musicians/search?q=mitchell")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let search_response: SearchResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(search_response.count, 1);
    assert_eq!(search_response.results[0].id, "joni");
    assert_eq!(search_response.results[0].slug, "joni-mitchell");
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/musicians/search?q=JONI")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let search_response: SearchResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(search_response.count, 1);
    assert_eq!(search_response.results[0].name, "Joni Mitchell");
}

#[tokio::test]
async fn test_search_prefix_matches_rank_first() {
    let app = create_test_app();

    // "ni" prefixes "nick drake" and is inside "joni mitchell".
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/musicians/search?q=ni")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let search_response: SearchResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(search_response.count, 2);
    assert_eq!(search_response.results[0].id, "nick");
    assert_eq!(search_response.results[1].id, "joni");
}

#[tokio::test]
async fn test_search_empty_query_returns_nothing() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/musicians/search?q=%20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let search_response: SearchResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(search_response.count, 0);
    assert!(search_response.results.is_empty());
}

#[tokio::test]
async fn test_search_respects_limit() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/musicians/search?q=a&limit=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let search_response: SearchResponse = serde_json::from_slice(&body).unwrap();

    assert!(search_response.count <= 2);
    assert!(search_response.results.len() <= 2);
}
