use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use reelrank_core::{EmbeddingStore, MovieRecommender};
use reelrank_server::{build_router, state::AppState};

/// Router over the reference fixture store from the design scenarios:
/// A = [1, 0], B = [0, 1], C = [0.9, 0.1].
fn test_router() -> axum::Router {
    let store = EmbeddingStore::from_vectors(
        2,
        vec![
            ("A".to_string(), vec![1.0, 0.0]),
            ("B".to_string(), vec![0.0, 1.0]),
            ("C".to_string(), vec![0.9, 0.1]),
        ],
    )
    .unwrap();
    build_router(AppState::new(MovieRecommender::new(Arc::new(store))))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn index_returns_greeting() {
    let response = test_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn recommendations_reference_scenario() {
    let request = post_json(
        "/recommendations",
        json!({
            "user_id": "u1",
            "ratings": [{"movie_id": "A", "score": 5.0}],
            "num_recs": 2,
            "good_threshold": 3.0,
            "bad_threshold": 2.0,
            "harshness": 1
        }),
    );

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["movie_id"], "C");
    assert_eq!(data[0]["rank"], 1);
    assert_eq!(data[1]["movie_id"], "B");
    assert_eq!(data[1]["rank"], 2);
}

#[tokio::test]
async fn recommendations_never_include_rated_movies() {
    let request = post_json(
        "/recommendations",
        json!({
            "user_id": "u1",
            "ratings": [
                {"movie_id": "A", "score": 5.0},
                {"movie_id": "B", "score": 1.0}
            ],
            "num_recs": 3,
            "good_threshold": 3.0,
            "bad_threshold": 2.0,
            "harshness": 1
        }),
    );

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["movie_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["C"]);
}

#[tokio::test]
async fn recommendations_with_no_liked_ratings_is_unprocessable() {
    let request = post_json(
        "/recommendations",
        json!({
            "user_id": "u1",
            "ratings": [{"movie_id": "A", "score": 1.0}],
            "num_recs": 2,
            "good_threshold": 3.0,
            "bad_threshold": 2.0,
            "harshness": 1
        }),
    );

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("good threshold"));
}

#[tokio::test]
async fn recommendations_with_out_of_range_threshold_is_bad_request() {
    let request = post_json(
        "/recommendations",
        json!({
            "user_id": "u1",
            "ratings": [{"movie_id": "A", "score": 5.0}],
            "num_recs": 2,
            "good_threshold": 9.0,
            "bad_threshold": 2.0,
            "harshness": 1
        }),
    );

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn recommendations_with_out_of_range_num_recs_is_bad_request() {
    let request = post_json(
        "/recommendations",
        json!({
            "user_id": "u1",
            "ratings": [{"movie_id": "A", "score": 5.0}],
            "num_recs": 500,
            "good_threshold": 3.0,
            "bad_threshold": 2.0,
            "harshness": 1
        }),
    );

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn similar_movies_reference_scenario() {
    let request = post_json(
        "/similar-movies",
        json!({"movie_id": "A", "num_movies": 1}),
    );

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["movie_id"], "C");
}

#[tokio::test]
async fn similar_movies_unknown_id_is_not_found() {
    let request = post_json(
        "/similar-movies",
        json!({"movie_id": "ghost", "num_movies": 5}),
    );

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("ghost"));
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/similar-movies")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn serves_from_a_store_loaded_off_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"dimensions": 2, "vectors": {{"A": [1.0, 0.0], "B": [0.0, 1.0], "C": [0.9, 0.1]}}}}"#
    )
    .unwrap();

    let store = EmbeddingStore::load(file.path()).unwrap();
    let router = build_router(AppState::new(MovieRecommender::new(Arc::new(store))));

    let request = post_json(
        "/similar-movies",
        json!({"movie_id": "A", "num_movies": 2}),
    );
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data[0]["movie_id"], "C");
    assert_eq!(data[1]["movie_id"], "B");
}
