// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! End-to-end tests of the REST API against JSON files on disk

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use reviews_engine::adapters::rest::build_router;
use reviews_engine::application::Application;
use reviews_engine::infrastructure::{Config, JsonReviewRepository};
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

struct TestServer {
    dir: TempDir,
    router: Router,
}

impl TestServer {
    fn new(config: Config) -> Self {
        Self::with_shutdown(config, CancellationToken::new())
    }

    fn with_shutdown(config: Config, shutdown: CancellationToken) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repository = Arc::new(JsonReviewRepository::new(
            dir.path().join("siteReviews.json"),
            dir.path().join("reviews.json"),
        ));
        let app = Arc::new(Application::new(repository, shutdown));
        let router = build_router(app, &config);
        Self { dir, router }
    }

    fn reviews_path(&self) -> PathBuf {
        self.dir.path().join("siteReviews.json")
    }

    fn predictions_path(&self) -> PathBuf {
        self.dir.path().join("reviews.json")
    }

    /// Reviews 1..=count; every even id is predicted as negative about price
    fn write_data(&self, count: i64) {
        let reviews: Vec<Value> = (1..=count)
            .map(|id| {
                let status = if id % 3 == 0 {
                    json!("answered")
                } else {
                    Value::Null
                };
                json!({
                    "id": id,
                    "link": format!("https://reviews.example.com/{id}"),
                    "date": "2024-06-11",
                    "title": format!("Review {id}"),
                    "text": "Transfer took three days",
                    "rating": "3",
                    "status": status,
                    "product": "Transfers",
                    "city": "Madrid"
                })
            })
            .collect();
        let predictions: Vec<Value> = (1..=count)
            .filter(|id| id % 2 == 0)
            .map(|id| json!({ "id": id, "topics": ["price"], "sentiments": ["negative"] }))
            .collect();

        fs::write(self.reviews_path(), json!({ "reviews": reviews }).to_string()).unwrap();
        fs::write(self.predictions_path(), Value::Array(predictions).to_string()).unwrap();
    }

    async fn send(&self, request: Request<Body>) -> axum::response::Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::new(Config::default());

    let (status, body) = server.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn test_reviews_last_page() {
    let server = TestServer::new(Config::default());
    server.write_data(45);

    let (status, body) = server.get("/api/v1/reviews?page=3&limit=20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 45);
    assert_eq!(body["page"], 3);
    assert_eq!(body["limit"], 20);
    assert_eq!(body["total_pages"], 3);
    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 5);
    assert_eq!(reviews[0]["id"], 41);
    assert!(reviews[0].get("topics").is_none());
    assert_eq!(reviews[1]["id"], 42);
    assert_eq!(reviews[1]["topics"], json!(["price"]));
    assert_eq!(reviews[1]["sentiments"], json!(["negative"]));
    assert_eq!(reviews[1]["status"], "answered");
    assert_eq!(reviews[0]["status"], Value::Null);
}

#[tokio::test]
async fn test_reviews_past_the_end() {
    let server = TestServer::new(Config::default());
    server.write_data(45);

    let (status, body) = server.get("/api/v1/reviews?page=4&limit=20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reviews"], json!([]));
    assert_eq!(body["total"], 45);
    assert_eq!(body["total_pages"], 3);
}

#[tokio::test]
async fn test_reviews_defaults_and_normalization() {
    let server = TestServer::new(Config::default());
    server.write_data(45);

    let (_, body) = server.get("/api/v1/reviews").await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 20);
    assert_eq!(body["reviews"].as_array().unwrap().len(), 20);

    let (status, body) = server.get("/api/v1/reviews?page=abc&limit=500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 20);

    let (_, body) = server.get("/api/v1/reviews?page=-2&limit=0").await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 20);
}

#[tokio::test]
async fn test_repeated_parameters_use_first_value() {
    let server = TestServer::new(Config::default());
    server.write_data(45);

    let (status, body) = server
        .get("/api/v1/reviews?page=2&page=3&limit=10&limit=abc")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["reviews"][0]["id"], 11);
}

#[tokio::test]
async fn test_reviews_filtering() {
    let server = TestServer::new(Config::default());
    server.write_data(10);

    let (_, body) = server
        .get("/api/v1/reviews?topic=price&sentiment=negative&limit=2&page=2")
        .await;
    assert_eq!(body["total"], 5);
    assert_eq!(body["total_pages"], 3);
    let ids: Vec<i64> = body["reviews"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![6, 8]);

    let (_, body) = server
        .get("/api/v1/reviews?topic=price&sentiment=positive")
        .await;
    assert_eq!(body["total"], 0);

    let (_, body) = server.get("/api/v1/reviews?topic=&sentiment=").await;
    assert_eq!(body["total"], 10);
}

#[tokio::test]
async fn test_unknown_topic_is_empty_not_an_error() {
    let server = TestServer::new(Config::default());
    server.write_data(45);

    let (status, body) = server.get("/api/v1/reviews?topic=billing").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "reviews": [], "total": 0, "page": 1, "limit": 20, "total_pages": 0 })
    );
}

#[tokio::test]
async fn test_analytics() {
    let server = TestServer::new(Config::default());
    server.write_data(6);

    let (status, body) = server.get("/api/v1/analytics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reviews"].as_array().unwrap().len(), 6);
    assert_eq!(body["predictions"].as_array().unwrap().len(), 3);
    assert_eq!(body["reviews"][3]["topics"], json!(["price"]));
    assert_eq!(
        body["predictions"][0],
        json!({ "id": 2, "topics": ["price"], "sentiments": ["negative"] })
    );
}

#[tokio::test]
async fn test_unmatched_route() {
    let server = TestServer::new(Config::default());

    let (status, body) = server.get("/api/v2/reviews").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "not_found", "message": "Route not found" }));
}

#[tokio::test]
async fn test_load_failure_is_generic_and_retried() {
    let server = TestServer::new(Config::default());

    let (status, body) = server.get("/api/v1/reviews").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "internal_error", "message": "Failed to get reviews" })
    );

    let (status, body) = server.get("/api/v1/analytics").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "internal_error", "message": "Failed to get analytics data" })
    );

    server.write_data(3);
    let (status, body) = server.get("/api/v1/reviews").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_duplicate_review_ids_are_a_server_error() {
    let server = TestServer::new(Config::default());
    fs::write(
        server.reviews_path(),
        json!({ "reviews": [{ "id": 1 }, { "id": 1 }] }).to_string(),
    )
    .unwrap();
    fs::write(server.predictions_path(), "[]").unwrap();

    let (status, body) = server.get("/api/v1/reviews").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to get reviews");
}

#[tokio::test]
async fn test_shutdown_before_first_load() {
    let shutdown = CancellationToken::new();
    let server = TestServer::with_shutdown(Config::default(), shutdown.clone());
    server.write_data(3);
    shutdown.cancel();

    let (status, body) = server.get("/api/v1/reviews").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "service_unavailable");
}

#[tokio::test]
async fn test_rate_limit() {
    let mut config = Config::default();
    config.rate_limit.max_requests = 2;
    let server = TestServer::new(config);

    assert_eq!(server.get("/health").await.0, StatusCode::OK);
    assert_eq!(server.get("/health").await.0, StatusCode::OK);

    let (status, body) = server.get("/health").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        body,
        json!({
            "error": "rate_limit_exceeded",
            "message": "Too many requests, please try again later"
        })
    );
}

#[tokio::test]
async fn test_security_headers() {
    let server = TestServer::new(Config::default());

    let response = server
        .send(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await;

    let headers = response.headers();
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "SAMEORIGIN");
    assert_eq!(headers[header::REFERRER_POLICY], "no-referrer");
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = TestServer::new(Config::default());

    let response = server
        .send(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/v1/reviews")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let server = TestServer::new(Config::default());

    let response = server
        .send(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://evil.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_gzip_when_accepted() {
    let server = TestServer::new(Config::default());
    server.write_data(20);

    let response = server
        .send(
            Request::builder()
                .uri("/api/v1/analytics")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");
}
