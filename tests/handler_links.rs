mod common;

use serde_json::{Value, json};
use shortcode::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_create_link_with_custom_code() {
    let (server, _repository) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com/page", "code": "launch24" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    assert_eq!(body["code"], "launch24");
    assert_eq!(body["targetUrl"], "https://example.com/page");
    assert_eq!(
        body["shortUrl"],
        format!("{}/launch24", common::TEST_BASE_URL)
    );
    assert_eq!(body["clicks"], 0);
    assert!(body.get("lastClicked").is_none());
    assert!(body.get("createdAt").is_some());
}

#[tokio::test]
async fn test_create_link_with_generated_code() {
    let (server, _repository) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com/page" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 7);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_create_link_invalid_url() {
    let (server, _repository) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid_url");
}

#[tokio::test]
async fn test_create_link_invalid_custom_code() {
    let (server, _repository) = common::create_test_server();

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com", "code": "bad code!" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid_code_format");
}

#[tokio::test]
async fn test_create_link_custom_code_taken() {
    let (server, _repository) = common::create_test_server();

    let first = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://first.example/", "code": "mine123" }))
        .await;
    assert_eq!(first.status_code(), 201);

    let second = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://second.example/", "code": "mine123" }))
        .await;

    assert_eq!(second.status_code(), 409);

    let body: Value = second.json();
    assert_eq!(body["error"]["code"], "code_taken");

    // The first mapping is unmodified.
    let stats = server.get("/api/links/mine123").await;
    let body: Value = stats.json();
    assert_eq!(body["targetUrl"], "https://first.example/");
}

#[tokio::test]
async fn test_link_stats_round_trip() {
    let (server, _repository) = common::create_test_server();

    let created = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com/doc", "code": "abc123X" }))
        .await;
    assert_eq!(created.status_code(), 201);

    let response = server.get("/api/links/abc123X").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["code"], "abc123X");
    assert_eq!(body["targetUrl"], "https://example.com/doc");
    assert_eq!(body["clicks"], 0);
    assert!(body.get("lastClicked").is_none());
}

#[tokio::test]
async fn test_link_stats_reflect_redirects() {
    let (server, _repository) = common::create_test_server();

    server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com/", "code": "counted" }))
        .await
        .assert_status_success();

    for _ in 0..2 {
        let response = server.get("/counted").await;
        assert_eq!(response.status_code(), 302);
    }

    let response = server.get("/api/links/counted").await;
    let body: Value = response.json();
    assert_eq!(body["clicks"], 2);
    assert!(body.get("lastClicked").is_some());
}

#[tokio::test]
async fn test_link_stats_not_found() {
    let (server, _repository) = common::create_test_server();

    let response = server.get("/api/links/unknown").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link() {
    let (server, repository) = common::create_test_server();

    common::seed_link(&repository, "del1234", "https://example.com/").await;

    let response = server.delete("/api/links/del1234").await;
    assert_eq!(response.status_code(), 204);

    assert!(repository.find_by_code("del1234").await.unwrap().is_none());

    let stats = server.get("/api/links/del1234").await;
    stats.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_twice() {
    let (server, repository) = common::create_test_server();

    common::seed_link(&repository, "del1234", "https://example.com/").await;

    server.delete("/api/links/del1234").await.assert_status_success();

    let response = server.delete("/api/links/del1234").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_create_link_reserved_code_rejected() {
    let (server, repository) = common::create_test_server();

    // "health" passes the format pattern but would be shadowed by the
    // static liveness route and could never redirect.
    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com/", "code": "health" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid_code_format");

    assert!(repository.find_by_code("health").await.unwrap().is_none());

    // The liveness route still answers as itself.
    let health = server.get("/health").await;
    assert_eq!(health.status_code(), 200);
    let body: Value = health.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_health() {
    let (server, _repository) = common::create_test_server();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
}
