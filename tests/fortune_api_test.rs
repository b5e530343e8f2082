use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use fortune_cookie::server::{app_router, AppState};
use fortune_cookie::{FortuneService, RemoteConfig, RemoteFortuneClient, Symbol};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

const SYMBOLS: [&str; 14] = [
    "Key", "Mirror", "Lantern", "Coin", "Feather", "Compass", "Shell", "Seed", "Thread", "Candle",
    "Door", "Bridge", "Cup", "Stone",
];

fn app_with(remote: RemoteConfig) -> Router {
    let client = RemoteFortuneClient::new(remote);
    app_router(AppState::new(FortuneService::new(client)))
}

fn remote_for(server: &MockServer) -> RemoteConfig {
    RemoteConfig {
        api_key: Some("integration-key".to_string()),
        base_url: server.url("/v1"),
        ..RemoteConfig::default()
    }
}

async fn ask(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/fortune")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn assert_fallback(json: &Value) {
    assert_eq!(json["source"], "fallback");
    for field in ["fortune", "suggestion", "lucky", "warning", "details"] {
        let value = json[field].as_str().unwrap_or_default();
        assert!(!value.is_empty(), "field '{}' should be populated", field);
    }
    let symbol = json["symbol"].as_str().unwrap();
    assert!(SYMBOLS.iter().any(|s| *s == symbol));
}

#[tokio::test]
async fn test_remote_success_end_to_end() {
    let server = MockServer::start();
    let content = json!({
        "fortune": "A lantern is only useful in the dark.",
        "suggestion": "Light one candle tonight.",
        "lucky": 11
    })
    .to_string();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("Authorization", "Bearer integration-key")
            .json_body_partial(r#"{"stream": false, "temperature": 0.9}"#)
            .body_contains("Should I move abroad?");
        then.status(200).json_body(json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
        }));
    });

    let (status, json) = ask(
        app_with(remote_for(&server)),
        json!({"question": "  Should I   move abroad? ", "mood": "bold"}),
    )
    .await;

    api_mock.assert();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "remote");
    assert_eq!(json["mood"], "bold");
    assert_eq!(json["fortune"], "A lantern is only useful in the dark.");
    assert_eq!(json["lucky"], "11");
    assert!(json.get("warning").is_none());
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn test_no_credentials_end_to_end() {
    let remote = RemoteConfig {
        api_key: None,
        ..RemoteConfig::default()
    };

    let (status, json) = ask(
        app_with(remote),
        json!({"question": "Will I get the job?", "mood": "cryptic"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mood"], "cryptic");
    assert_fallback(&json);
    assert!(json["fortune"]
        .as_str()
        .unwrap()
        .ends_with("The question is part of the answer."));
}

#[tokio::test]
async fn test_remote_failures_degrade_to_fallback() {
    let cases: Vec<(u16, String, &str)> = vec![
        (500, "internal error".to_string(), "Remote service returned HTTP 500"),
        (200, "{not json".to_string(), "Remote response was not valid JSON"),
        (
            200,
            json!({"choices": [{"message": {"role": "assistant"}}]}).to_string(),
            "Remote response had no message content",
        ),
        (
            200,
            json!({"choices": [{"message": {"content": "just vibes"}}]}).to_string(),
            "Message content was not a valid fortune JSON object",
        ),
    ];

    for (status_code, body, expected_details) in cases {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(status_code)
                .header("Content-Type", "application/json")
                .body(body.clone());
        });

        let (status, json) = ask(
            app_with(remote_for(&server)),
            json!({"question": "What should I focus on"}),
        )
        .await;

        api_mock.assert();
        assert_eq!(status, StatusCode::OK);
        assert_fallback(&json);
        assert_eq!(json["details"], expected_details);
    }
}

#[tokio::test]
async fn test_validation_errors_never_reach_remote() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    let (status, json) = ask(app_with(remote_for(&server)), json!({"question": ""})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Please enter a question or thought."}));

    let (status, json) = ask(
        app_with(remote_for(&server)),
        json!({"question": "w ".repeat(250)}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Keep it under 400 characters."}));

    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_symbol_serialization_matches_list() {
    let remote = RemoteConfig {
        api_key: None,
        ..RemoteConfig::default()
    };
    let app = app_with(remote);

    for _ in 0..30 {
        let (_, json) = ask(app.clone(), json!({"question": "Hello"})).await;
        let symbol = json["symbol"].as_str().unwrap();
        assert!(Symbol::ALL.iter().any(|s| s.as_str() == symbol));
    }
}
