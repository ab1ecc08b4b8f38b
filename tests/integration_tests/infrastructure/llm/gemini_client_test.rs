use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use recap::application::ports::{TextGenerator, TextGeneratorError};
use recap::infrastructure::llm::GeminiClient;

use crate::common::spawn_server;

const MODEL: &str = "test-model";
const ENDPOINT: &str = "/v1beta/models/test-model:generateContent";
const API_KEY: &str = "test-key";

fn client(base_url: &str) -> GeminiClient {
    GeminiClient::new(base_url, API_KEY, MODEL, Duration::from_secs(5)).unwrap()
}

async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(API_KEY) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad key"})));
    }

    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    let role = body["contents"][0]["role"].as_str().unwrap_or_default();

    (
        StatusCode::OK,
        Json(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": format!("{role}: {prompt}") }] } }
            ]
        })),
    )
}

fn status_router(status: StatusCode) -> Router {
    Router::new().route(
        ENDPOINT,
        post(move || async move { (status, "provider says no") }),
    )
}

#[tokio::test]
async fn given_valid_key_when_generating_then_returns_first_candidate_text() {
    let base_url = spawn_server(Router::new().route(ENDPOINT, post(echo))).await;

    let text = client(&base_url).generate("Summarize this").await.unwrap();

    assert_eq!(text.as_deref(), Some("user: Summarize this"));
}

#[tokio::test]
async fn given_wrong_key_when_generating_then_unauthorized() {
    let base_url = spawn_server(Router::new().route(ENDPOINT, post(echo))).await;
    let client = GeminiClient::new(&base_url, "wrong", MODEL, Duration::from_secs(5)).unwrap();

    let result = client.generate("prompt").await;

    assert!(matches!(result, Err(TextGeneratorError::Unauthorized(_))));
}

#[tokio::test]
async fn given_rate_limit_when_generating_then_rate_limited() {
    let base_url = spawn_server(status_router(StatusCode::TOO_MANY_REQUESTS)).await;

    let result = client(&base_url).generate("prompt").await;

    assert!(matches!(result, Err(TextGeneratorError::RateLimited)));
}

#[tokio::test]
async fn given_server_error_when_generating_then_api_request_failed() {
    let base_url = spawn_server(status_router(StatusCode::INTERNAL_SERVER_ERROR)).await;

    let result = client(&base_url).generate("prompt").await;

    assert!(matches!(result, Err(TextGeneratorError::ApiRequestFailed(_))));
}

#[tokio::test]
async fn given_success_without_candidates_when_generating_then_returns_none() {
    let router = Router::new().route(
        ENDPOINT,
        post(|| async { Json(json!({ "promptFeedback": { "blockReason": "SAFETY" } })) }),
    );
    let base_url = spawn_server(router).await;

    let text = client(&base_url).generate("prompt").await.unwrap();

    assert_eq!(text, None);
}

#[tokio::test]
async fn given_unreachable_host_when_generating_then_api_request_failed() {
    let result = client("http://127.0.0.1:1").generate("prompt").await;

    assert!(matches!(result, Err(TextGeneratorError::ApiRequestFailed(_))));
}
