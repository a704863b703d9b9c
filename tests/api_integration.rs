//! End-to-end API integration tests
//!
//! These tests drive the HTTP routes with a deterministic stub tokenizer and
//! a scripted generator, verifying:
//! - Keyword summarization flows and fallback substitution
//! - Input validation with the fixed user-facing message
//! - Generative route success and failure mapping

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

use leadsum_api::api::handlers::summaries;
use leadsum_api::api::state::AppState;
use leadsum_api::domain::summary::Summary;
use leadsum_api::domain::tokenizer::Tokenizer;
use leadsum_api::generation::{GenerationError, GenerationResult, SummaryGenerator};

/// Deterministic tokenizer: every whitespace token counts as a noun
struct WhitespaceNouns;

impl Tokenizer for WhitespaceNouns {
    fn nouns(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Generator scripted to succeed with a fixed summary
struct FixedGenerator;

#[async_trait]
impl SummaryGenerator for FixedGenerator {
    async fn generate(&self, _strengths: &str, _weaknesses: &str) -> GenerationResult<Summary> {
        let lines = vec![
            "뛰어난 소통 및 전략 역량을 보유함.".to_string(),
            "다만 위임 역량은 일부 보완이 필요함.".to_string(),
            "종합적으로 소통 기반의 소통형 리더임.".to_string(),
        ];
        Ok(Summary::from_lines(lines).expect("valid summary"))
    }
}

/// Generator scripted to fail with a malformed upstream response
struct FailingGenerator;

#[async_trait]
impl SummaryGenerator for FailingGenerator {
    async fn generate(&self, _strengths: &str, _weaknesses: &str) -> GenerationResult<Summary> {
        Err(GenerationError::MalformedResponse { line_count: 1 })
    }
}

/// Setup test application with routes
fn setup_app(generator: Option<Arc<dyn SummaryGenerator>>) -> Router {
    let state = AppState {
        tokenizer: Arc::new(WhitespaceNouns),
        generator,
    };

    Router::new()
        .route("/health", get(summaries::health_check))
        .route("/api/summaries", post(summaries::create_summary))
        .route(
            "/api/summaries/generative",
            post(summaries::create_generative_summary),
        )
        .with_state(state)
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app(None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_keyword_summary_uses_top_keywords() {
    let app = setup_app(None);

    let payload = json!({
        "strengths": "소통 전략 전략 비전 전략 소통",
        "weaknesses": "위임 피드백 위임"
    });

    let response = app
        .oneshot(post_json("/api/summaries", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let lines = json["lines"].as_array().unwrap();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "뛰어난 전략 및 소통 역량을 보유함.");
    assert_eq!(lines[1], "다만 위임 역량은 일부 보완이 필요함.");
    assert_eq!(lines[2], "종합적으로 전략 기반의 소통형 리더임.");
}

#[tokio::test]
async fn test_keyword_summary_falls_back_without_keywords() {
    let app = setup_app(None);

    // Single-character tokens never qualify as keywords
    let payload = json!({
        "strengths": "힘 힘 힘",
        "weaknesses": "꾀"
    });

    let response = app
        .oneshot(post_json("/api/summaries", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let lines = json["lines"].as_array().unwrap();

    assert_eq!(lines[0], "뛰어난 뛰어난 및 리더십 역량을 보유함.");
    assert_eq!(lines[1], "다만 피드백 역량은 일부 보완이 필요함.");
    assert_eq!(lines[2], "종합적으로 뛰어난 기반의 소통형 리더임.");
}

#[tokio::test]
async fn test_missing_strengths_rejected_with_fixed_message() {
    let app = setup_app(None);

    let payload = json!({
        "strengths": "",
        "weaknesses": "피드백이 늦습니다"
    });

    let response = app
        .oneshot(post_json("/api/summaries", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], summaries::MISSING_INPUT_MESSAGE);
}

#[tokio::test]
async fn test_whitespace_only_weaknesses_rejected() {
    let app = setup_app(None);

    let payload = json!({
        "strengths": "소통 전략",
        "weaknesses": "   "
    });

    let response = app
        .oneshot(post_json("/api/summaries", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], summaries::MISSING_INPUT_MESSAGE);
}

#[tokio::test]
async fn test_generative_summary_returns_generated_lines() {
    let app = setup_app(Some(Arc::new(FixedGenerator)));

    let payload = json!({
        "strengths": "항상 팀원들의 의견을 경청합니다",
        "weaknesses": "빠른 피드백이 조금 아쉽습니다"
    });

    let response = app
        .oneshot(post_json("/api/summaries/generative", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let lines = json["lines"].as_array().unwrap();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "뛰어난 소통 및 전략 역량을 보유함.");
}

#[tokio::test]
async fn test_generative_route_unavailable_without_generator() {
    let app = setup_app(None);

    let payload = json!({
        "strengths": "소통",
        "weaknesses": "위임"
    });

    let response = app
        .oneshot(post_json("/api/summaries/generative", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["error"], summaries::GENERATION_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_generative_failure_maps_to_bad_gateway_with_canned_message() {
    let app = setup_app(Some(Arc::new(FailingGenerator)));

    let payload = json!({
        "strengths": "소통",
        "weaknesses": "위임"
    });

    let response = app
        .oneshot(post_json("/api/summaries/generative", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["error"], summaries::GENERATION_FAILED_MESSAGE);
    assert!(json["reason"]
        .as_str()
        .unwrap()
        .contains("expected exactly 3 summary lines"));
}

#[tokio::test]
async fn test_generative_route_validates_input_before_calling_generator() {
    let app = setup_app(Some(Arc::new(FailingGenerator)));

    let payload = json!({
        "strengths": "",
        "weaknesses": ""
    });

    let response = app
        .oneshot(post_json("/api/summaries/generative", &payload))
        .await
        .unwrap();

    // Validation short-circuits, so the failing generator is never reached
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], summaries::MISSING_INPUT_MESSAGE);
}
