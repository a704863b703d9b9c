use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::summary::{KeywordSummarizer, Summary};
use crate::generation::GenerationError;

/// Fixed message shown when either passage is missing
pub const MISSING_INPUT_MESSAGE: &str = "강점과 약점 내용을 모두 입력해야 분석할 수 있습니다.";

/// Fixed message shown when the generative path fails
pub const GENERATION_FAILED_MESSAGE: &str = "요약 생성에 실패했습니다. 잠시 후 다시 시도해주세요.";

/// Request body for both summarization routes
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub strengths: String,
    pub weaknesses: String,
}

/// Response carrying the three summary sentences in order
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub lines: [String; 3],
}

impl From<&Summary> for SummaryResponse {
    fn from(summary: &Summary) -> Self {
        Self {
            lines: summary.lines().clone(),
        }
    }
}

/// Both passages must carry content before any summarizer runs
fn validate(req: &SummarizeRequest) -> Result<(), ApiError> {
    if req.strengths.trim().is_empty() || req.weaknesses.trim().is_empty() {
        return Err(ApiError::bad_request(MISSING_INPUT_MESSAGE));
    }
    Ok(())
}

/// Summarize with the local keyword heuristic
///
/// POST /api/summaries
pub async fn create_summary(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    validate(&req)?;

    let summarizer = KeywordSummarizer::new(state.tokenizer.clone());
    let summary = summarizer.summarize(&req.strengths, &req.weaknesses);

    Ok(Json(SummaryResponse::from(&summary)))
}

/// Summarize through the hosted generative model
///
/// POST /api/summaries/generative
pub async fn create_generative_summary(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    validate(&req)?;

    let generator = state.generator.as_ref().ok_or_else(|| {
        ApiError::service_unavailable(GENERATION_FAILED_MESSAGE)
            .with_reason("generator not configured")
    })?;

    let summary = generator
        .generate(&req.strengths, &req.weaknesses)
        .await
        .map_err(|e| {
            tracing::warn!("summary generation failed: {}", e);
            match e {
                GenerationError::MissingCredentials => {
                    ApiError::service_unavailable(GENERATION_FAILED_MESSAGE)
                }
                _ => ApiError::bad_gateway(GENERATION_FAILED_MESSAGE),
            }
            .with_reason(e.to_string())
        })?;

    Ok(Json(SummaryResponse::from(&summary)))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
