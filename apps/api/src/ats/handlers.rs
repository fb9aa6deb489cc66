//! Axum route handlers for the ATS API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::analysis::{analyze, AtsAnalysis};
use crate::ats::keywords::{extract_keywords, KeywordCount, KeywordCounts};
use crate::ats::scoring::ScoreReport;
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume: ResumeRecord,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub counts: Vec<KeywordCount>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/analyze
///
/// Scores the caller's resume against a job description and returns the
/// report, score band, advice, and top-keyword frequency comparison.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AtsAnalysis>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let analysis = analyze(
        state.scorer.as_ref(),
        &request.resume,
        &request.job_description,
        &state.analysis,
    );

    info!(
        score = analysis.report.score,
        band = ?analysis.band,
        missing = analysis.report.missing_keywords.len(),
        "ATS analysis served"
    );

    Ok(Json(analysis))
}

/// POST /api/v1/ats/score
///
/// Raw text-vs-text scoring. An empty job description yields the zero report.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreReport> {
    Json(
        state
            .scorer
            .score(&request.resume_text, &request.job_description),
    )
}

/// POST /api/v1/ats/keywords
pub async fn handle_keywords(Json(request): Json<KeywordsRequest>) -> Json<KeywordsResponse> {
    let keywords = extract_keywords(&request.text);
    let counts = KeywordCounts::from_keywords(keywords.iter().cloned()).to_entries();
    Json(KeywordsResponse { keywords, counts })
}
