pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::ats::handlers as ats;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/analyze", post(ats::handle_analyze))
        .route("/api/v1/ats/score", post(ats::handle_score))
        .route("/api/v1/ats/keywords", post(ats::handle_keywords))
        // Resume API
        .route("/api/v1/resume/text", post(resume::handle_resume_text))
        .route("/api/v1/resume/summary", post(resume::handle_summary))
        .route("/api/v1/resume/import", post(resume::handle_import))
        .route(
            "/api/v1/resume/import/:section",
            post(resume::handle_import_section),
        )
        .route("/api/v1/resume/upload", post(resume::handle_upload))
        .route("/api/v1/resume/export", post(resume::handle_export))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
