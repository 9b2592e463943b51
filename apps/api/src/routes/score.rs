use std::sync::Arc;

use anyhow::anyhow;
use ats_core::AtsAnalysis;
use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub jd_text: String,
    /// Supplied by the caller; the service does not compute skills alignment.
    #[serde(default)]
    pub skills_alignment: f64,
}

/// POST /api/v1/score
///
/// Runs similarity, keyword matching and compliance concurrently on the
/// blocking pool, then aggregates. Empty texts are valid and score low, but
/// both text fields must be present.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<AtsAnalysis>, AppError> {
    let request: ScoreRequest = serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("invalid score request: {e}")))?;
    if !(0.0..=1.0).contains(&request.skills_alignment) {
        return Err(AppError::Validation(
            "skills_alignment must be between 0 and 1".to_string(),
        ));
    }

    let resume: Arc<str> = Arc::from(request.resume_text);
    let jd: Arc<str> = Arc::from(request.jd_text);

    let similarity = {
        let pipeline = Arc::clone(&state.pipeline);
        let (resume, jd) = (Arc::clone(&resume), Arc::clone(&jd));
        tokio::task::spawn_blocking(move || pipeline.similarity(&resume, &jd))
    };
    let keywords = {
        let pipeline = Arc::clone(&state.pipeline);
        let (resume, jd) = (Arc::clone(&resume), Arc::clone(&jd));
        tokio::task::spawn_blocking(move || pipeline.match_keywords(&resume, &jd))
    };
    let compliance = {
        let (pipeline, resume) = (Arc::clone(&state.pipeline), Arc::clone(&resume));
        tokio::task::spawn_blocking(move || pipeline.check_compliance(&resume))
    };

    let (similarity, keywords, compliance) = tokio::try_join!(similarity, keywords, compliance)
        .map_err(|e| AppError::Internal(anyhow!("scoring task failed: {e}")))?;

    Ok(Json(state.pipeline.assemble(
        similarity,
        keywords,
        compliance,
        request.skills_alignment,
    )))
}
