use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context};
use ats_core::extract_text_as;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub filename: String,
    pub text: String,
}

/// POST /api/v1/resumes/extract
///
/// Multipart upload with a `resume` file field. The upload is spooled to a
/// temporary file in the upload directory carrying the declared extension,
/// extracted, then deleted.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_owned)
            .ok_or_else(|| AppError::Validation("resume field must be a file".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let extension = Path::new(&filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_string();

        info!(filename = %filename, bytes = bytes.len(), "Resume uploaded");

        let upload_dir = state.config.upload_dir.clone();
        let text = tokio::task::spawn_blocking(move || -> Result<String, AppError> {
            let mut spool = tempfile::Builder::new()
                .prefix("resume-")
                .suffix(&format!(".{extension}"))
                .tempfile_in(&upload_dir)
                .context("Failed to create upload spool file")?;
            spool
                .write_all(&bytes)
                .context("Failed to write upload spool file")?;
            Ok(extract_text_as(spool.path(), &extension)?)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow!("extraction task failed: {e}")))??;

        return Ok(Json(ExtractResponse { filename, text }));
    }

    Err(AppError::Validation(format!(
        "multipart body must contain a '{RESUME_FIELD}' file field"
    )))
}
