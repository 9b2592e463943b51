use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use ats_core::{extract_text, ExtractError, ScoringPipeline};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use super::{parse_args, Tool};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileArgs {
    file_path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PairArgs {
    resume_text: String,
    jd_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResumeArgs {
    resume_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScoreArgs {
    semantic_score: f64,
    keyword_score: f64,
    skills_alignment: f64,
    ats_compliance: f64,
}

/// Reads résumés, but only from beneath `upload_root`.
pub struct ParseResumeTool {
    upload_root: PathBuf,
}

impl ParseResumeTool {
    pub fn new(upload_root: impl Into<PathBuf>) -> Self {
        ParseResumeTool {
            upload_root: upload_root.into(),
        }
    }
}

/// Resolves `requested` (relative paths are taken from the root) and checks
/// that, after following symlinks and `..`, it still lies under the root.
fn resolve_upload_path(root: &Path, requested: &Path) -> Result<PathBuf, AppError> {
    let root = root
        .canonicalize()
        .map_err(|e| AppError::Internal(anyhow!("upload directory unavailable: {e}")))?;
    let candidate = if requested.is_absolute() {
        requested.to_path_buf()
    } else {
        root.join(requested)
    };
    let resolved = candidate
        .canonicalize()
        .map_err(|_| ExtractError::FileNotFound(requested.to_path_buf()))?;

    if !resolved.starts_with(&root) {
        warn!(path = %requested.display(), "Rejected file path outside the upload directory");
        return Err(AppError::Validation(format!(
            "file_path '{}' is outside the upload directory",
            requested.display()
        )));
    }
    Ok(resolved)
}

#[async_trait]
impl Tool for ParseResumeTool {
    fn name(&self) -> &'static str {
        "parse_resume_tool"
    }

    fn description(&self) -> &'static str {
        "Extracts plain text from a PDF, DOCX or TXT resume at `file_path` inside the upload directory."
    }

    async fn invoke(&self, args: Value) -> Result<Value, AppError> {
        let args: FileArgs = parse_args(self.name(), args)?;
        let root = self.upload_root.clone();
        let text = tokio::task::spawn_blocking(move || -> Result<String, AppError> {
            let path = resolve_upload_path(&root, &args.file_path)?;
            Ok(extract_text(&path)?)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow!("extraction task failed: {e}")))??;
        Ok(json!({ "text": text }))
    }
}

pub struct SemanticSimilarityTool(pub Arc<ScoringPipeline>);

#[async_trait]
impl Tool for SemanticSimilarityTool {
    fn name(&self) -> &'static str {
        "semantic_similarity_tool"
    }

    fn description(&self) -> &'static str {
        "TF-IDF cosine similarity (0-1) between `resume_text` and `jd_text`."
    }

    async fn invoke(&self, args: Value) -> Result<Value, AppError> {
        let args: PairArgs = parse_args(self.name(), args)?;
        let similarity = self.0.similarity(&args.resume_text, &args.jd_text);
        Ok(json!({ "semantic_similarity": similarity }))
    }
}

pub struct KeywordMatchTool(pub Arc<ScoringPipeline>);

#[async_trait]
impl Tool for KeywordMatchTool {
    fn name(&self) -> &'static str {
        "keyword_match_tool"
    }

    fn description(&self) -> &'static str {
        "Matched and missing job-description keywords for `resume_text` against `jd_text`."
    }

    async fn invoke(&self, args: Value) -> Result<Value, AppError> {
        let args: PairArgs = parse_args(self.name(), args)?;
        let analysis = self.0.match_keywords(&args.resume_text, &args.jd_text);
        Ok(serde_json::to_value(analysis).map_err(anyhow::Error::from)?)
    }
}

pub struct AtsCheckerTool(pub Arc<ScoringPipeline>);

#[async_trait]
impl Tool for AtsCheckerTool {
    fn name(&self) -> &'static str {
        "ats_checker_tool"
    }

    fn description(&self) -> &'static str {
        "Structural ATS compliance score and issues for `resume_text`."
    }

    async fn invoke(&self, args: Value) -> Result<Value, AppError> {
        let args: ResumeArgs = parse_args(self.name(), args)?;
        let report = self.0.check_compliance(&args.resume_text);
        Ok(serde_json::to_value(report).map_err(anyhow::Error::from)?)
    }
}

pub struct ScoringTool(pub Arc<ScoringPipeline>);

#[async_trait]
impl Tool for ScoringTool {
    fn name(&self) -> &'static str {
        "scoring_tool"
    }

    fn description(&self) -> &'static str {
        "Weighted overall ATS score (0-100) from four component scores in 0-1."
    }

    async fn invoke(&self, args: Value) -> Result<Value, AppError> {
        let args: ScoreArgs = parse_args(self.name(), args)?;
        let breakdown = self.0.aggregate(
            args.semantic_score,
            args.keyword_score,
            args.skills_alignment,
            args.ats_compliance,
        );
        Ok(serde_json::to_value(breakdown).map_err(anyhow::Error::from)?)
    }
}
