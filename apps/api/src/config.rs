use std::path::PathBuf;

use anyhow::{Context, Result};
use ats_core::ScoringConfig;

/// Service configuration loaded from environment variables.
/// Every field has a default; no credentials are needed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub request_timeout_secs: u64,
    pub max_upload_bytes: usize,
    /// Uploads are spooled here, and `parse_resume_tool` reads nothing outside it.
    pub upload_dir: PathBuf,
    pub scoring: ScoringConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            request_timeout_secs: 30,
            max_upload_bytes: 10 * 1024 * 1024,
            upload_dir: std::env::temp_dir().join("ats-uploads"),
            scoring: ScoringConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            scoring: load_scoring_config()?,
        })
    }
}

/// `SCORING_CONFIG` names a JSON file of overrides; individual `ATS_*` vars win over it.
fn load_scoring_config() -> Result<ScoringConfig> {
    let mut scoring = match std::env::var("SCORING_CONFIG") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read scoring config '{path}'"))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Scoring config '{path}' is not valid JSON"))?
        }
        Err(_) => ScoringConfig::default(),
    };

    let weights = &mut scoring.weights;
    weights.similarity = parse_env("ATS_SIMILARITY_WEIGHT", weights.similarity)?;
    weights.keyword = parse_env("ATS_KEYWORD_WEIGHT", weights.keyword)?;
    weights.skills = parse_env("ATS_SKILLS_WEIGHT", weights.skills)?;
    weights.compliance = parse_env("ATS_COMPLIANCE_WEIGHT", weights.compliance)?;

    if let Ok(raw) = std::env::var("ATS_STOP_WORDS") {
        scoring.stop_words = split_list(&raw);
    }
    if let Ok(raw) = std::env::var("ATS_SECTION_NAMES") {
        scoring.section_names = split_list(&raw);
    }

    Ok(scoring)
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_blanks() {
        assert_eq!(
            split_list(" Experience, skills ,,Projects "),
            vec!["experience", "skills", "projects"]
        );
    }

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: u64 = parse_env("ATS_API_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.upload_dir.ends_with("ats-uploads"));
        assert_eq!(config.scoring, ScoringConfig::default());
    }
}
