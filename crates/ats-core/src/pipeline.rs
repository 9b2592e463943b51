use tracing::info;

use crate::aggregate::aggregate;
use crate::compliance::ComplianceChecker;
use crate::config::ScoringConfig;
use crate::keywords::KeywordMatcher;
use crate::models::{AtsAnalysis, ComplianceReport, KeywordAnalysis, ScoreBreakdown};
use crate::similarity::SimilarityScorer;

/// All scoring stages built once from a [`ScoringConfig`].
///
/// Immutable after construction, so a single instance can be shared across
/// threads and the three text stages can run concurrently.
#[derive(Debug, Clone)]
pub struct ScoringPipeline {
    config: ScoringConfig,
    similarity: SimilarityScorer,
    keywords: KeywordMatcher,
    compliance: ComplianceChecker,
}

impl ScoringPipeline {
    pub fn new(config: ScoringConfig) -> Self {
        let similarity = SimilarityScorer::new(&config.similarity_stop_words);
        let keywords = KeywordMatcher::new(
            &config.stop_words,
            config.min_keyword_length,
            config.max_listed_keywords,
        );
        let compliance = ComplianceChecker::from_config(&config);
        Self {
            config,
            similarity,
            keywords,
            compliance,
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn similarity(&self, resume: &str, jd: &str) -> f64 {
        self.similarity.similarity(resume, jd)
    }

    pub fn match_keywords(&self, resume: &str, jd: &str) -> KeywordAnalysis {
        self.keywords.match_keywords(resume, jd)
    }

    pub fn check_compliance(&self, resume: &str) -> ComplianceReport {
        self.compliance.check(resume)
    }

    pub fn aggregate(
        &self,
        semantic: f64,
        keyword: f64,
        skills: f64,
        compliance: f64,
    ) -> ScoreBreakdown {
        aggregate(&self.config.weights, semantic, keyword, skills, compliance)
    }

    /// Combines already-computed stage results. Callers that run the stages
    /// concurrently join them here.
    pub fn assemble(
        &self,
        similarity: f64,
        keywords: KeywordAnalysis,
        compliance: ComplianceReport,
        skills_alignment: f64,
    ) -> AtsAnalysis {
        let score = self.aggregate(
            similarity,
            keywords.match_percentage,
            skills_alignment,
            compliance.compliance_score,
        );
        info!(overall = score.overall_score, "ATS score computed");
        AtsAnalysis {
            score,
            similarity,
            keywords,
            compliance,
        }
    }

    /// Runs every text stage in sequence and aggregates.
    pub fn analyze(&self, resume: &str, jd: &str, skills_alignment: f64) -> AtsAnalysis {
        let similarity = self.similarity(resume, jd);
        let keywords = self.match_keywords(resume, jd);
        let compliance = self.check_compliance(resume);
        self.assemble(similarity, keywords, compliance, skills_alignment)
    }
}

impl Default for ScoringPipeline {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_degrade_to_defaults() {
        let analysis = ScoringPipeline::default().analyze("", "", 0.0);
        assert_eq!(analysis.similarity, 0.0);
        assert_eq!(analysis.keywords.match_percentage, 1.0);
        assert!((analysis.compliance.compliance_score - 0.4).abs() < 1e-9);
        // 30 * 1.0 + 10 * 0.4
        assert!((analysis.score.overall_score - 34.0).abs() < 0.01);
    }

    #[test]
    fn test_custom_sections_are_used() {
        let config = ScoringConfig {
            section_names: vec!["Summary".to_string()],
            min_resume_chars: 0,
            ..ScoringConfig::default()
        };
        let pipeline = ScoringPipeline::new(config);
        assert!(pipeline.check_compliance("SUMMARY: builder").issues.is_empty());
        assert_eq!(
            pipeline.check_compliance("builder").issues,
            vec!["Missing 'summary' section."]
        );
    }

    #[test]
    fn test_pipeline_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoringPipeline>();
    }
}
