use tracing::debug;

use crate::config::ScoringConfig;
use crate::models::ComplianceReport;

const SHORT_TEXT_ISSUE: &str = "Resume text is very short.";

/// Static structural checks. Issues are reported in check order: length first,
/// then each section in configured order.
#[derive(Debug, Clone)]
pub struct ComplianceChecker {
    section_names: Vec<String>,
    min_chars: usize,
    short_text_penalty: f64,
    missing_section_penalty: f64,
}

impl ComplianceChecker {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            section_names: config
                .section_names
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            min_chars: config.min_resume_chars,
            short_text_penalty: config.short_text_penalty,
            missing_section_penalty: config.missing_section_penalty,
        }
    }

    pub fn check(&self, resume: &str) -> ComplianceReport {
        let mut issues = Vec::new();
        let mut score = 1.0_f64;

        if resume.chars().count() < self.min_chars {
            issues.push(SHORT_TEXT_ISSUE.to_string());
            score -= self.short_text_penalty;
        }

        let lowered = resume.to_lowercase();
        for section in &self.section_names {
            if !lowered.contains(section.as_str()) {
                issues.push(format!("Missing '{section}' section."));
                score -= self.missing_section_penalty;
            }
        }

        debug!(issues = issues.len(), "Compliance check complete");
        ComplianceReport {
            compliance_score: score.max(0.0),
            issues,
        }
    }
}
