use serde::{Deserialize, Serialize};

/// Lexical overlap between the JD's significant terms and the résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub match_percentage: f64, // 0.0 – 1.0
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Structural red flags found in the résumé text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub compliance_score: f64, // 0.0 – 1.0
    pub issues: Vec<String>,
}

/// Component scores on the 0 – 100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub semantic_similarity: f64,
    pub keyword_match: f64,
    pub skills_alignment: f64,
    pub ats_compliance: f64,
}

/// Terminal output of the pipeline, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub overall_score: f64, // 0 – 100
    pub breakdown: ComponentScores,
}

/// Rolled-up score plus the per-stage detail it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub score: ScoreBreakdown,
    pub similarity: f64,
    pub keywords: KeywordAnalysis,
    pub compliance: ComplianceReport,
}
