use serde::{Deserialize, Serialize};

use crate::stop_words::ENGLISH_STOP_WORDS;

/// Stop words dropped from the JD before keyword matching.
pub const DEFAULT_KEYWORD_STOP_WORDS: &[&str] = &[
    "and", "the", "with", "for", "from", "that", "this", "our", "your",
];

/// Section headings the compliance check expects to find somewhere in the text.
pub const DEFAULT_SECTION_NAMES: &[&str] = &["experience", "education", "skills", "projects"];

/// Aggregation weights. The defaults sum to 1.0 so the overall score stays in [0, 100]
/// whenever every component is in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub similarity: f64,
    pub keyword: f64,
    pub skills: f64,
    pub compliance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            similarity: 0.4,
            keyword: 0.3,
            skills: 0.2,
            compliance: 0.1,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.similarity + self.keyword + self.skills + self.compliance
    }
}

/// Policy constants for every scoring stage. Missing fields fall back to defaults,
/// so a partial JSON override is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    /// Keyword matcher stop set.
    pub stop_words: Vec<String>,
    /// Stop words removed before TF-IDF vectorization.
    pub similarity_stop_words: Vec<String>,
    pub section_names: Vec<String>,
    /// JD tokens must be strictly longer than this (in chars) to count as keywords.
    pub min_keyword_length: usize,
    pub max_listed_keywords: usize,
    pub min_resume_chars: usize,
    pub short_text_penalty: f64,
    pub missing_section_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            stop_words: to_owned_list(DEFAULT_KEYWORD_STOP_WORDS),
            similarity_stop_words: to_owned_list(ENGLISH_STOP_WORDS),
            section_names: to_owned_list(DEFAULT_SECTION_NAMES),
            min_keyword_length: 3,
            max_listed_keywords: 10,
            min_resume_chars: 500,
            short_text_penalty: 0.2,
            missing_section_penalty: 0.1,
        }
    }
}

fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
