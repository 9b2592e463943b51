//! ATS scoring core.
//!
//! Turns a résumé and a job description into a weighted 0–100 compatibility
//! score. Every stage is a pure function over plain text except the extractor,
//! which reads the uploaded document from disk.
//!
//! Stage order: extract → {similarity, keywords, compliance} → aggregate.

pub mod aggregate;
pub mod compliance;
pub mod config;
pub mod error;
pub mod extract;
pub mod keywords;
pub mod models;
pub mod pipeline;
pub mod similarity;
pub mod stop_words;

pub use aggregate::aggregate;
pub use compliance::ComplianceChecker;
pub use config::{ScoringConfig, ScoringWeights};
pub use error::ExtractError;
pub use extract::{extract_bytes, extract_text, extract_text_as, DocumentFormat};
pub use keywords::KeywordMatcher;
pub use models::{AtsAnalysis, ComplianceReport, ComponentScores, KeywordAnalysis, ScoreBreakdown};
pub use pipeline::ScoringPipeline;
pub use similarity::SimilarityScorer;
