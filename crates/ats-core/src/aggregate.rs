use crate::config::ScoringWeights;
use crate::models::{ComponentScores, ScoreBreakdown};

/// Weighted overall score: 0.4·semantic + 0.3·keyword + 0.2·skills + 0.1·compliance
/// with the default weights.
///
/// Inputs are expected in [0, 1] and are not clamped; out-of-range values flow
/// through proportionally. Every output is rescaled to [0, 100] and rounded to
/// two decimals, half away from zero.
pub fn aggregate(
    weights: &ScoringWeights,
    semantic: f64,
    keyword: f64,
    skills: f64,
    compliance: f64,
) -> ScoreBreakdown {
    let overall = weights.similarity * semantic
        + weights.keyword * keyword
        + weights.skills * skills
        + weights.compliance * compliance;

    ScoreBreakdown {
        overall_score: to_percent(overall),
        breakdown: ComponentScores {
            semantic_similarity: to_percent(semantic),
            keyword_match: to_percent(keyword),
            skills_alignment: to_percent(skills),
            ats_compliance: to_percent(compliance),
        },
    }
}

fn to_percent(fraction: f64) -> f64 {
    (fraction * 100.0 * 100.0).round() / 100.0
}
