//! TF-IDF cosine similarity over a two-document corpus.
//!
//! IDF statistics come only from the résumé/JD pair being compared:
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1` with `n = 2`, term frequency is
//! the raw count, and the result is the cosine of the two weighted vectors.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::debug;

const CORPUS_SIZE: f64 = 2.0;
const MIN_TOKEN_CHARS: usize = 2;

#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    stop_words: HashSet<String>,
}

impl SimilarityScorer {
    pub fn new(stop_words: &[String]) -> Self {
        Self {
            stop_words: stop_words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Returns a value in [0, 1]. Empty input on either side, or no surviving
    /// vocabulary after stop-word removal, yields exactly 0.0.
    pub fn similarity(&self, resume: &str, jd: &str) -> f64 {
        if resume.is_empty() || jd.is_empty() {
            return 0.0;
        }

        let resume_counts = self.term_counts(resume);
        let jd_counts = self.term_counts(jd);

        let vocabulary: BTreeSet<&str> = resume_counts
            .keys()
            .chain(jd_counts.keys())
            .map(String::as_str)
            .collect();

        let mut dot = 0.0_f64;
        let mut resume_norm_sq = 0.0_f64;
        let mut jd_norm_sq = 0.0_f64;

        for term in vocabulary {
            let tf_resume = resume_counts.get(term).copied().unwrap_or(0.0);
            let tf_jd = jd_counts.get(term).copied().unwrap_or(0.0);
            let df = u8::from(tf_resume > 0.0) + u8::from(tf_jd > 0.0);
            let idf = ((1.0 + CORPUS_SIZE) / (1.0 + f64::from(df))).ln() + 1.0;

            let w_resume = tf_resume * idf;
            let w_jd = tf_jd * idf;
            dot += w_resume * w_jd;
            resume_norm_sq += w_resume * w_resume;
            jd_norm_sq += w_jd * w_jd;
        }

        if resume_norm_sq == 0.0 || jd_norm_sq == 0.0 {
            debug!("No shared vocabulary after stop-word removal");
            return 0.0;
        }

        // sqrt(a * b) keeps identical inputs at exactly 1.0 and is symmetric.
        (dot / (resume_norm_sq * jd_norm_sq).sqrt()).clamp(0.0, 1.0)
    }

    /// Lower-cased word tokens of at least two word characters, minus stop words.
    fn term_counts(&self, text: &str) -> BTreeMap<String, f64> {
        let lowered = text.to_lowercase();
        let mut counts = BTreeMap::new();
        for token in lowered
            .split(|c: char| !is_word_char(c))
            .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|t| !self.stop_words.contains(*t))
        {
            *counts.entry(token.to_string()).or_insert(0.0) += 1.0;
        }
        counts
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
