use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::models::KeywordAnalysis;

/// Whitespace-token keyword matcher. Punctuation is kept, so `python,` and
/// `python` are different tokens.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    stop_words: HashSet<String>,
    min_keyword_length: usize,
    max_listed: usize,
}

impl KeywordMatcher {
    pub fn new(stop_words: &[String], min_keyword_length: usize, max_listed: usize) -> Self {
        Self {
            stop_words: stop_words.iter().map(|w| w.to_lowercase()).collect(),
            min_keyword_length,
            max_listed,
        }
    }

    /// Matched and missing lists are sorted ascending and truncated, so the same
    /// input always reports the same keywords.
    pub fn match_keywords(&self, resume: &str, jd: &str) -> KeywordAnalysis {
        let resume_tokens: HashSet<String> = tokens(resume).collect();
        let jd_keywords: BTreeSet<String> = tokens(jd)
            .filter(|t| t.chars().count() > self.min_keyword_length)
            .filter(|t| !self.stop_words.contains(t))
            .collect();

        let total = jd_keywords.len();
        let (matched, missing): (Vec<String>, Vec<String>) = jd_keywords
            .into_iter()
            .partition(|k| resume_tokens.contains(k));

        let match_percentage = if total == 0 {
            1.0
        } else {
            matched.len() as f64 / total as f64
        };
        debug!(
            keywords = total,
            matched = matched.len(),
            "Keyword match computed"
        );

        KeywordAnalysis {
            match_percentage,
            matched_keywords: matched.into_iter().take(self.max_listed).collect(),
            missing_keywords: missing.into_iter().take(self.max_listed).collect(),
        }
    }
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_KEYWORD_STOP_WORDS;

    fn matcher() -> KeywordMatcher {
        let words: Vec<String> = DEFAULT_KEYWORD_STOP_WORDS
            .iter()
            .map(|w| w.to_string())
            .collect();
        KeywordMatcher::new(&words, 3, 10)
    }

    #[test]
    fn test_identical_text_matches_fully() {
        let jd = "Looking for python engineer with distributed systems experience";
        let analysis = matcher().match_keywords(jd, jd);
        assert_eq!(analysis.match_percentage, 1.0);
        assert!(analysis.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_keyword_set_is_full_match() {
        let analysis = matcher().match_keywords("anything at all", "and the for");
        assert_eq!(analysis.match_percentage, 1.0);
        assert!(analysis.matched_keywords.is_empty());
        assert!(analysis.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_jd_is_full_match() {
        let analysis = matcher().match_keywords("rust engineer", "");
        assert_eq!(analysis.match_percentage, 1.0);
    }

    #[test]
    fn test_short_tokens_and_stop_words_excluded() {
        // "from" and "your" are stop words; "go" and "aws" are too short.
        let analysis = matcher().match_keywords("", "from your go aws kafka");
        assert_eq!(analysis.missing_keywords, vec!["kafka".to_string()]);
        assert_eq!(analysis.match_percentage, 0.0);
    }

    #[test]
    fn test_case_insensitive_and_punctuation_sensitive() {
        let analysis = matcher().match_keywords("PYTHON rust,", "python rust");
        assert_eq!(analysis.matched_keywords, vec!["python".to_string()]);
        assert_eq!(analysis.missing_keywords, vec!["rust".to_string()]);
        assert_eq!(analysis.match_percentage, 0.5);
    }

    #[test]
    fn test_duplicates_collapse() {
        let analysis = matcher().match_keywords("kafka", "kafka kafka kafka spark");
        assert_eq!(analysis.match_percentage, 0.5);
    }

    #[test]
    fn test_lists_are_sorted_and_capped() {
        let jd: Vec<String> = (0..15).map(|i| format!("skill{i:02}")).collect();
        let analysis = matcher().match_keywords("", &jd.join(" "));
        assert_eq!(analysis.missing_keywords.len(), 10);
        assert_eq!(analysis.missing_keywords[0], "skill00");
        assert_eq!(analysis.missing_keywords[9], "skill09");
        assert_eq!(analysis.match_percentage, 0.0);
    }
}
