//! Mock matching module
//!
//! Holds the static candidate pool and the keyword filter that stands in
//! for real server-side matching. Filtering produces a view over the
//! pool; nothing here is ever mutated after startup.

use crate::Result;
use serde::{Deserialize, Serialize};

/// Keyword tokens shorter than this are ignored by the filter
pub const MIN_KEYWORD_LEN: usize = 4;

/// A mock user record available for matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique identifier within the pool
    pub id: String,
    /// Anonymous display name
    pub username: String,
    /// What this candidate wants to talk about
    pub topic: String,
}

const SEED_JSON: &str = include_str!("seed.json");

/// Load the built-in candidate pool
pub fn seed_candidates() -> Result<Vec<Candidate>> {
    let candidates: Vec<Candidate> = serde_json::from_str(SEED_JSON)?;
    Ok(candidates)
}

/// Filter the pool by topic keywords.
///
/// The topic is split on whitespace and tokens shorter than
/// [`MIN_KEYWORD_LEN`] characters are dropped. A candidate matches when
/// any remaining token is a case-insensitive substring of its topic.
/// Pool order is preserved; an empty result is a normal outcome.
pub fn filter_candidates(topic: &str, pool: &[Candidate]) -> Vec<Candidate> {
    let keywords: Vec<String> = topic
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
        .map(|word| word.to_lowercase())
        .collect();

    pool.iter()
        .filter(|candidate| {
            let candidate_topic = candidate.topic.to_lowercase();
            keywords
                .iter()
                .any(|keyword| candidate_topic.contains(keyword))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_pool_parses() {
        let pool = seed_candidates().expect("embedded seed data should parse");
        assert_eq!(pool.len(), 4);
        assert!(pool.iter().all(|c| !c.username.is_empty()));
        assert!(pool.iter().all(|c| !c.topic.is_empty()));
    }

    #[test]
    fn test_filter_matches_long_tokens_only() {
        let pool = seed_candidates().unwrap();
        // "feeling" is kept (len > 3), "so" and "sad" are dropped.
        let matches = filter_candidates("feeling lonely", &pool);
        assert!(!matches.is_empty());
        assert!(matches
            .iter()
            .all(|c| c.topic.to_lowercase().contains("feeling")
                || c.topic.to_lowercase().contains("lonely")));

        let matches = filter_candidates("so sad", &pool);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let pool = seed_candidates().unwrap();
        let matches = filter_candidates("BURNOUT", &pool);
        assert_eq!(matches.len(), 1);
        assert!(matches[0].topic.contains("burnout"));
    }

    #[test]
    fn test_filter_preserves_pool_order() {
        let pool = seed_candidates().unwrap();
        let matches = filter_candidates("overwhelmed burnout career", &pool);
        assert!(matches.len() >= 2);
        let positions: Vec<usize> = matches
            .iter()
            .map(|m| pool.iter().position(|c| c.id == m.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_topic_matches_nothing() {
        let pool = seed_candidates().unwrap();
        assert!(filter_candidates("", &pool).is_empty());
        assert!(filter_candidates("   ", &pool).is_empty());
    }
}
