//! Similarity scoring between a candidate link and the speedrun target

use crate::title::{normalize_for_match, tokenize};
use std::collections::HashSet;

/// Score given to a candidate that is the target itself
pub const EXACT_MATCH_SCORE: i32 = 999;

/// Per shared word between candidate and target
const SHARED_TOKEN_SCORE: i32 = 10;

/// When the candidate title contains the whole target title
const CONTAINS_TARGET_SCORE: i32 = 45;

/// Per target word found anywhere inside the candidate title
const TARGET_SUBSTRING_SCORE: i32 = 2;

/// Candidate titles longer than this many words are penalized per extra word
const LONG_TITLE_WORDS: usize = 5;

/// Scores how promising `candidate` looks as a step toward `target`
///
/// # Scoring Rules
///
/// | Condition | Score |
/// |-----------|-------|
/// | Either title normalizes to empty | 0 (final) |
/// | Normalized titles are equal | 999 (final) |
/// | Each candidate word also in the target | +10 |
/// | Candidate contains the whole target | +45 |
/// | Each target word found inside the candidate | +2 |
/// | Each candidate word beyond five | -1 |
///
/// Repeated words count once per occurrence.
///
/// # Examples
///
/// ```
/// use wiki_swipe::select::score_to_target;
///
/// assert_eq!(score_to_target("Earth", "earth"), 999);
/// assert!(score_to_target("Moon landing", "Moon") > score_to_target("Sun", "Moon"));
/// ```
pub fn score_to_target(candidate: &str, target: &str) -> i32 {
    let c = normalize_for_match(candidate);
    let t = normalize_for_match(target);

    if c.is_empty() || t.is_empty() {
        return 0;
    }
    if c == t {
        return EXACT_MATCH_SCORE;
    }

    let candidate_tokens = tokenize(candidate);
    let target_tokens = tokenize(target);
    let target_set: HashSet<&str> = target_tokens.iter().map(String::as_str).collect();

    let mut score = 0;

    for word in &candidate_tokens {
        if target_set.contains(word.as_str()) {
            score += SHARED_TOKEN_SCORE;
        }
    }

    if c.contains(&t) {
        score += CONTAINS_TARGET_SCORE;
    }

    for word in &target_tokens {
        if c.contains(word.as_str()) {
            score += TARGET_SUBSTRING_SCORE;
        }
    }

    let extra_words = candidate_tokens.len().saturating_sub(LONG_TITLE_WORDS);
    score - i32::try_from(extra_words).unwrap_or(i32::MAX)
}
