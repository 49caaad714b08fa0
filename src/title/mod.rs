//! Article title handling for Wiki-Swipe
//!
//! This module provides href-to-title decoding, REST path encoding, and the
//! normalization/tokenization used when titles are compared and scored.

mod href;
mod normalize;

// Re-export main functions
pub use href::{display_title, same_article, title_from_href, title_path};
pub use normalize::{normalize_for_match, tokenize};

/// Returns true if two titles are the same once normalized for matching
///
/// This is the looser comparison used to decide whether a speedrun reached its
/// target: case, punctuation, and underscores are ignored.
///
/// # Examples
///
/// ```
/// use wiki_swipe::title::titles_match;
///
/// assert!(titles_match("Tesla,_Inc.", "Tesla, Inc."));
/// assert!(!titles_match("Mars", "Mars (mythology)"));
/// ```
pub fn titles_match(a: &str, b: &str) -> bool {
    normalize_for_match(a) == normalize_for_match(b)
}
