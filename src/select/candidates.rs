//! Speedrun candidate filtering, ranking, and start/target selection

use crate::config::SpeedrunConfig;
use crate::select::scoring::score_to_target;
use crate::title::same_article;
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// How a ranked candidate list is assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidatePolicy {
    /// Best-scoring candidates kept (shuffled) at the front
    pub top: usize,

    /// Random sample of the remainder appended after the top block
    pub extra: usize,

    /// The initial position is drawn from this many leading candidates
    pub start_window: usize,
}

impl Default for CandidatePolicy {
    fn default() -> Self {
        Self {
            top: 40,
            extra: 40,
            start_window: 12,
        }
    }
}

impl From<&SpeedrunConfig> for CandidatePolicy {
    fn from(config: &SpeedrunConfig) -> Self {
        Self {
            top: config.top_candidates,
            extra: config.extra_candidates,
            start_window: config.start_window,
        }
    }
}

/// Returns true if a linked title is worth offering as a speedrun step
///
/// # Exclusions
///
/// - Empty titles and the current article itself
/// - Namespaced pages (`File:`, `Category:`, ...)
/// - Titles that start with a number followed by whitespace ("1998 in film")
/// - "List of ..." pages
pub fn is_speedrun_candidate(title: &str, current: &str) -> bool {
    !title.is_empty()
        && !same_article(title, current)
        && !title.contains(':')
        && !starts_with_number_word(title)
        && !title.starts_with("List of ")
}

/// Matches `^\d+\s`
fn starts_with_number_word(title: &str) -> bool {
    let digits = title.chars().take_while(char::is_ascii_digit).count();
    digits > 0
        && title[digits..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace)
}

/// Drops titles that should never be offered as speedrun steps
pub fn filter_speedrun_links(titles: Vec<String>, current: &str) -> Vec<String> {
    titles
        .into_iter()
        .filter(|t| is_speedrun_candidate(t, current))
        .collect()
}

/// Builds the candidate list shown while swiping in speedrun mode
///
/// Titles are filtered, scored against the target, and stably sorted best
/// first. The best `policy.top` are shuffled and kept at the front so the best
/// link is not always in the same place; then a shuffled sample of up to
/// `policy.extra` of the remaining titles follows.
pub fn rank_candidates<R: Rng + ?Sized>(
    titles: Vec<String>,
    current: &str,
    target: &str,
    policy: &CandidatePolicy,
    rng: &mut R,
) -> Vec<String> {
    let mut scored: Vec<(String, i32)> = filter_speedrun_links(titles, current)
        .into_iter()
        .map(|t| {
            let score = score_to_target(&t, target);
            (t, score)
        })
        .collect();

    // Stable: equal scores keep API order
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut rest: Vec<String> = scored.into_iter().map(|(t, _)| t).collect();
    let split = policy.top.min(rest.len());
    let mut top: Vec<String> = rest.drain(..split).collect();

    top.shuffle(rng);
    rest.shuffle(rng);
    rest.truncate(policy.extra);

    top.extend(rest);
    top
}

/// Picks the first candidate position, near the front of the list
///
/// Returns 0 for an empty list.
pub fn starting_position<R: Rng + ?Sized>(
    len: usize,
    policy: &CandidatePolicy,
    rng: &mut R,
) -> usize {
    if len == 0 {
        return 0;
    }
    let window = policy.start_window.clamp(1, len);
    rng.gen_range(0..window)
}

/// Picks two distinct entries of `titles` as a speedrun start and target
///
/// Returns None if fewer than two titles are available.
pub fn pick_start_target<R: Rng + ?Sized>(
    titles: &[String],
    rng: &mut R,
) -> Option<(String, String)> {
    if titles.len() < 2 {
        return None;
    }
    let picked = index::sample(rng, titles.len(), 2);
    Some((
        titles[picked.index(0)].clone(),
        titles[picked.index(1)].clone(),
    ))
}
