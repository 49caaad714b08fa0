//! Candidate selection for both game modes
//!
//! This module contains:
//! - Similarity scoring of a link title against the speedrun target
//! - Filtering and ranking of a page's outbound links into speedrun candidates
//! - Random picks (rabbit hole next link, speedrun start/target pair)

mod candidates;
mod scoring;

pub use candidates::{
    filter_speedrun_links, is_speedrun_candidate, pick_start_target, rank_candidates,
    starting_position, CandidatePolicy,
};
pub use scoring::{score_to_target, EXACT_MATCH_SCORE};

use rand::seq::SliceRandom;
use rand::Rng;

/// Picks a random link to follow on a right swipe, or None if there are none
pub fn pick_random_link<R: Rng + ?Sized>(links: &[String], rng: &mut R) -> Option<String> {
    links.choose(rng).cloned()
}

/// Removes and returns a random entry from `pool`
///
/// Order of the remaining entries is preserved.
pub fn take_random<R: Rng + ?Sized>(pool: &mut Vec<String>, rng: &mut R) -> Option<String> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(pool.remove(index))
}
