//! Speedrun mode: timed navigation from a start article to a target
//!
//! The player stands on the current article and browses its outbound links
//! as candidates. Swiping left previews the next candidate; swiping right
//! accepts the candidate on screen and moves there. Reaching the target ends
//! the run and freezes the clock.

use crate::select::{pick_start_target, rank_candidates, starting_position, CandidatePolicy};
use crate::state::SwipeOutcome;
use crate::title::{same_article, titles_match};
use rand::Rng;
use std::time::{Duration, Instant};

/// What the speedrun card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedrunView {
    /// The article the player is standing on
    #[default]
    Current,

    /// A candidate link being previewed
    Candidate,
}

/// One speedrun attempt
#[derive(Debug, Clone)]
pub struct Speedrun {
    start: String,
    target: String,
    current: String,

    candidates: Vec<String>,
    /// Title the candidates were fetched for
    candidates_for: Option<String>,
    position: usize,
    view: SpeedrunView,

    skips: u32,
    path: Vec<String>,
    started_at: Instant,
    finished_after: Option<Duration>,
}

impl Speedrun {
    /// Starts a run from `start` to `target`; the clock starts now
    pub fn new(start: impl Into<String>, target: impl Into<String>) -> Self {
        let start = start.into();
        Self {
            current: start.clone(),
            path: vec![start.clone()],
            start,
            target: target.into(),
            candidates: Vec::new(),
            candidates_for: None,
            position: 0,
            view: SpeedrunView::Current,
            skips: 0,
            started_at: Instant::now(),
            finished_after: None,
        }
    }

    /// Starts a run between two distinct random titles of `pool`
    ///
    /// Returns None if the pool has fewer than two titles.
    pub fn random<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Option<Self> {
        let (start, target) = pick_start_target(pool, rng)?;
        tracing::info!("New speedrun: '{}' -> '{}'", start, target);
        Some(Self::new(start, target))
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn view(&self) -> SpeedrunView {
        self.view
    }

    pub fn skips(&self) -> u32 {
        self.skips
    }

    /// Articles stood on so far, starting with the start article
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn is_finished(&self) -> bool {
        self.finished_after.is_some()
    }

    /// Time since the run started, frozen once the target is reached
    pub fn elapsed(&self) -> Duration {
        self.finished_after
            .unwrap_or_else(|| self.started_at.elapsed())
    }

    /// Title the card shows: the previewed candidate, or the current article
    pub fn display_title(&self) -> &str {
        match self.view {
            SpeedrunView::Candidate => self
                .candidates
                .get(self.position)
                .map(String::as_str)
                .unwrap_or(&self.current),
            SpeedrunView::Current => &self.current,
        }
    }

    /// Returns true if candidates for the current article are still missing
    pub fn needs_candidates(&self) -> bool {
        !self.is_finished() && self.candidates_for.as_deref() != Some(self.current.as_str())
    }

    /// Installs the outbound links of `for_title` as ranked candidates
    ///
    /// Links for any title other than the current one are stale and ignored,
    /// as are links arriving after the run finished. The view does not change,
    /// so the card stays on the current article until the player swipes left.
    pub fn set_candidates<R: Rng + ?Sized>(
        &mut self,
        for_title: &str,
        links: Vec<String>,
        policy: &CandidatePolicy,
        rng: &mut R,
    ) -> bool {
        if self.is_finished() || !same_article(for_title, &self.current) {
            tracing::debug!("Ignoring stale candidates for '{}'", for_title);
            return false;
        }

        self.candidates = rank_candidates(links, &self.current, &self.target, policy, rng);
        self.position = starting_position(self.candidates.len(), policy, rng);
        self.candidates_for = Some(self.current.clone());

        tracing::debug!(
            "{} candidates for '{}', starting at {}",
            self.candidates.len(),
            self.current,
            self.position
        );
        true
    }

    /// Previews the next candidate
    pub fn swipe_left(&mut self) -> SwipeOutcome {
        if self.is_finished() {
            return SwipeOutcome::Ignored;
        }
        self.skips += 1;

        if self.candidates.is_empty() {
            return SwipeOutcome::Stayed;
        }
        self.view = SpeedrunView::Candidate;
        self.position = (self.position + 1) % self.candidates.len();
        SwipeOutcome::Moved
    }

    /// Accepts the candidate at the current position
    pub fn swipe_right(&mut self) -> SwipeOutcome {
        if self.is_finished() {
            return SwipeOutcome::Ignored;
        }
        let Some(chosen) = self.candidates.get(self.position).cloned() else {
            return SwipeOutcome::Stayed;
        };

        tracing::debug!("Speedrun step: '{}' -> '{}'", self.current, chosen);
        self.current = chosen.clone();
        self.view = SpeedrunView::Current;
        self.path.push(chosen);

        self.candidates.clear();
        self.candidates_for = None;
        self.position = 0;

        if titles_match(&self.current, &self.target) {
            let elapsed = self.started_at.elapsed();
            self.finished_after = Some(elapsed);
            tracing::info!(
                "Reached '{}' in {:.2}s ({} articles)",
                self.target,
                elapsed.as_secs_f64(),
                self.path.len()
            );
            return SwipeOutcome::Finished;
        }
        SwipeOutcome::Moved
    }

    /// Moves past a candidate whose article failed to load
    ///
    /// Only applies while previewing; a failed current article leaves the
    /// player where they are.
    pub fn on_load_failed(&mut self, title: &str) {
        if !same_article(title, self.display_title()) {
            return;
        }
        if self.view == SpeedrunView::Candidate && !self.candidates.is_empty() {
            self.position = (self.position + 1) % self.candidates.len();
        }
    }
}
