//! Game session: the active mode plus the state of both modes

use crate::config::{defaults, Config};
use crate::output::RunSummary;
use crate::select::CandidatePolicy;
use crate::state::{Mode, RabbitHole, Speedrun, SwipeDirection, SwipeOutcome};
use crate::title::same_article;
use rand::Rng;

/// Everything that decides which article is on screen
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    steps: u32,
    /// Steps taken when the speedrun reached its target
    finished_steps: Option<u32>,
    rabbit_hole: RabbitHole,
    speedrun: Speedrun,
    titles: Vec<String>,
    policy: CandidatePolicy,
}

impl Session {
    /// Creates a session in `mode`
    ///
    /// A speedrun is always prepared so that the HUD has something to show;
    /// it is restarted whenever speedrun mode is entered.
    pub fn new<R: Rng + ?Sized>(config: &Config, mode: Mode, rng: &mut R) -> Self {
        let titles = config.speedrun.titles.clone();
        let speedrun = new_run(&titles, rng);

        Self {
            mode,
            steps: 0,
            finished_steps: None,
            rabbit_hole: RabbitHole::new(&config.rabbit_hole),
            speedrun,
            titles,
            policy: CandidatePolicy::from(&config.speedrun),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Swipes made in the current mode since it was last (re)started
    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn rabbit_hole(&self) -> &RabbitHole {
        &self.rabbit_hole
    }

    pub fn speedrun(&self) -> &Speedrun {
        &self.speedrun
    }

    /// Returns true if swipes are currently ignored (a finished speedrun)
    pub fn is_locked(&self) -> bool {
        self.mode == Mode::Speedrun && self.speedrun.is_finished()
    }

    /// Title of the article on screen
    pub fn display_title(&self) -> &str {
        match self.mode {
            Mode::RabbitHole => self.rabbit_hole.title(),
            Mode::Speedrun => self.speedrun.display_title(),
        }
    }

    /// Applies a swipe to the active mode
    ///
    /// Every swipe the mode accepts counts as a step, even one that leaves the
    /// card where it is.
    pub fn swipe<R: Rng + ?Sized>(&mut self, direction: SwipeDirection, rng: &mut R) -> SwipeOutcome {
        let outcome = match (self.mode, direction) {
            (Mode::RabbitHole, SwipeDirection::Left) => self.rabbit_hole.swipe_left(rng),
            (Mode::RabbitHole, SwipeDirection::Right) => self.rabbit_hole.swipe_right(rng),
            (Mode::Speedrun, SwipeDirection::Left) => self.speedrun.swipe_left(),
            (Mode::Speedrun, SwipeDirection::Right) => self.speedrun.swipe_right(),
        };

        if outcome != SwipeOutcome::Ignored {
            self.steps += 1;
        }
        if outcome == SwipeOutcome::Finished {
            self.finished_steps = Some(self.steps);
        }
        tracing::debug!("Swipe {:?} in {}: {:?}", direction, self.mode, outcome);
        outcome
    }

    /// Switches mode; entering speedrun starts a fresh run
    ///
    /// Rabbit hole state survives a trip through speedrun mode. Leaving
    /// speedrun abandons the run, finished or not.
    pub fn set_mode<R: Rng + ?Sized>(&mut self, mode: Mode, rng: &mut R) {
        if mode == self.mode {
            return;
        }
        tracing::info!("Switching to {} mode", mode.label());
        self.mode = mode;
        match mode {
            Mode::Speedrun => self.restart(rng),
            Mode::RabbitHole => self.finished_steps = None,
        }
    }

    /// Starts a new random speedrun and resets the step counter
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.speedrun = new_run(&self.titles, rng);
        self.steps = 0;
        self.finished_steps = None;
    }

    /// Starts a speedrun between two given titles and resets the step counter
    pub fn restart_with(&mut self, start: &str, target: &str) {
        tracing::info!("New speedrun: '{}' -> '{}'", start, target);
        self.speedrun = Speedrun::new(start, target);
        self.steps = 0;
        self.finished_steps = None;
    }

    /// Records the eligible links of a loaded article
    ///
    /// Returns false if `title` is no longer on screen; the result is then
    /// discarded without touching any state.
    pub fn on_page_loaded<R: Rng + ?Sized>(
        &mut self,
        title: &str,
        links: Vec<String>,
        rng: &mut R,
    ) -> bool {
        if !same_article(title, self.display_title()) {
            tracing::debug!("Discarding stale page load for '{}'", title);
            return false;
        }
        match self.mode {
            Mode::RabbitHole => self.rabbit_hole.on_page_loaded(title, links, rng),
            Mode::Speedrun => true,
        }
    }

    /// Reacts to a failed article load of `title`
    pub fn on_load_failed(&mut self, title: &str) {
        if !same_article(title, self.display_title()) {
            return;
        }
        match self.mode {
            Mode::RabbitHole => self.rabbit_hole.on_load_failed(title),
            Mode::Speedrun => self.speedrun.on_load_failed(title),
        }
    }

    /// Title whose outbound links the speedrun still needs, if any
    pub fn needs_candidates(&self) -> Option<String> {
        (self.mode == Mode::Speedrun && self.speedrun.needs_candidates())
            .then(|| self.speedrun.current().to_string())
    }

    /// Feeds the outbound links of `for_title` to the speedrun
    pub fn set_candidates<R: Rng + ?Sized>(
        &mut self,
        for_title: &str,
        links: Vec<String>,
        rng: &mut R,
    ) -> bool {
        if self.mode != Mode::Speedrun {
            return false;
        }
        self.speedrun.set_candidates(for_title, links, &self.policy, rng)
    }

    /// Result of the speedrun, once it is finished
    ///
    /// Only available while speedrun mode is active.
    pub fn run_summary(&self) -> Option<RunSummary> {
        if self.mode != Mode::Speedrun || !self.speedrun.is_finished() {
            return None;
        }
        let steps = self.finished_steps?;
        let skips = self.speedrun.skips();
        Some(RunSummary {
            start: self.speedrun.start().to_string(),
            target: self.speedrun.target().to_string(),
            elapsed: self.speedrun.elapsed(),
            steps,
            right_swipes: steps.saturating_sub(skips),
            left_swipes: skips,
            path: self.speedrun.path().to_vec(),
        })
    }
}

/// Picks a random run from `titles`, falling back to the built-in pool
fn new_run<R: Rng + ?Sized>(titles: &[String], rng: &mut R) -> Speedrun {
    Speedrun::random(titles, rng)
        .or_else(|| Speedrun::random(&defaults::titles(), rng))
        .unwrap_or_else(|| Speedrun::new(defaults::POPULAR_TITLES[0], defaults::POPULAR_TITLES[1]))
}
