//! Rabbit hole mode: free-association browsing
//!
//! The player starts on a curated deck of broad articles. Swiping right jumps
//! to a random link of the displayed article and marks that article as the
//! "liked source". From then on, swiping left draws further links from the
//! liked source instead of skipping down the deck.

use crate::config::{defaults, RabbitHoleConfig};
use crate::select::{pick_random_link, take_random};
use crate::state::SwipeOutcome;
use crate::title::same_article;
use rand::Rng;

/// Rabbit hole browsing state
#[derive(Debug, Clone)]
pub struct RabbitHole {
    base_deck: Vec<String>,
    refill_below: usize,
    deck: Vec<String>,
    title: String,

    swiped_right: bool,
    liked_source: Option<String>,
    liked_pool: Vec<String>,

    /// Eligible links of the displayed article, once it has loaded
    page_links: Vec<String>,

    /// Link a right swipe will follow
    next_link: Option<String>,
}

impl RabbitHole {
    /// Creates the browsing state from the configured deck
    ///
    /// An empty deck falls back to the built-in one.
    pub fn new(config: &RabbitHoleConfig) -> Self {
        let base_deck = if config.deck.is_empty() {
            defaults::deck()
        } else {
            config.deck.clone()
        };
        let title = base_deck
            .first()
            .cloned()
            .unwrap_or_else(|| defaults::RABBIT_HOLE_DECK[0].to_string());

        Self {
            deck: base_deck.clone(),
            base_deck,
            refill_below: config.refill_below,
            title,
            swiped_right: false,
            liked_source: None,
            liked_pool: Vec::new(),
            page_links: Vec::new(),
            next_link: None,
        }
    }

    /// Title of the displayed article
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn deck(&self) -> &[String] {
        &self.deck
    }

    pub fn is_swiped_right(&self) -> bool {
        self.swiped_right
    }

    pub fn liked_source(&self) -> Option<&str> {
        self.liked_source.as_deref()
    }

    pub fn liked_pool(&self) -> &[String] {
        &self.liked_pool
    }

    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    /// Follows a link out of the displayed article
    ///
    /// The first right swipe makes the displayed article the liked source and
    /// seeds the pool with its links, minus the one being followed. Without a
    /// loaded next link, a pool entry is used instead; with neither, the card
    /// stays.
    pub fn swipe_right<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SwipeOutcome {
        if !self.swiped_right {
            self.swiped_right = true;
            self.liked_source = Some(self.title.clone());
            self.liked_pool = self
                .page_links
                .iter()
                .filter(|t| self.next_link.as_deref() != Some(t.as_str()))
                .cloned()
                .collect();
            tracing::debug!(
                "Liked '{}' with {} links in pool",
                self.title,
                self.liked_pool.len()
            );
        }

        if let Some(next) = self.next_link.take() {
            self.navigate(next);
            return SwipeOutcome::Moved;
        }

        match take_random(&mut self.liked_pool, rng) {
            Some(next) => {
                self.navigate(next);
                SwipeOutcome::Moved
            }
            None => SwipeOutcome::Stayed,
        }
    }

    /// Draws another liked link, or skips down the deck
    pub fn swipe_left<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SwipeOutcome {
        if self.swiped_right {
            if let Some(next) = take_random(&mut self.liked_pool, rng) {
                self.navigate(next);
                return SwipeOutcome::Moved;
            }
        }

        self.skip_deck();
        SwipeOutcome::Moved
    }

    /// Moves to the deck entry after the displayed one and rotates the deck
    ///
    /// A title that is not in the deck (a followed link) goes back to the deck
    /// head. Skipping forgets the liked source.
    fn skip_deck(&mut self) {
        let index = self.deck.iter().position(|t| same_article(t, &self.title));
        let next = match index {
            Some(i) => self.deck.get(i + 1),
            None => self.deck.first(),
        }
        .or_else(|| self.deck.get(1))
        .cloned()
        .unwrap_or_else(|| self.title.clone());

        if self.deck.len() < self.refill_below {
            self.deck.extend(self.base_deck.iter().cloned());
        }
        if !self.deck.is_empty() {
            self.deck.remove(0);
        }

        self.swiped_right = false;
        self.liked_source = None;
        self.liked_pool.clear();

        self.navigate(next);
    }

    fn navigate(&mut self, title: String) {
        tracing::debug!("Rabbit hole: '{}' -> '{}'", self.title, title);
        self.title = title;
        self.page_links.clear();
        self.next_link = None;
    }

    /// Records the eligible links of a loaded article
    ///
    /// Returns false, changing nothing, if `title` is no longer displayed.
    pub fn on_page_loaded<R: Rng + ?Sized>(
        &mut self,
        title: &str,
        links: Vec<String>,
        rng: &mut R,
    ) -> bool {
        if !same_article(title, &self.title) {
            return false;
        }

        self.next_link = pick_random_link(&links, rng);

        let on_liked_source = self
            .liked_source
            .as_deref()
            .is_some_and(|source| same_article(source, title));
        if self.swiped_right && on_liked_source && self.liked_pool.is_empty() {
            self.liked_pool = links.clone();
        }

        self.page_links = links;
        true
    }

    /// Forgets the displayed article's links after a failed load
    pub fn on_load_failed(&mut self, title: &str) {
        if same_article(title, &self.title) {
            self.next_link = None;
            self.page_links.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn rabbit_hole(deck: &[&str], refill_below: usize) -> RabbitHole {
        RabbitHole::new(&RabbitHoleConfig {
            deck: strings(deck),
            refill_below,
        })
    }

    #[test]
    fn test_starts_on_deck_head() {
        let rh = rabbit_hole(&["Earth", "Moon", "Sun"], 0);
        assert_eq!(rh.title(), "Earth");
        assert!(!rh.is_swiped_right());
    }

    #[test]
    fn test_empty_deck_falls_back() {
        let rh = rabbit_hole(&[], 5);
        assert_eq!(rh.title(), "Earth");
        assert_eq!(rh.deck().len(), defaults::RABBIT_HOLE_DECK.len());
    }

    #[test]
    fn test_left_skips_deck() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut rh = rabbit_hole(&["Earth", "Moon", "Sun", "Mars"], 0);

        assert_eq!(rh.swipe_left(&mut rng), SwipeOutcome::Moved);
        assert_eq!(rh.title(), "Moon");
        assert_eq!(rh.deck(), &strings(&["Moon", "Sun", "Mars"])[..]);

        rh.swipe_left(&mut rng);
        assert_eq!(rh.title(), "Sun");
        rh.swipe_left(&mut rng);
        assert_eq!(rh.title(), "Mars");
    }

    #[test]
    fn test_left_refills_small_deck() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut rh = rabbit_hole(&["Earth", "Moon"], 5);

        rh.swipe_left(&mut rng);
        assert_eq!(rh.title(), "Moon");
        assert_eq!(rh.deck(), &strings(&["Moon", "Earth", "Moon"])[..]);

        rh.swipe_left(&mut rng);
        assert_eq!(rh.title(), "Earth");
    }

    #[test]
    fn test_left_from_single_entry_deck() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut rh = rabbit_hole(&["Earth"], 0);
        rh.swipe_left(&mut rng);
        assert_eq!(rh.title(), "Earth");
    }

    #[test]
    fn test_right_follows_next_link_and_seeds_pool() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut rh = rabbit_hole(&["Earth", "Moon"], 0);

        assert!(rh.on_page_loaded("Earth", strings(&["Sun", "Mars", "Venus"]), &mut rng));
        let next = rh.next_link().unwrap().to_string();

        assert_eq!(rh.swipe_right(&mut rng), SwipeOutcome::Moved);
        assert_eq!(rh.title(), next);
        assert!(rh.is_swiped_right());
        assert_eq!(rh.liked_source(), Some("Earth"));
        assert_eq!(rh.liked_pool().len(), 2);
        assert!(!rh.liked_pool().contains(&next));
    }

    #[test]
    fn test_left_after_like_draws_from_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rh = rabbit_hole(&["Earth", "Moon"], 0);
        rh.on_page_loaded("Earth", strings(&["Sun", "Mars", "Venus"]), &mut rng);
        rh.swipe_right(&mut rng);

        let before = rh.liked_pool().to_vec();
        rh.swipe_left(&mut rng);
        assert!(before.contains(&rh.title().to_string()));
        assert_eq!(rh.liked_pool().len(), 1);
        assert!(!rh.liked_pool().contains(&rh.title().to_string()));

        rh.swipe_left(&mut rng);
        assert!(rh.liked_pool().is_empty());
        assert_eq!(rh.liked_source(), Some("Earth"));

        // Pool exhausted: back to the deck, liked state reset
        rh.swipe_left(&mut rng);
        assert_eq!(rh.title(), "Earth");
        assert!(!rh.is_swiped_right());
        assert_eq!(rh.liked_source(), None);
    }

    #[test]
    fn test_right_without_links_stays() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut rh = rabbit_hole(&["Earth", "Moon"], 0);
        assert_eq!(rh.swipe_right(&mut rng), SwipeOutcome::Stayed);
        assert_eq!(rh.title(), "Earth");
        assert!(rh.is_swiped_right());
    }

    #[test]
    fn test_right_uses_pool_when_next_link_missing() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut rh = rabbit_hole(&["Earth", "Moon"], 0);
        rh.on_page_loaded("Earth", strings(&["Sun", "Mars"]), &mut rng);
        rh.swipe_right(&mut rng);

        // The followed article failed to load; right falls back to the pool
        let failed = rh.title().to_string();
        rh.on_load_failed(&failed);
        assert_eq!(rh.next_link(), None);

        assert_eq!(rh.swipe_right(&mut rng), SwipeOutcome::Moved);
        assert_ne!(rh.title(), failed);
        assert!(rh.liked_pool().is_empty());
    }

    #[test]
    fn test_stale_page_load_ignored() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut rh = rabbit_hole(&["Earth", "Moon"], 0);
        assert!(!rh.on_page_loaded("Moon", strings(&["Apollo 11"]), &mut rng));
        assert_eq!(rh.next_link(), None);
    }

    #[test]
    fn test_page_load_accepts_underscored_title() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut rh = rabbit_hole(&["Solar System"], 0);
        assert!(rh.on_page_loaded("Solar_System", strings(&["Sun"]), &mut rng));
        assert_eq!(rh.next_link(), Some("Sun"));
    }

    #[test]
    fn test_pool_filled_on_liked_source_reload() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rh = rabbit_hole(&["Earth", "Moon"], 0);

        // Liked before the page finished loading: pool is empty
        rh.swipe_right(&mut rng);
        assert!(rh.liked_pool().is_empty());

        rh.on_page_loaded("Earth", strings(&["Sun", "Mars"]), &mut rng);
        assert_eq!(rh.liked_pool(), &strings(&["Sun", "Mars"])[..]);
    }
}
