//! Game coordinator - turns swipes into article loads
//!
//! Every input follows the same cycle:
//! - Apply the input to the session
//! - In speedrun, fetch candidates for the current article if still missing
//! - Fetch, clean, and render the displayed article
//! - Feed the article's links back to the session
//!
//! Loads are tagged with the title they were made for; the session drops a
//! result whose title is no longer displayed.

use crate::article::{clean_article, extract_links, render_blocks, WikiClient};
use crate::config::Config;
use crate::game::ArticleCard;
use crate::state::{Mode, Session, SwipeDirection, SwipeOutcome};
use crate::title::same_article;
use crate::SwipeError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// A loaded article: text blocks for the card, links for the session
struct LoadedArticle {
    blocks: Vec<String>,
    links: Vec<String>,
}

/// Main game coordinator structure
pub struct GameCoordinator {
    config: Arc<Config>,
    session: Session,
    client: WikiClient,
    rng: StdRng,
}

impl GameCoordinator {
    /// Creates a new coordinator
    ///
    /// # Arguments
    ///
    /// * `config` - The game configuration
    /// * `mode` - Mode to start in
    /// * `seed` - Fixed RNG seed for reproducible decks and runs; random if None
    ///
    /// # Returns
    ///
    /// * `Ok(GameCoordinator)` - Successfully created coordinator
    /// * `Err(SwipeError)` - Failed to build the HTTP client
    pub fn new(config: Config, mode: Mode, seed: Option<u64>) -> Result<Self, SwipeError> {
        let client = WikiClient::new(&config.api, &config.user_agent)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::with_client(config, client, mode, rng))
    }

    /// Creates a coordinator around an existing client and RNG
    pub fn with_client(config: Config, client: WikiClient, mode: Mode, mut rng: StdRng) -> Self {
        let session = Session::new(&config, mode, &mut rng);
        Self {
            config: Arc::new(config),
            session,
            client,
            rng,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads the displayed article (and speedrun candidates) into a card
    ///
    /// A failed load is reported to the session. When that moves the display
    /// to another title (a speedrun candidate auto-advance), the new title is
    /// tried, up to `max-load-attempts` loads in total.
    pub async fn refresh(&mut self) -> ArticleCard {
        self.load_candidates().await;

        let max_attempts = self.config.api.max_load_attempts.max(1);
        let mut attempts = 0;

        loop {
            let title = self.session.display_title().to_string();
            attempts += 1;

            match self.load_article(&title).await {
                Ok(article) => {
                    self.session
                        .on_page_loaded(&title, article.links, &mut self.rng);
                    return ArticleCard::loaded(title, article.blocks);
                }
                Err(e) => {
                    tracing::warn!("Failed to load '{}': {}", title, e);
                    self.session.on_load_failed(&title);

                    let next = self.session.display_title();
                    if same_article(next, &title) || attempts >= max_attempts {
                        return ArticleCard::failed(next);
                    }
                    tracing::info!("Trying '{}' instead", next);
                }
            }
        }
    }

    /// Applies a swipe and loads the resulting card
    pub async fn swipe(&mut self, direction: SwipeDirection) -> (SwipeOutcome, ArticleCard) {
        let outcome = self.session.swipe(direction, &mut self.rng);

        if outcome == SwipeOutcome::Finished {
            if let Some(summary) = self.session.run_summary() {
                tracing::info!(
                    "Speedrun finished: {} -> {} in {:.2}s, {} steps",
                    summary.start,
                    summary.target,
                    summary.elapsed.as_secs_f64(),
                    summary.steps
                );
            }
        }

        (outcome, self.refresh().await)
    }

    /// Switches mode and loads the resulting card
    pub async fn switch_mode(&mut self, mode: Mode) -> ArticleCard {
        self.session.set_mode(mode, &mut self.rng);
        self.refresh().await
    }

    /// Starts a new random speedrun and loads its start article
    pub async fn restart(&mut self) -> ArticleCard {
        self.session.restart(&mut self.rng);
        self.refresh().await
    }

    /// Starts a speedrun between two given titles
    ///
    /// Switches to speedrun mode first if needed.
    pub async fn restart_with(&mut self, start: &str, target: &str) -> ArticleCard {
        self.session.set_mode(Mode::Speedrun, &mut self.rng);
        self.session.restart_with(start, target);
        self.refresh().await
    }

    /// Fetches outbound links of the speedrun's current article if missing
    async fn load_candidates(&mut self) {
        let Some(title) = self.session.needs_candidates() else {
            return;
        };

        match self.client.fetch_outbound_links(&title).await {
            Ok(links) => {
                tracing::debug!("Fetched {} outbound links for '{}'", links.len(), title);
                self.session.set_candidates(&title, links, &mut self.rng);
            }
            Err(e) => {
                tracing::warn!("Failed to fetch links for '{}': {}", title, e);
            }
        }
    }

    async fn load_article(&self, title: &str) -> Result<LoadedArticle, SwipeError> {
        let html = self.client.fetch_article_html(title).await?;
        let cleaned = clean_article(&html, self.session.mode());

        Ok(LoadedArticle {
            links: extract_links(&cleaned, title),
            blocks: render_blocks(&cleaned, self.config.display.preview_blocks),
        })
    }
}
