use crate::config::defaults;
use serde::Deserialize;

/// Main configuration structure for Wiki-Swipe
///
/// Every section is optional; a missing section falls back to the built-in
/// defaults so the game runs without a config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(rename = "rabbit-hole", default)]
    pub rabbit_hole: RabbitHoleConfig,
    #[serde(default)]
    pub speedrun: SpeedrunConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Wikipedia endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// REST API root used for article HTML
    #[serde(rename = "rest-base", default = "defaults::rest_base")]
    pub rest_base: String,

    /// Action API endpoint used for outbound link lists
    #[serde(rename = "action-base", default = "defaults::action_base")]
    pub action_base: String,

    /// Maximum number of Action API requests per link list (continuation pages)
    #[serde(rename = "max-link-pages", default = "defaults::max_link_pages")]
    pub max_link_pages: u32,

    /// How many articles to try before giving up on a card
    #[serde(rename = "max-load-attempts", default = "defaults::max_load_attempts")]
    pub max_load_attempts: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            rest_base: defaults::rest_base(),
            action_base: defaults::action_base(),
            max_link_pages: defaults::max_link_pages(),
            max_load_attempts: defaults::max_load_attempts(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the client
    #[serde(rename = "client-name", default = "defaults::client_name")]
    pub client_name: String,

    /// Version of the client
    #[serde(rename = "client-version", default = "defaults::client_version")]
    pub client_version: String,

    /// URL with information about the client
    #[serde(rename = "contact-url", default = "defaults::contact_url")]
    pub contact_url: String,

    /// Email address for client-related contact
    #[serde(rename = "contact-email", default = "defaults::contact_email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            client_name: defaults::client_name(),
            client_version: defaults::client_version(),
            contact_url: defaults::contact_url(),
            contact_email: defaults::contact_email(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header: `Name/Version (+ContactURL; ContactEmail)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.client_name, self.client_version, self.contact_url, self.contact_email
        )
    }
}

/// Rabbit hole mode configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RabbitHoleConfig {
    /// Articles offered when the user skips instead of following links
    #[serde(default = "defaults::deck")]
    pub deck: Vec<String>,

    /// The base deck is appended again when fewer entries than this remain
    #[serde(rename = "refill-below", default = "defaults::refill_below")]
    pub refill_below: usize,
}

impl Default for RabbitHoleConfig {
    fn default() -> Self {
        Self {
            deck: defaults::deck(),
            refill_below: defaults::refill_below(),
        }
    }
}

/// Speedrun mode configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SpeedrunConfig {
    /// Pool that start and target articles are drawn from
    #[serde(default = "defaults::titles")]
    pub titles: Vec<String>,

    /// Best-scoring candidates kept (shuffled) at the front of the list
    #[serde(rename = "top-candidates", default = "defaults::top_candidates")]
    pub top_candidates: usize,

    /// Random sample of the remaining candidates appended after the top ones
    #[serde(rename = "extra-candidates", default = "defaults::extra_candidates")]
    pub extra_candidates: usize,

    /// The first candidate shown is picked among this many leading entries
    #[serde(rename = "start-window", default = "defaults::start_window")]
    pub start_window: usize,
}

impl Default for SpeedrunConfig {
    fn default() -> Self {
        Self {
            titles: defaults::titles(),
            top_candidates: defaults::top_candidates(),
            extra_candidates: defaults::extra_candidates(),
            start_window: defaults::start_window(),
        }
    }
}

/// Terminal card configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Number of text blocks rendered on a card
    #[serde(rename = "preview-blocks", default = "defaults::preview_blocks")]
    pub preview_blocks: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_blocks: defaults::preview_blocks(),
        }
    }
}
