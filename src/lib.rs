//! Wiki-Swipe: swipe through Wikipedia, one card at a time
//!
//! This crate implements the article pipeline and swipe state machines behind a
//! Tinder-style Wikipedia browser with two modes: free-association "rabbit hole"
//! browsing and a timed "speedrun" from a start article to a target article.

pub mod article;
pub mod config;
pub mod game;
pub mod output;
pub mod select;
pub mod state;
pub mod title;

use thiserror::Error;

/// Main error type for Wiki-Swipe operations
#[derive(Debug, Error)]
pub enum SwipeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Server error {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Malformed API response from {url}: {message}")]
    Json { url: String, message: String },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Wiki-Swipe operations
pub type Result<T> = std::result::Result<T, SwipeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use game::{ArticleCard, CardStatus, GameCoordinator};
pub use state::{Mode, Session, SwipeDirection};
