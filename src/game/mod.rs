//! Game coordination: connects the session to the article pipeline
//!
//! # Components
//!
//! - `GameCoordinator`: applies input to the session and loads what it displays
//! - `ArticleCard`: what the player sees for one article

mod coordinator;

pub use coordinator::GameCoordinator;

/// Message shown in place of an article that could not be loaded
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load this article. Picking another…";

/// Whether a card's article loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardStatus {
    Loaded,

    /// Load failed; carries the message to show instead of the article
    Failed(String),
}

/// One article as presented to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub title: String,

    /// Leading text blocks of the cleaned article
    pub blocks: Vec<String>,

    pub status: CardStatus,
}

impl ArticleCard {
    pub fn loaded(title: impl Into<String>, blocks: Vec<String>) -> Self {
        Self {
            title: title.into(),
            blocks,
            status: CardStatus::Loaded,
        }
    }

    pub fn failed(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
            status: CardStatus::Failed(LOAD_FAILED_MESSAGE.to_string()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.status == CardStatus::Loaded
    }
}
