//! Output module for the terminal card and run summaries
//!
//! This module handles:
//! - The HUD (mode, steps, speedrun clock) and the article card
//! - The finish overlay of a speedrun
//! - Markdown reports of finished runs

mod hud;
mod markdown;
mod summary;

pub use hud::{format_card, format_hud, print_card};
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use summary::{OutputError, OutputResult, RunSummary};
