//! Article pipeline: fetch, clean, extract links, render
//!
//! This module contains:
//! - `WikiClient`: REST article HTML and Action API outbound links
//! - `clean_article`: sanitizing and trimming article HTML per mode
//! - `extract_links`: navigable article titles of a cleaned article
//! - `render_blocks`: plain-text blocks for the terminal card

mod cleaner;
mod fetcher;
mod links;
mod render;

pub use cleaner::clean_article;
pub use fetcher::{build_http_client, parse_links_response, LinkBatch, WikiClient};
pub use links::extract_links;
pub use render::render_blocks;
