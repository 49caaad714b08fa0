//! Integration tests for the article pipeline and the game coordinator
//!
//! These tests use wiremock to stand in for the Wikipedia REST and Action APIs.

mod fetch_tests;
mod game_tests;

use wiki_swipe::config::Config;
use wiremock::MockServer;

/// Creates a test configuration pointing both APIs at the mock server
pub fn create_test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.rest_base = format!("{}/rest", server.uri());
    config.api.action_base = format!("{}/api.php", server.uri());
    config.user_agent.client_name = "WikiSwipeTest".to_string();
    config.rabbit_hole.deck = vec!["Earth".to_string(), "Moon".to_string()];
    config.rabbit_hole.refill_below = 0;
    config
}

/// Wraps a body fragment in a REST-style article document
pub fn article_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>{}</title></head><body>{}</body></html>"#,
        title, body
    )
}
