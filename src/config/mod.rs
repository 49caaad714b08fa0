//! Configuration module for Wiki-Swipe
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every value has a built-in default, so a config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use wiki_swipe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("wiki-swipe.toml")).unwrap();
//! println!("Speedrun pool: {} titles", config.speedrun.titles.len());
//! ```

pub mod defaults;
mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ApiConfig, Config, DisplayConfig, RabbitHoleConfig, SpeedrunConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::{validate, validate_run_pair};
