use crate::config::types::{
    ApiConfig, Config, DisplayConfig, RabbitHoleConfig, SpeedrunConfig, UserAgentConfig,
};
use crate::title::{same_article, titles_match};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_api_config(&config.api)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_rabbit_hole_config(&config.rabbit_hole)?;
    validate_speedrun_config(&config.speedrun)?;
    validate_display_config(&config.display)?;
    Ok(())
}

/// Validates a speedrun start/target pair given on the command line
///
/// Both titles must be non-blank, and the target must not already match the
/// start, or the run could never be finished.
pub fn validate_run_pair(start: &str, target: &str) -> Result<(), ConfigError> {
    if start.trim().is_empty() || target.trim().is_empty() {
        return Err(ConfigError::Validation(
            "Speedrun start and target must not be empty".to_string(),
        ));
    }

    if titles_match(start, target) {
        return Err(ConfigError::Validation(format!(
            "Speedrun start '{}' and target '{}' are the same article",
            start, target
        )));
    }

    Ok(())
}

/// Validates endpoint configuration
fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    validate_endpoint("rest_base", &config.rest_base)?;
    validate_endpoint("action_base", &config.action_base)?;

    if config.max_link_pages < 1 || config.max_link_pages > 10 {
        return Err(ConfigError::Validation(format!(
            "max_link_pages must be between 1 and 10, got {}",
            config.max_link_pages
        )));
    }

    if config.max_load_attempts < 1 || config.max_load_attempts > 20 {
        return Err(ConfigError::Validation(format!(
            "max_load_attempts must be between 1 and 20, got {}",
            config.max_load_attempts
        )));
    }

    Ok(())
}

/// Validates that an API endpoint parses and uses HTTPS
fn validate_endpoint(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} '{}' must use HTTPS scheme",
            name, value
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate client name: non-empty, alphanumeric + hyphens only
    if config.client_name.is_empty() {
        return Err(ConfigError::Validation(
            "client_name cannot be empty".to_string(),
        ));
    }

    if !config
        .client_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "client_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.client_name
        )));
    }

    // Validate contact URL
    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    // Validate contact email (basic validation)
    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates rabbit hole configuration
fn validate_rabbit_hole_config(config: &RabbitHoleConfig) -> Result<(), ConfigError> {
    if config.deck.is_empty() {
        return Err(ConfigError::Validation(
            "rabbit hole deck must contain at least one title".to_string(),
        ));
    }

    validate_titles("rabbit hole deck", &config.deck)?;

    Ok(())
}

/// Validates speedrun configuration
fn validate_speedrun_config(config: &SpeedrunConfig) -> Result<(), ConfigError> {
    validate_titles("speedrun titles", &config.titles)?;

    // Start and target are drawn without replacement, so two distinct articles are needed
    for (i, a) in config.titles.iter().enumerate() {
        for b in &config.titles[i + 1..] {
            if same_article(a, b) {
                return Err(ConfigError::Validation(format!(
                    "speedrun titles contain a duplicate: '{}'",
                    a
                )));
            }
        }
    }

    if config.titles.len() < 2 {
        return Err(ConfigError::Validation(format!(
            "speedrun titles must contain at least 2 articles, got {}",
            config.titles.len()
        )));
    }

    if config.top_candidates < 1 {
        return Err(ConfigError::Validation(
            "top_candidates must be >= 1".to_string(),
        ));
    }

    if config.extra_candidates < 1 {
        return Err(ConfigError::Validation(
            "extra_candidates must be >= 1".to_string(),
        ));
    }

    if config.start_window < 1 {
        return Err(ConfigError::Validation(
            "start_window must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates display configuration
fn validate_display_config(config: &DisplayConfig) -> Result<(), ConfigError> {
    if config.preview_blocks < 1 {
        return Err(ConfigError::Validation(
            "preview_blocks must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every title is a plausible main-namespace article name
fn validate_titles(what: &str, titles: &[String]) -> Result<(), ConfigError> {
    for title in titles {
        if title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{} cannot contain an empty title",
                what
            )));
        }

        if title.contains(':') {
            return Err(ConfigError::Validation(format!(
                "{} entry '{}' is not a main-namespace article",
                what, title
            )));
        }
    }

    Ok(())
}

/// Basic email validation
fn validate_email(email: &str) -> Result<(), ConfigError> {
    if email.is_empty() {
        return Err(ConfigError::Validation(
            "contact_email cannot be empty".to_string(),
        ));
    }

    // Basic email format check: must contain @ and have text on both sides
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid email domain: '{}'",
            email
        )));
    }

    Ok(())
}
