//! HTTP fetcher for Wikipedia articles and link lists
//!
//! This module handles all HTTP requests made by the game:
//! - Building the HTTP client with a descriptive user agent
//! - Fetching article HTML from the REST API
//! - Fetching outbound link titles from the Action API (with continuation)
//! - Error classification

use crate::config::{ApiConfig, UserAgentConfig};
use crate::title::title_path;
use crate::SwipeError;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// Wikimedia asks API clients to identify themselves, so the user agent has
/// the form `ClientName/Version (+ContactURL; ContactEmail)`.
///
/// # Example
///
/// ```no_run
/// use wiki_swipe::config::UserAgentConfig;
/// use wiki_swipe::article::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Client for the two Wikipedia APIs the game reads from
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: Client,
    rest_base: String,
    action_base: String,
    max_link_pages: u32,
}

impl WikiClient {
    /// Creates a client from the endpoint and user agent configuration
    pub fn new(api: &ApiConfig, user_agent: &UserAgentConfig) -> Result<Self, SwipeError> {
        let client = build_http_client(user_agent)?;
        Ok(Self::with_client(client, api))
    }

    /// Creates a client around an existing `reqwest::Client`
    pub fn with_client(client: Client, api: &ApiConfig) -> Self {
        Self {
            client,
            rest_base: api.rest_base.trim_end_matches('/').to_string(),
            action_base: api.action_base.clone(),
            max_link_pages: api.max_link_pages.max(1),
        }
    }

    /// REST URL of an article's HTML
    pub fn article_url(&self, title: &str) -> String {
        format!("{}/page/{}/html", self.rest_base, title_path(title))
    }

    /// Fetches the rendered HTML of an article
    ///
    /// # Errors
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | HTTP status >= 400 | `SwipeError::Status` |
    /// | Timeout | `SwipeError::Timeout` |
    /// | Connection or body failure | `SwipeError::Http` |
    pub async fn fetch_article_html(&self, title: &str) -> Result<String, SwipeError> {
        let url = self.article_url(title);
        tracing::debug!("Fetching article HTML: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_error(&url, e))?;

        let response = check_status(&url, response)?;

        response.text().await.map_err(|e| classify_error(&url, e))
    }

    /// Fetches the titles of main-namespace articles linked from `title`
    ///
    /// Uses `action=query&prop=links` with redirects resolved. When the API
    /// reports more links (`continue`), further requests are made up to the
    /// configured `max-link-pages`.
    pub async fn fetch_outbound_links(&self, title: &str) -> Result<Vec<String>, SwipeError> {
        let mut titles = Vec::new();
        let mut continuation: Vec<(String, String)> = Vec::new();

        for page in 0..self.max_link_pages {
            let mut params: Vec<(String, String)> = vec![
                ("action".into(), "query".into()),
                ("format".into(), "json".into()),
                ("origin".into(), "*".into()),
                ("prop".into(), "links".into()),
                ("titles".into(), title.to_string()),
                ("plnamespace".into(), "0".into()),
                ("pllimit".into(), "max".into()),
                ("redirects".into(), "1".into()),
            ];
            params.extend(continuation.iter().cloned());

            tracing::debug!("Fetching links for '{}' (page {})", title, page + 1);

            let response = self
                .client
                .get(&self.action_base)
                .query(&params)
                .send()
                .await
                .map_err(|e| classify_error(&self.action_base, e))?;

            let response = check_status(&self.action_base, response)?;
            let json: Value = response.json().await.map_err(|e| {
                if e.is_decode() {
                    SwipeError::Json {
                        url: self.action_base.clone(),
                        message: e.to_string(),
                    }
                } else {
                    classify_error(&self.action_base, e)
                }
            })?;

            let batch = parse_links_response(&json);
            titles.extend(batch.titles);

            match batch.continuation {
                Some(next) if !next.is_empty() => continuation = next,
                _ => break,
            }
        }

        tracing::debug!("Found {} outbound links for '{}'", titles.len(), title);
        Ok(titles)
    }
}

/// One Action API response worth of links
#[derive(Debug, Default, PartialEq)]
pub struct LinkBatch {
    /// Link titles of the first page in `query.pages`
    pub titles: Vec<String>,

    /// Parameters to send back for the next batch, if any
    pub continuation: Option<Vec<(String, String)>>,
}

/// Extracts link titles and continuation parameters from an Action API response
///
/// Entries without a string `title` are ignored. A missing `query`, an empty
/// `pages` object, or a page without `links` yields no titles.
pub fn parse_links_response(json: &Value) -> LinkBatch {
    let titles = json
        .get("query")
        .and_then(|q| q.get("pages"))
        .and_then(Value::as_object)
        .and_then(|pages| pages.values().next())
        .and_then(|page| page.get("links"))
        .and_then(Value::as_array)
        .map(|links| {
            links
                .iter()
                .filter_map(|l| l.get("title").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let continuation = json
        .get("continue")
        .and_then(Value::as_object)
        .map(|params| {
            params
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                .collect()
        });

    LinkBatch {
        titles,
        continuation,
    }
}

/// Maps HTTP error statuses to `SwipeError::Status`
fn check_status(url: &str, response: Response) -> Result<Response, SwipeError> {
    let status = response.status();
    if status.as_u16() >= 400 {
        tracing::debug!("Server error {} for {}", status, url);
        return Err(SwipeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// Classifies a transport-level reqwest error
fn classify_error(url: &str, error: reqwest::Error) -> SwipeError {
    if error.is_timeout() {
        SwipeError::Timeout {
            url: url.to_string(),
        }
    } else {
        SwipeError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
