//! Fetcher tests against a mock Wikipedia

use crate::create_test_config;
use serde_json::json;
use wiki_swipe::article::WikiClient;
use wiki_swipe::SwipeError;
use wiremock::matchers::{header_regex, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches requests that do not carry the given query parameter
struct WithoutParam(&'static str);

impl Match for WithoutParam {
    fn matches(&self, request: &Request) -> bool {
        !request.url.query_pairs().any(|(k, _)| k == self.0)
    }
}

fn client_for(server: &MockServer, max_link_pages: u32) -> WikiClient {
    let mut config = create_test_config(server);
    config.api.max_link_pages = max_link_pages;
    WikiClient::new(&config.api, &config.user_agent).unwrap()
}

#[tokio::test]
async fn test_fetch_article_html() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/page/Black_hole/html"))
        .and(header_regex("user-agent", r"^WikiSwipeTest/\S+ \(\+https?://\S+; \S+@\S+\)$"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>Gravity wins.</p>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 1);
    let html = client.fetch_article_html("Black hole").await.unwrap();
    assert_eq!(html, "<p>Gravity wins.</p>");
}

#[tokio::test]
async fn test_fetch_article_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/page/Nowhere/html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 1);
    let result = client.fetch_article_html("Nowhere").await;
    assert!(matches!(result, Err(SwipeError::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_fetch_outbound_links() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api.php"))
        .and(query_param("action", "query"))
        .and(query_param("format", "json"))
        .and(query_param("origin", "*"))
        .and(query_param("prop", "links"))
        .and(query_param("titles", "Earth"))
        .and(query_param("plnamespace", "0"))
        .and(query_param("pllimit", "max"))
        .and(query_param("redirects", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batchcomplete": "",
            "query": {"pages": {"9228": {"title": "Earth", "links": [
                {"ns": 0, "title": "Moon"},
                {"ns": 0, "title": "Sun"}
            ]}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 1);
    let links = client.fetch_outbound_links("Earth").await.unwrap();
    assert_eq!(links, vec!["Moon".to_string(), "Sun".to_string()]);
}

#[tokio::test]
async fn test_fetch_outbound_links_follows_continue() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api.php"))
        .and(WithoutParam("plcontinue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "continue": {"plcontinue": "9228|0|Mars", "continue": "||"},
            "query": {"pages": {"9228": {"title": "Earth", "links": [{"title": "Moon"}]}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api.php"))
        .and(query_param("plcontinue", "9228|0|Mars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batchcomplete": "",
            "query": {"pages": {"9228": {"title": "Earth", "links": [{"title": "Mars"}]}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 3);
    let links = client.fetch_outbound_links("Earth").await.unwrap();
    assert_eq!(links, vec!["Moon".to_string(), "Mars".to_string()]);
}

#[tokio::test]
async fn test_fetch_outbound_links_single_page_by_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "continue": {"plcontinue": "9228|0|Mars", "continue": "||"},
            "query": {"pages": {"9228": {"title": "Earth", "links": [{"title": "Moon"}]}}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 1);
    let links = client.fetch_outbound_links("Earth").await.unwrap();
    assert_eq!(links, vec!["Moon".to_string()]);
}

#[tokio::test]
async fn test_fetch_outbound_links_bad_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 1);
    let result = client.fetch_outbound_links("Earth").await;
    assert!(matches!(result, Err(SwipeError::Json { .. })));
}

#[tokio::test]
async fn test_fetch_outbound_links_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 1);
    let result = client.fetch_outbound_links("Earth").await;
    assert!(matches!(result, Err(SwipeError::Status { status: 503, .. })));
}
