//! End-to-end game flows against a mock Wikipedia

use crate::{article_html, create_test_config};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use wiki_swipe::article::WikiClient;
use wiki_swipe::config::Config;
use wiki_swipe::game::LOAD_FAILED_MESSAGE;
use wiki_swipe::state::SwipeOutcome;
use wiki_swipe::{CardStatus, GameCoordinator, Mode, SwipeDirection};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_game(config: Config, mode: Mode) -> GameCoordinator {
    let client = WikiClient::new(&config.api, &config.user_agent).unwrap();
    GameCoordinator::with_client(config, client, mode, StdRng::seed_from_u64(7))
}

async fn mount_article(server: &MockServer, title_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/rest/page/{}/html", title_path)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(article_html(title_path, body))
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

async fn mount_links(server: &MockServer, title: &str, links: &[&str]) {
    let links: Vec<_> = links.iter().map(|t| json!({"ns": 0, "title": t})).collect();
    Mock::given(method("GET"))
        .and(path("/api.php"))
        .and(query_param("titles", title))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batchcomplete": "",
            "query": {"pages": {"1": {"title": title, "links": links}}}
        })))
        .mount(server)
        .await;
}

const EARTH_BODY: &str = r##"
    <div class="hatnote">For other uses, see <a href="./Earth_(disambiguation)">Earth (disambiguation)</a>.</div>
    <h1>Earth</h1>
    <p>Earth is the third planet from the <a href="./Sun">Sun</a>.<sup class="reference"><a href="#cite_note-1">[1]</a></sup></p>
    <p>Its only natural satellite is the <a href="./Moon">Moon</a>. See <a href="./File:Earth.jpg">image</a>.</p>
    <h2>References</h2>
    <p><a href="./Citation_needed">cite</a></p>
"##;

#[tokio::test]
async fn test_rabbit_hole_loads_deck_head() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server, "Earth", EARTH_BODY).await;

    let mut game = create_game(create_test_config(&mock_server), Mode::RabbitHole);
    let card = game.refresh().await;

    assert_eq!(card.title, "Earth");
    assert_eq!(card.status, CardStatus::Loaded);
    assert_eq!(
        card.blocks,
        vec![
            "Earth".to_string(),
            "Earth is the third planet from the Sun.".to_string(),
            "Its only natural satellite is the Moon. See image.".to_string(),
        ]
    );

    let next = game.session().rabbit_hole().next_link().unwrap();
    assert!(next == "Sun" || next == "Moon");
}

#[tokio::test]
async fn test_rabbit_hole_right_follows_link() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server, "Earth", EARTH_BODY).await;
    mount_article(&mock_server, "Sun", "<p>The Sun is a star.</p>").await;
    mount_article(&mock_server, "Moon", "<p>The Moon orbits <a href=\"./Earth\">Earth</a>.</p>").await;

    let mut game = create_game(create_test_config(&mock_server), Mode::RabbitHole);
    game.refresh().await;

    let (outcome, card) = game.swipe(SwipeDirection::Right).await;
    assert_eq!(outcome, SwipeOutcome::Moved);
    assert!(card.title == "Sun" || card.title == "Moon");
    assert!(card.is_loaded());

    let rabbit_hole = game.session().rabbit_hole();
    assert_eq!(rabbit_hole.liked_source(), Some("Earth"));
    assert_eq!(rabbit_hole.liked_pool().len(), 1);
    assert_ne!(rabbit_hole.liked_pool()[0], card.title);

    // Left now draws the other liked link instead of skipping the deck
    let other = rabbit_hole.liked_pool()[0].clone();
    let (_, card) = game.swipe(SwipeDirection::Left).await;
    assert_eq!(card.title, other);
    assert_eq!(game.session().steps(), 2);
}

#[tokio::test]
async fn test_rabbit_hole_left_skips_deck() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server, "Earth", EARTH_BODY).await;
    mount_article(&mock_server, "Moon", "<p>The Moon.</p>").await;

    let mut game = create_game(create_test_config(&mock_server), Mode::RabbitHole);
    game.refresh().await;

    let (_, card) = game.swipe(SwipeDirection::Left).await;
    assert_eq!(card.title, "Moon");
    assert!(!game.session().rabbit_hole().is_swiped_right());
}

#[tokio::test]
async fn test_failed_article_shows_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/page/Earth/html"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut game = create_game(create_test_config(&mock_server), Mode::RabbitHole);
    let card = game.refresh().await;

    assert_eq!(card.title, "Earth");
    assert_eq!(card.status, CardStatus::Failed(LOAD_FAILED_MESSAGE.to_string()));
    assert!(card.blocks.is_empty());
    assert_eq!(game.session().rabbit_hole().next_link(), None);
}

#[tokio::test]
async fn test_speedrun_reaches_target() {
    let mock_server = MockServer::start().await;
    mount_links(&mock_server, "Earth", &["Moon", "Sun", "List of planets", "1990 in science"]).await;
    mount_article(&mock_server, "Earth", EARTH_BODY).await;
    mount_article(&mock_server, "Sun", "<p>The Sun.</p>").await;
    mount_article(&mock_server, "Moon", "<p>The Moon.</p>").await;

    let mut game = create_game(create_test_config(&mock_server), Mode::RabbitHole);
    let card = game.restart_with("Earth", "Moon").await;

    assert_eq!(game.session().mode(), Mode::Speedrun);
    assert_eq!(card.title, "Earth");
    assert!(card.is_loaded());

    let mut candidates = game.session().speedrun().candidates().to_vec();
    candidates.sort();
    assert_eq!(candidates, vec!["Moon".to_string(), "Sun".to_string()]);

    // Preview candidates until the target is on screen
    let mut previews = 0;
    while game.session().display_title() != "Moon" {
        let (outcome, card) = game.swipe(SwipeDirection::Left).await;
        assert_eq!(outcome, SwipeOutcome::Moved);
        assert_eq!(card.title, game.session().display_title());
        previews += 1;
        assert!(previews <= 2);
    }

    let (outcome, card) = game.swipe(SwipeDirection::Right).await;
    assert_eq!(outcome, SwipeOutcome::Finished);
    assert_eq!(card.title, "Moon");
    assert!(game.session().is_locked());

    let summary = game.session().run_summary().unwrap();
    assert_eq!(summary.start, "Earth");
    assert_eq!(summary.target, "Moon");
    assert_eq!(summary.path, vec!["Earth".to_string(), "Moon".to_string()]);
    assert_eq!(summary.left_swipes, previews);
    assert_eq!(summary.right_swipes, 1);

    // Locked: further swipes change nothing
    let (outcome, _) = game.swipe(SwipeDirection::Left).await;
    assert_eq!(outcome, SwipeOutcome::Ignored);
    assert_eq!(game.session().steps(), previews + 1);
}

#[tokio::test]
async fn test_speedrun_failed_candidate_advances() {
    let mock_server = MockServer::start().await;
    mount_links(&mock_server, "Earth", &["Broken", "Missing", "Sun"]).await;
    mount_article(&mock_server, "Earth", EARTH_BODY).await;
    mount_article(&mock_server, "Sun", "<p>The Sun.</p>").await;

    for broken in ["Broken", "Missing"] {
        Mock::given(method("GET"))
            .and(path(format!("/rest/page/{}/html", broken)))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
    }

    let mut game = create_game(create_test_config(&mock_server), Mode::RabbitHole);
    game.restart_with("Earth", "Moon").await;

    // Whichever candidate comes up first, failures skip ahead to the one that loads
    let (_, card) = game.swipe(SwipeDirection::Left).await;
    assert_eq!(card.title, "Sun");
    assert!(card.is_loaded());
    assert_eq!(game.session().display_title(), "Sun");
}

#[tokio::test]
async fn test_speedrun_without_links_still_plays() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server, "Earth", EARTH_BODY).await;

    Mock::given(method("GET"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut game = create_game(create_test_config(&mock_server), Mode::RabbitHole);
    let card = game.restart_with("Earth", "Moon").await;
    assert!(card.is_loaded());
    assert!(game.session().speedrun().candidates().is_empty());

    let (outcome, card) = game.swipe(SwipeDirection::Right).await;
    assert_eq!(outcome, SwipeOutcome::Stayed);
    assert_eq!(card.title, "Earth");
    assert_eq!(game.session().steps(), 1);
}

#[tokio::test]
async fn test_switching_modes_keeps_rabbit_hole() {
    let mock_server = MockServer::start().await;
    mount_article(&mock_server, "Earth", EARTH_BODY).await;
    mount_article(&mock_server, "Moon", "<p>The Moon.</p>").await;

    // Any speedrun pair: links and articles for it are not mocked, so loads fail
    Mock::given(method("GET"))
        .and(path("/api.php"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let mut game = create_game(create_test_config(&mock_server), Mode::RabbitHole);
    game.refresh().await;
    game.swipe(SwipeDirection::Left).await;
    assert_eq!(game.session().display_title(), "Moon");

    let card = game.switch_mode(Mode::Speedrun).await;
    assert_eq!(game.session().mode(), Mode::Speedrun);
    assert_eq!(game.session().steps(), 0);
    assert_eq!(card.title, game.session().speedrun().start());

    let card = game.switch_mode(Mode::RabbitHole).await;
    assert_eq!(card.title, "Moon");
    assert!(card.is_loaded());
}
