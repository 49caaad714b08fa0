//! Link extraction from cleaned article HTML
//!
//! This module turns the anchors of an article into the list of article titles
//! a right swipe may follow.

use crate::title::{same_article, title_from_href};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Boxes whose links are never offered (navigation notes and infoboxes)
const EXCLUDED_CONTAINERS: &[&str] = &["hatnote", "dablink", "rellink", "infobox"];

/// Extracts the titles of articles linked from an article body
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="/wiki/Title">` and `<a href="./Title">` anchors
///
/// **Exclude:**
/// - Anchors without `href`, and fragment-only hrefs (`#cite_note-1`)
/// - External, protocol-relative, and other non-article hrefs
/// - Anchors inside hatnotes, disambiguation links, related-article notes, and infoboxes
/// - Namespaced pages (titles containing `:`)
/// - Links back to `current_title`
///
/// Duplicates are removed; first-seen order is kept.
///
/// # Example
///
/// ```
/// use wiki_swipe::article::extract_links;
///
/// let html = r#"<p><a href="./Moon">Moon</a> <a href="./Earth">Earth</a> <a href="./Moon#Orbit">orbit</a></p>"#;
/// assert_eq!(extract_links(html, "Earth"), vec!["Moon".to_string()]);
/// ```
pub fn extract_links(html: &str, current_title: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    let Ok(a_selector) = Selector::parse("a") else {
        return links;
    };

    for element in fragment.select(&a_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        // Skip fragment-only links (same page anchors)
        if href.starts_with('#') {
            continue;
        }

        if !href.starts_with("/wiki/") && !href.starts_with("./") {
            continue;
        }

        if in_excluded_container(element) {
            continue;
        }

        let Some(title) = title_from_href(href) else {
            continue;
        };

        if same_article(&title, current_title) {
            continue;
        }

        if seen.insert(title.clone()) {
            links.push(title);
        }
    }

    links
}

/// Returns true if the anchor or any ancestor carries an excluded class
fn in_excluded_container(element: ElementRef<'_>) -> bool {
    std::iter::once(element)
        .chain(element.ancestors().filter_map(ElementRef::wrap))
        .any(|e| {
            e.value()
                .classes()
                .any(|class| EXCLUDED_CONTAINERS.contains(&class))
        })
}
