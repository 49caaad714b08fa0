//! Article HTML sanitizer and cleaner
//!
//! Raw article HTML goes through three passes before it is shown or scanned
//! for links:
//! - Sanitize: drop active content (scripts, frames, event handlers, `javascript:` URLs)
//! - Strip banners: hatnotes, disambiguation links, and maintenance boxes
//! - Strip trailing sections: "See also", "References", and similar bottom matter
//!
//! Speedrun cards only need the top of an article, so in that mode the
//! output is cut down to the first heading and the first three paragraphs.

use crate::state::Mode;
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Node};
use std::collections::HashSet;

/// Elements removed outright, content included
const DROPPED_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "link", "meta",
    "base", "frame", "frameset",
];

/// Attributes whose values are URLs and must not use `javascript:`
const URL_ATTRIBUTES: &[&str] = &["href", "src", "action"];

/// Class names of banner boxes removed from the top of articles
const BANNER_CLASSES: &[&str] = &["hatnote", "dablink", "rellink", "ambox"];

/// Section headings (lowercase substrings) removed together with their content
const TRAILING_SECTIONS: &[&str] = &[
    "see also",
    "references",
    "sources",
    "external links",
    "notes",
    "bibliography",
    "further reading",
];

/// Paragraphs kept on a speedrun card
const SPEEDRUN_PARAGRAPHS: usize = 3;

/// Cleans raw article HTML for display and link scanning
///
/// # Arguments
///
/// * `html` - Raw article HTML, as returned by the REST API
/// * `mode` - Game mode; speedrun keeps only the lead of the article
///
/// # Returns
///
/// The cleaned inner HTML of the document body. A document without a body
/// yields an empty string.
///
/// # Example
///
/// ```
/// use wiki_swipe::article::clean_article;
/// use wiki_swipe::Mode;
///
/// let html = r#"<body><div class="hatnote">Not to be confused</div><p>Earth is a planet.</p></body>"#;
/// assert_eq!(clean_article(html, Mode::RabbitHole), "<p>Earth is a planet.</p>");
/// ```
pub fn clean_article(html: &str, mode: Mode) -> String {
    let mut document = Html::parse_document(html);

    let Some(body) = find_body(&document) else {
        return String::new();
    };

    let mut removed = HashSet::new();
    mark_unsafe(body, &mut removed);
    mark_banners(body, &mut removed);
    mark_trailing_sections(body, &mut removed);

    let tainted: Vec<NodeId> = body
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().attrs().any(|(name, value)| !is_safe_attribute(name, value)))
        .map(|e| e.id())
        .collect();

    for id in tainted {
        strip_unsafe_attributes(&mut document, id);
    }
    for id in removed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    let Some(body) = find_body(&document) else {
        return String::new();
    };
    match mode {
        Mode::RabbitHole => body.inner_html(),
        Mode::Speedrun => lead_elements(body).iter().map(|e| e.html()).collect(),
    }
}

fn find_body(document: &Html) -> Option<ElementRef<'_>> {
    document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "body")
}

/// Drops event handlers and `javascript:` URLs from one element
fn strip_unsafe_attributes(document: &mut Html, id: NodeId) {
    let Some(mut node) = document.tree.get_mut(id) else {
        return;
    };
    if let Node::Element(element) = node.value() {
        element
            .attrs
            .retain(|name, value| is_safe_attribute(&name.local, value));
    }
}

/// Marks dropped tags
fn mark_unsafe(body: ElementRef<'_>, removed: &mut HashSet<NodeId>) {
    for element in body.descendants().filter_map(ElementRef::wrap) {
        if DROPPED_TAGS.contains(&element.value().name()) {
            removed.insert(element.id());
        }
    }
}

/// Marks hatnotes, disambiguation links, and maintenance boxes
fn mark_banners(body: ElementRef<'_>, removed: &mut HashSet<NodeId>) {
    for element in body.descendants().filter_map(ElementRef::wrap) {
        if element
            .value()
            .classes()
            .any(|class| BANNER_CLASSES.contains(&class))
        {
            removed.insert(element.id());
        }
    }
}

/// Marks bottom-matter headings and the siblings that follow them
///
/// Everything after such a heading, up to the next `h2`, belongs to the
/// section. Headings wrapped in `div.mw-heading` are handled through their
/// wrapper, since the content sits next to the wrapper and not the `h2`.
fn mark_trailing_sections(body: ElementRef<'_>, removed: &mut HashSet<NodeId>) {
    let headings: Vec<ElementRef<'_>> = body
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "h2")
        .collect();

    for h2 in headings {
        if is_removed(h2, removed) {
            continue;
        }

        let text = h2.text().collect::<String>().to_lowercase();
        if !TRAILING_SECTIONS.iter().any(|k| text.contains(k)) {
            continue;
        }

        let anchor = heading_wrapper(h2).unwrap_or(h2);
        removed.insert(anchor.id());

        for sibling in anchor.next_siblings().filter_map(ElementRef::wrap) {
            if starts_section(sibling) {
                break;
            }
            removed.insert(sibling.id());
        }
    }
}

/// Returns the `div.mw-heading` wrapping an `h2`, if any
fn heading_wrapper(h2: ElementRef<'_>) -> Option<ElementRef<'_>> {
    h2.parent()
        .and_then(ElementRef::wrap)
        .filter(|p| p.value().classes().any(|c| c == "mw-heading"))
}

/// Returns true if the element is an `h2` or a heading wrapper around one
fn starts_section(element: ElementRef<'_>) -> bool {
    let value = element.value();
    if value.name() == "h2" {
        return true;
    }
    value.classes().any(|c| c == "mw-heading")
        && element
            .children()
            .filter_map(ElementRef::wrap)
            .any(|c| c.value().name() == "h2")
}

/// Returns true if the element or one of its ancestors has been removed
fn is_removed(element: ElementRef<'_>, removed: &HashSet<NodeId>) -> bool {
    removed.contains(&element.id()) || element.ancestors().any(|a| removed.contains(&a.id()))
}

/// The first `h1` followed by the first paragraphs
fn lead_elements(body: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut lead = Vec::new();

    if let Some(h1) = body
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "h1")
    {
        lead.push(h1);
    }

    lead.extend(
        body.descendants()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == "p")
            .take(SPEEDRUN_PARAGRAPHS),
    );

    lead
}

/// Rejects event handlers and `javascript:` URLs
///
/// Takes the attribute's local name, so `xlink:href` is checked as `href`.
fn is_safe_attribute(name: &str, value: &str) -> bool {
    let name = name.to_ascii_lowercase();
    if name.starts_with("on") {
        return false;
    }
    if URL_ATTRIBUTES.contains(&name.as_str()) {
        let scheme: String = value
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace())
            .take("javascript:".len())
            .collect();
        return !scheme.eq_ignore_ascii_case("javascript:");
    }
    true
}
