//! Plain-text rendering of cleaned article HTML for the terminal card

use scraper::{ElementRef, Html, Node};

/// Elements rendered as one block of text each
const BLOCK_ELEMENTS: &[&str] = &["h1", "h2", "h3", "p", "li"];

/// Classes whose text is left out of rendered blocks (citation markers, edit links)
const HIDDEN_CLASSES: &[&str] = &["reference", "mw-editsection"];

/// Renders the first `limit` text blocks of cleaned article HTML
///
/// Headings, paragraphs, and list items each become one block with whitespace
/// collapsed. Blocks nested inside another block are part of the outer one.
/// Empty blocks are skipped.
pub fn render_blocks(html: &str, limit: usize) -> Vec<String> {
    let fragment = Html::parse_fragment(html);

    fragment
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| is_block(*e) && !e.ancestors().filter_map(ElementRef::wrap).any(is_block))
        .map(block_text)
        .filter(|text| !text.is_empty())
        .take(limit)
        .collect()
}

fn is_block(element: ElementRef<'_>) -> bool {
    BLOCK_ELEMENTS.contains(&element.value().name())
}

fn is_hidden(element: ElementRef<'_>) -> bool {
    element
        .value()
        .classes()
        .any(|class| HIDDEN_CLASSES.contains(&class))
}

/// Collects visible text of a block with whitespace collapsed
fn block_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    if is_hidden(element) {
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }
}
