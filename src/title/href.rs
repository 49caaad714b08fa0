//! Conversions between article titles, wiki hrefs, and REST path segments

/// Derives an article title from an anchor `href`
///
/// Only article links are accepted: `/wiki/<Title>` (classic) and `./<Title>`
/// (Parsoid REST output). The query string and fragment are dropped and the
/// remainder is percent-decoded; undecodable input is kept as-is.
///
/// Returns None for empty titles and for namespaced pages (anything containing
/// `:` such as `File:`, `Help:` or `Category:`).
///
/// # Examples
///
/// ```
/// use wiki_swipe::title::title_from_href;
///
/// assert_eq!(title_from_href("./Black_hole#Formation"), Some("Black_hole".to_string()));
/// assert_eq!(title_from_href("/wiki/Caf%C3%A9"), Some("Café".to_string()));
/// assert_eq!(title_from_href("./File:Moon.jpg"), None);
/// assert_eq!(title_from_href("https://example.com/"), None);
/// ```
pub fn title_from_href(href: &str) -> Option<String> {
    let rest = if let Some(rest) = href.strip_prefix("/wiki/") {
        rest
    } else if let Some(rest) = href.strip_prefix("./") {
        rest
    } else {
        return None;
    };

    // Cut at the first '?' or '#'
    let raw = rest.split(['?', '#']).next().unwrap_or_default();

    let title = match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    };

    if title.is_empty() || title.contains(':') {
        return None;
    }

    Some(title)
}

/// Encodes a title as a single REST path segment (spaces become underscores)
///
/// # Examples
///
/// ```
/// use wiki_swipe::title::title_path;
///
/// assert_eq!(title_path("Tesla, Inc."), "Tesla%2C_Inc.");
/// assert_eq!(title_path("AC/DC"), "AC%2FDC");
/// ```
pub fn title_path(title: &str) -> String {
    urlencoding::encode(&title.replace(' ', "_")).into_owned()
}

/// Human-readable form of a title (underscores become spaces)
pub fn display_title(title: &str) -> String {
    title.replace('_', " ")
}

/// Returns true if both titles name the same article
///
/// Wiki links and API results disagree on underscores versus spaces, so those
/// are treated as equal. Everything else, including case, must match.
pub fn same_article(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .chars()
            .zip(b.chars())
            .all(|(x, y)| x == y || (is_separator(x) && is_separator(y)))
}

fn is_separator(c: char) -> bool {
    c == ' ' || c == '_'
}
