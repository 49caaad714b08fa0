/// Punctuation folded to spaces before titles are compared
const PUNCTUATION: &str = "\\()[]{},.;:'\"!?/|<>@#$%^&*+=~`";

/// Words ignored when tokenizing titles
const STOP_WORDS: &[&str] = &[
    "the", "of", "and", "in", "to", "a", "an", "for", "on", "at", "by", "with",
];

/// Normalizes a title for fuzzy comparison
///
/// # Normalization Steps
///
/// 1. Lowercase
/// 2. Underscores become spaces
/// 3. Punctuation becomes spaces (hyphens are kept)
/// 4. Runs of whitespace collapse to a single space
/// 5. Trim
///
/// # Examples
///
/// ```
/// use wiki_swipe::title::normalize_for_match;
///
/// assert_eq!(normalize_for_match("Tesla,_Inc."), "tesla inc");
/// assert_eq!(normalize_for_match("  Mercury (planet) "), "mercury planet");
/// ```
pub fn normalize_for_match(s: &str) -> String {
    let folded: String = s
        .to_lowercase()
        .chars()
        .map(|c| {
            if c == '_' || PUNCTUATION.contains(c) {
                ' '
            } else {
                c
            }
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a title into meaningful lowercase words
///
/// Tokens shorter than two characters and common stop words are dropped.
/// Duplicates are kept in order.
pub fn tokenize(s: &str) -> Vec<String> {
    normalize_for_match(s)
        .split(' ')
        .filter(|w| w.chars().count() >= 2 && !STOP_WORDS.contains(w))
        .map(str::to_string)
        .collect()
}
