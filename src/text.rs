//! Line-cleaning helpers shared by the parsers

use std::sync::LazyLock;

use regex::Regex;

/// Base URL for related-topic search links
pub const SEARCH_URL_PREFIX: &str = "https://www.google.com/search?q=";

/// Leading `<digits>` with optional `.` and optional whitespace
static LIST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.?\s*").expect("valid list number regex"));

const BULLETS: [char; 3] = ['-', '•', '*'];

/// Check whether a line starts with a bullet marker (`-`, `•` or `*`)
pub fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLETS)
}

/// Strip one leading bullet marker and the whitespace after it
///
/// Lines without a bullet are returned unchanged.
///
/// ```
/// use stepwise::text::strip_bullet;
///
/// assert_eq!(strip_bullet("- Flour"), "Flour");
/// assert_eq!(strip_bullet("•Sugar"), "Sugar");
/// assert_eq!(strip_bullet("Eggs"), "Eggs");
/// ```
pub fn strip_bullet(line: &str) -> &str {
    match line.strip_prefix(BULLETS) {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Strip a leading list number such as `1.`, `2. ` or `3 `
pub fn strip_list_number(line: &str) -> &str {
    match LIST_NUMBER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Trimmed, non-empty lines of `text`
pub fn clean_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

/// Search link for a topic, percent-encoded
pub fn search_url(query: &str) -> String {
    format!("{SEARCH_URL_PREFIX}{}", urlencoding::encode(query))
}
