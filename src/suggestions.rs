//! Query suggestion parsing
//!
//! When a query is too vague, the backend is asked for a handful of more
//! specific alternatives returned as a numbered list.

use tracing::debug;

use crate::text::{clean_lines, strip_list_number};

/// Maximum number of suggestions returned
pub const MAX_SUGGESTIONS: usize = 4;

/// Queries with at most this many words get suggestions instead of an answer
pub const DEFAULT_SHORT_QUERY_WORDS: usize = 3;

/// Parse a numbered list of alternative queries
///
/// Numbering is stripped, blank entries are dropped and at most
/// [`MAX_SUGGESTIONS`] entries are kept, in order.
///
/// # Examples
///
/// ```
/// use stepwise::parse_suggestions;
///
/// let suggestions = parse_suggestions("1. How to bake bread\n2. How to bake a cake\n\n3.");
/// assert_eq!(suggestions, vec!["How to bake bread", "How to bake a cake"]);
/// ```
pub fn parse_suggestions(text: &str) -> Vec<String> {
    let suggestions: Vec<String> = clean_lines(text)
        .map(|line| strip_list_number(line).trim())
        .filter(|line| !line.is_empty())
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect();

    debug!("Parsed {} suggestions", suggestions.len());
    suggestions
}

/// Check whether a query is short enough to warrant suggestions
///
/// Blank queries are not short queries; they are rejected earlier.
///
/// ```
/// use stepwise::suggestions::is_short_query;
///
/// assert!(is_short_query("bake bread", 3));
/// assert!(!is_short_query("how to bake sourdough bread", 3));
/// assert!(!is_short_query("   ", 3));
/// ```
pub fn is_short_query(query: &str, max_words: usize) -> bool {
    let words = query.split_whitespace().count();
    words > 0 && words <= max_words
}
