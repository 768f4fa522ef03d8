//! Free-form step parsing
//!
//! Turns unstructured prose into an ordered list of plain steps. The first
//! splitting strategy that finds more than one segment wins:
//!
//! 1. numbered list (`1. `, `2. `, ...)
//! 2. `Step N:` headings (any case)
//! 3. paragraphs separated by blank lines
//! 4. individual lines

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::text::clean_lines;

/// `To ..., follow these steps:` and friends
static INTRO_FOLLOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:To .+?, follow these steps?:|Here are the steps?:|Follow these steps?:)\s*",
    )
    .expect("valid intro regex")
});

/// `Here's how to ...:` and friends
static INTRO_HOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Here's how to .+?:|Here's how you .+?:|Let me show you how .+?:)\s*")
        .expect("valid intro regex")
});

/// Newline followed by a numbered-list marker
static NUMBERED_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[0-9]+\.\s").expect("valid numbered break regex"));

static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+").expect("valid numbered prefix regex"));

/// Newline followed by a `Step N:` heading
static STEP_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\nStep\s+[0-9]+:").expect("valid step break regex"));

static STEP_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Step\s+[0-9]+:\s*").expect("valid step prefix regex"));

/// One or more empty lines; whitespace-only lines are not breaks
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\n+").expect("valid paragraph regex"));

#[derive(Debug, Clone, Copy)]
enum Strategy {
    Numbered,
    Named,
    Paragraphs,
    Lines,
    Whole,
}

/// Remove a leading "Here are the steps:"-style lead-in and trim
pub fn strip_intro(text: &str) -> String {
    let first = INTRO_FOLLOW.replace(text, "");
    INTRO_HOW.replace(&first, "").trim().to_string()
}

/// Split `text` at every newline where `marker` matches, dropping the newline
///
/// `marker` must start with `\n`. Matching resumes right after each newline
/// so adjacent markers are all found.
fn split_before<'a>(text: &'a str, marker: &Regex) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut start = 0;

    while let Some(m) = marker.find_at(text, start) {
        segments.push(&text[start..m.start()]);
        start = m.start() + 1;
    }
    segments.push(&text[start..]);
    segments
}

fn strip_each(segments: Vec<&str>, prefix: &Regex) -> Vec<String> {
    segments
        .into_iter()
        .map(|segment| prefix.replace(segment, "").trim().to_string())
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn split_steps(text: &str) -> (Vec<String>, Strategy) {
    let numbered = split_before(text, &NUMBERED_BREAK);
    if numbered.len() > 1 {
        return (strip_each(numbered, &NUMBERED_PREFIX), Strategy::Numbered);
    }

    let named = split_before(text, &STEP_BREAK);
    if named.len() > 1 {
        return (strip_each(named, &STEP_PREFIX), Strategy::Named);
    }

    let paragraphs: Vec<String> = PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if paragraphs.len() == 1 {
        return (clean_lines(text).map(str::to_string).collect(), Strategy::Lines);
    }

    (paragraphs, Strategy::Paragraphs)
}

/// Split a free-form answer into plain steps
///
/// Always returns at least one entry: when no strategy finds anything the
/// whole cleaned text is returned as a single step.
///
/// # Examples
///
/// ```
/// use stepwise::parse_steps;
///
/// let steps = parse_steps("Here are the steps:\n1. Wash the cup\n2. Dry it\n3. Put it away");
/// assert_eq!(steps, vec!["Wash the cup", "Dry it", "Put it away"]);
///
/// let steps = parse_steps("Sit down.\n\nStand up.\n\nWalk.");
/// assert_eq!(steps, vec!["Sit down.", "Stand up.", "Walk."]);
/// ```
pub fn parse_steps(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    let cleaned = strip_intro(&normalized);

    let (steps, strategy) = split_steps(&cleaned);
    let (steps, strategy) = if steps.is_empty() {
        (vec![cleaned], Strategy::Whole)
    } else {
        (steps, strategy)
    };

    debug!("Split response into {} steps ({:?})", steps.len(), strategy);
    steps
}
