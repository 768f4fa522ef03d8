//! Tagged article parsing
//!
//! Model output written against the article template looks like:
//!
//! ```text
//! TITLE: How to Bake Bread
//! INTRODUCTION: Fresh bread at home.
//! PREREQUISITES:
//! - Oven
//! STEPS:
//! STEP 1: Mix
//! Combine flour and water.
//! TIPS:
//! - Use warm water
//! CONCLUSION: Enjoy.
//! RELATED:
//! - Bread machines
//! ```
//!
//! Parsing is a line scanner over an explicit [`Section`] state. Every line is
//! classified on its own by [`classify`] and then applied to the scanner.

use tracing::{debug, trace};

use crate::text::{clean_lines, is_bullet, strip_bullet};

use super::types::{Article, DEFAULT_DIFFICULTY, RelatedLink, Step, read_time_for};

/// Section the scanner is currently filling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Before any section header
    #[default]
    None,
    /// After `INTRODUCTION:`
    Intro,
    /// After `PREREQUISITES:`
    Prereq,
    /// After `STEPS:`
    Steps,
    /// After `CONCLUSION:`
    Conclusion,
    /// After `RELATED:`
    Related,
}

/// Classification of a single trimmed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `TITLE: <text>`
    Title(&'a str),
    /// `INTRODUCTION: <text>`
    Introduction(&'a str),
    /// `PREREQUISITES:`
    Prerequisites,
    /// `STEPS:`
    Steps,
    /// `CONCLUSION: <text>`
    Conclusion(&'a str),
    /// `RELATED:`
    Related,
    /// `STEP <n>: <title>`
    StepHeading(&'a str),
    /// `TIPS:` header, always ignored
    TipsHeader,
    /// Anything else
    Continuation(&'a str),
}

/// Classify one trimmed line; the first matching rule wins
pub fn classify(line: &str) -> Line<'_> {
    if let Some(rest) = line.strip_prefix("TITLE:") {
        Line::Title(rest.trim())
    } else if let Some(rest) = line.strip_prefix("INTRODUCTION:") {
        Line::Introduction(rest.trim())
    } else if line.starts_with("PREREQUISITES:") {
        Line::Prerequisites
    } else if line.starts_with("STEPS:") {
        Line::Steps
    } else if let Some(rest) = line.strip_prefix("CONCLUSION:") {
        Line::Conclusion(rest.trim())
    } else if line.starts_with("RELATED:") {
        Line::Related
    } else if let Some(title) = step_heading(line) {
        Line::StepHeading(title)
    } else if line.starts_with("TIPS:") {
        Line::TipsHeader
    } else {
        Line::Continuation(line)
    }
}

/// Match `STEP <digits>:` and return the trimmed remainder
fn step_heading(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("STEP ")?;
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[digits..].strip_prefix(':').map(str::trim)
}

/// Line scanner state for one parse call
#[derive(Debug)]
struct ArticleScanner {
    article: Article,
    section: Section,
    current_step: Option<Step>,
    current_tips: Vec<String>,
}

impl ArticleScanner {
    fn new(fallback_title: &str) -> Self {
        Self {
            article: Article {
                title: fallback_title.to_string(),
                introduction: None,
                prerequisites: None,
                steps: Vec::new(),
                conclusion: None,
                related_links: None,
                read_time: read_time_for(0),
                difficulty: DEFAULT_DIFFICULTY.to_string(),
            },
            section: Section::None,
            current_step: None,
            current_tips: Vec::new(),
        }
    }

    /// Close the open step, attaching any collected tips
    fn flush(&mut self) {
        if let Some(mut step) = self.current_step.take() {
            if !self.current_tips.is_empty() {
                step.tips = Some(std::mem::take(&mut self.current_tips));
            }
            self.article.steps.push(step);
        }
    }

    fn apply(&mut self, line: &str) {
        match classify(line) {
            Line::Title(title) => self.article.title = title.to_string(),
            Line::Introduction(text) => {
                self.section = Section::Intro;
                self.article.introduction = Some(text.to_string());
            }
            Line::Prerequisites => {
                self.section = Section::Prereq;
                self.article.prerequisites = Some(Vec::new());
            }
            Line::Steps => self.section = Section::Steps,
            Line::Conclusion(text) => {
                self.section = Section::Conclusion;
                self.article.conclusion = Some(text.to_string());
            }
            Line::Related => {
                self.section = Section::Related;
                self.article.related_links = Some(Vec::new());
            }
            Line::StepHeading(title) => {
                self.flush();
                self.current_tips.clear();
                self.current_step = Some(Step::new(title));
            }
            Line::TipsHeader => {}
            Line::Continuation(text) => self.continue_section(text),
        }
    }

    fn continue_section(&mut self, line: &str) {
        match self.section {
            Section::Intro => append_sentence(&mut self.article.introduction, line),
            Section::Prereq => {
                if let Some(prereqs) = self.article.prerequisites.as_mut() {
                    if line != "None" {
                        prereqs.push(strip_bullet(line).to_string());
                    }
                }
            }
            Section::Steps => match self.current_step.as_mut() {
                Some(_) if is_bullet(line) => {
                    self.current_tips.push(strip_bullet(line).to_string());
                }
                Some(step) => step.push_description(line),
                None => trace!("Dropping step text outside of a step: {}", line),
            },
            Section::Conclusion => append_sentence(&mut self.article.conclusion, line),
            Section::Related => {
                if let Some(links) = self.article.related_links.as_mut() {
                    links.push(RelatedLink::search(strip_bullet(line)));
                }
            }
            Section::None => trace!("Dropping line outside of any section: {}", line),
        }
    }

    fn finish(mut self) -> Article {
        self.flush();
        self.article.read_time = read_time_for(self.article.steps.len());
        self.article
    }
}

/// Append a continuation line to a section that already has text
///
/// An empty header (`INTRODUCTION:` with nothing after it) swallows its
/// continuation lines.
fn append_sentence(target: &mut Option<String>, line: &str) {
    if let Some(text) = target.as_mut().filter(|text| !text.is_empty()) {
        text.push(' ');
        text.push_str(line);
    }
}

/// Parse tagged model output into an [`Article`]
///
/// Never fails. Text without any recognised tags yields an article titled
/// `fallback_title` with no steps.
///
/// # Examples
///
/// ```
/// use stepwise::parse_article;
///
/// let text = "TITLE: Make Tea\nSTEPS:\nSTEP 1: Boil water\nUse fresh water.\n- Don't overfill";
/// let article = parse_article(text, "tea");
///
/// assert_eq!(article.title, "Make Tea");
/// assert_eq!(article.steps[0].description, "Use fresh water.");
/// assert_eq!(article.steps[0].tips.as_deref(), Some(&["Don't overfill".to_string()][..]));
/// ```
pub fn parse_article(text: &str, fallback_title: &str) -> Article {
    let mut scanner = ArticleScanner::new(fallback_title);
    for line in clean_lines(text) {
        scanner.apply(line);
    }
    let article = scanner.finish();

    debug!(
        "Parsed article '{}' with {} steps",
        article.title,
        article.step_count()
    );
    article
}
