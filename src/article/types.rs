//! Article type definitions
//!
//! This module contains the core data structures for representing how-to articles.

use std::fmt::Write;

use crate::text::search_url;

/// Difficulty used when none is supplied
pub const DEFAULT_DIFFICULTY: &str = "Intermediate";

/// Minimum estimated read time in minutes
pub const MIN_READ_TIME: u32 = 3;

/// Structured how-to article
///
/// An article has a title, an ordered list of steps and a handful of
/// optional sections. Articles come either from [`parse_article`] (tagged
/// model output) or from [`Article::from_scraped`] (pre-structured scrape
/// results).
///
/// [`parse_article`]: crate::article::parse_article
///
/// # Examples
///
/// ```
/// use stepwise::article::{ArticleBuilder, Step};
///
/// let article = ArticleBuilder::new("How to Brew Tea")
///     .introduction("A calm cup in five minutes.")
///     .step(Step::new("Boil water").with_description("Bring fresh water to a boil."))
///     .step(Step::new("Steep").with_description("Steep for three minutes."))
///     .build();
///
/// assert_eq!(article.steps.len(), 2);
/// assert_eq!(article.read_time, 3);
/// assert_eq!(article.difficulty, "Intermediate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Article {
    /// Article title
    pub title: String,
    /// What the article covers and why it is useful
    pub introduction: Option<String>,
    /// Things needed before starting, one entry per item
    pub prerequisites: Option<Vec<String>>,
    /// Steps in source order
    pub steps: Vec<Step>,
    /// Closing summary
    pub conclusion: Option<String>,
    /// Related topics with search links
    pub related_links: Option<Vec<RelatedLink>>,
    /// Estimated read time in minutes
    pub read_time: u32,
    /// Difficulty label (e.g. "Intermediate")
    pub difficulty: String,
}

/// One instructional unit of an article
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Short step title
    pub title: String,
    /// Step body, continuation lines joined with single spaces
    pub description: String,
    /// Optional tips; `None` when the step has none
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub tips: Option<Vec<String>>,
}

/// A related topic and where to look it up
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelatedLink {
    /// Topic title
    pub title: String,
    /// Link to the topic
    pub url: String,
}

impl Step {
    /// Create a step with a title and no description
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            tips: None,
        }
    }

    /// Set the step description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the step tips
    #[must_use]
    pub fn with_tips(mut self, tips: Vec<impl Into<String>>) -> Self {
        self.tips = Some(tips.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Append a continuation line to the description
    pub(crate) fn push_description(&mut self, line: &str) {
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(line);
    }
}

impl RelatedLink {
    /// Create a link pointing at a search for `title`
    pub fn search(title: impl Into<String>) -> Self {
        let title = title.into();
        let url = search_url(&title);
        Self { title, url }
    }
}

/// Estimated read time for an article with `step_count` steps
///
/// One and a half minutes per step, rounded up, never below three minutes.
///
/// ```
/// use stepwise::article::read_time_for;
///
/// assert_eq!(read_time_for(0), 3);
/// assert_eq!(read_time_for(3), 5);
/// assert_eq!(read_time_for(4), 6);
/// ```
pub fn read_time_for(step_count: usize) -> u32 {
    let minutes = step_count.saturating_mul(3).div_ceil(2);
    u32::try_from(minutes)
        .unwrap_or(u32::MAX)
        .max(MIN_READ_TIME)
}

impl Article {
    /// Number of steps in the article
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Serialize the article back into the tagged template
    ///
    /// The output follows the `TITLE:/INTRODUCTION:/PREREQUISITES:/STEPS:/
    /// CONCLUSION:/RELATED:` layout that [`parse_article`] reads, so parsing
    /// it again reproduces this article (read time is always recomputed).
    ///
    /// [`parse_article`]: crate::article::parse_article
    pub fn to_tagged_text(&self) -> String {
        let mut out = String::new();

        // write! to String cannot fail
        let _ = writeln!(out, "TITLE: {}", self.title);
        out.push('\n');

        if let Some(intro) = &self.introduction {
            let _ = writeln!(out, "INTRODUCTION: {intro}");
            out.push('\n');
        }

        if let Some(prereqs) = &self.prerequisites {
            out.push_str("PREREQUISITES:\n");
            for item in prereqs {
                let _ = writeln!(out, "- {item}");
            }
            out.push('\n');
        }

        out.push_str("STEPS:\n");
        for (index, step) in self.steps.iter().enumerate() {
            let _ = writeln!(out, "STEP {}: {}", index + 1, step.title);
            if !step.description.is_empty() {
                let _ = writeln!(out, "{}", step.description);
            }
            if let Some(tips) = &step.tips {
                out.push_str("TIPS:\n");
                for tip in tips {
                    let _ = writeln!(out, "- {tip}");
                }
            }
            out.push('\n');
        }

        if let Some(conclusion) = &self.conclusion {
            let _ = writeln!(out, "CONCLUSION: {conclusion}");
            out.push('\n');
        }

        if let Some(links) = &self.related_links {
            out.push_str("RELATED:\n");
            for link in links {
                let _ = writeln!(out, "- {}", link.title);
            }
        }

        out
    }
}
