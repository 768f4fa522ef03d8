//! Pre-structured articles from a scrape service
//!
//! A scrape service returns articles already split into fields, so there is
//! no text to parse. Converting them into an [`Article`] only fills defaults.

use super::types::{Article, DEFAULT_DIFFICULTY, RelatedLink, Step};

/// Read time used when the scrape result has none
pub const SCRAPED_READ_TIME: u32 = 5;

/// Article as delivered by a scrape service
///
/// With the `serde` feature this deserializes straight from the service's
/// JSON (`relatedLinks`, `readTime`; unknown fields such as `status` are
/// ignored).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct ScrapedArticle {
    /// Page title
    pub title: Option<String>,
    /// Introduction paragraph
    pub introduction: Option<String>,
    /// "Things you'll need"
    pub prerequisites: Option<Vec<String>>,
    /// Extracted steps
    pub steps: Vec<ScrapedStep>,
    /// Closing paragraph
    pub conclusion: Option<String>,
    /// Related articles
    pub related_links: Option<Vec<RelatedLink>>,
    /// Read time in minutes
    pub read_time: Option<u32>,
    /// Difficulty label
    pub difficulty: Option<String>,
    /// URL the article was scraped from
    pub source: Option<String>,
}

/// One step of a scraped article
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScrapedStep {
    /// Step title
    pub title: String,
    /// Step text
    pub description: String,
    /// Tips attached to the step
    pub tips: Option<Vec<String>>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl From<ScrapedStep> for Step {
    fn from(step: ScrapedStep) -> Self {
        Step {
            title: step.title,
            description: step.description,
            tips: step.tips,
        }
    }
}

impl Article {
    /// Build an article from a scrape result
    ///
    /// - a missing or empty title falls back to `query`
    /// - missing prerequisites, tips and related links stay `None`; empty
    ///   lists are kept as empty lists
    /// - a missing or zero read time becomes 5 minutes
    /// - a missing or empty difficulty becomes "Intermediate"
    ///
    /// # Examples
    ///
    /// ```
    /// use stepwise::article::{Article, ScrapedArticle, ScrapedStep};
    ///
    /// let scraped = ScrapedArticle {
    ///     steps: vec![ScrapedStep {
    ///         title: "Gather supplies".to_string(),
    ///         description: "Get paper and scissors.".to_string(),
    ///         tips: None,
    ///     }],
    ///     ..Default::default()
    /// };
    ///
    /// let article = Article::from_scraped(scraped, "how to make a paper airplane");
    /// assert_eq!(article.title, "how to make a paper airplane");
    /// assert_eq!(article.read_time, 5);
    /// ```
    pub fn from_scraped(scraped: ScrapedArticle, query: &str) -> Self {
        Article {
            title: non_empty(scraped.title).unwrap_or_else(|| query.to_string()),
            introduction: scraped.introduction,
            prerequisites: scraped.prerequisites,
            steps: scraped.steps.into_iter().map(Step::from).collect(),
            conclusion: scraped.conclusion,
            related_links: scraped.related_links,
            read_time: scraped
                .read_time
                .filter(|&minutes| minutes > 0)
                .unwrap_or(SCRAPED_READ_TIME),
            difficulty: non_empty(scraped.difficulty)
                .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
        }
    }
}

impl From<ScrapedArticle> for Article {
    /// Convert without a query; a missing title becomes empty
    fn from(scraped: ScrapedArticle) -> Self {
        Article::from_scraped(scraped, "")
    }
}
