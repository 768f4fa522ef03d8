#![doc = include_str!("../README.md")]

/// Structured how-to articles
pub mod article;
mod config;
mod error;
/// Guide orchestration over a text-generation backend
pub mod guide;
/// Prompt templates and audience routing
pub mod prompts;
/// Free-form step parsing
pub mod steps;
/// Query suggestion parsing
pub mod suggestions;
/// Line-cleaning helpers shared by the parsers
pub mod text;

pub use article::{
    Article, ArticleBuilder, RelatedLink, ScrapedArticle, ScrapedStep, Step, parse_article,
};
pub use config::GuideConfig;
pub use error::{GuideError, Result};
pub use guide::{Guide, GuideResponse, PromptBackend, ScrapeBackend};
pub use prompts::{AgeGroup, GuideView, article_prompt, suggestion_prompt};
pub use steps::parse_steps;
pub use suggestions::parse_suggestions;
