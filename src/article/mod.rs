//! Structured how-to articles
//!
//! Provides structures for representing how-to articles and the two ways of
//! producing them: parsing tagged model output and adapting scrape results.
//!
//! This module is organized into:
//! - `types`: Core article data structures (Article, Step, RelatedLink)
//! - `parsing`: Tagged-text scanner
//! - `builder`: ArticleBuilder for assembling articles in code
//! - `scraped`: Scrape-service payloads and their conversion

mod builder;
mod parsing;
mod scraped;
mod types;

pub use self::builder::ArticleBuilder;
pub use self::parsing::{Line, Section, classify, parse_article};
pub use self::scraped::{SCRAPED_READ_TIME, ScrapedArticle, ScrapedStep};
pub use self::types::{
    Article, DEFAULT_DIFFICULTY, MIN_READ_TIME, RelatedLink, Step, read_time_for,
};
