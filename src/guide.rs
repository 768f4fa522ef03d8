//! Guide orchestration over a text-generation backend
//!
//! A [`Guide`] pairs the prompt templates in [`prompts`](crate::prompts)
//! with the parsers: it sends one prompt, waits for one answer and turns the
//! answer into steps, suggestions or an article. Transport is left to the
//! [`PromptBackend`] and [`ScrapeBackend`] implementations.

use std::future::Future;

use tokio::time::timeout;
use tracing::{debug, warn};

use crate::article::{Article, ScrapedArticle, parse_article};
use crate::config::GuideConfig;
use crate::error::{GuideError, Result};
use crate::prompts::{AgeGroup, GuideView, article_prompt, steps_prompt, suggestion_prompt};
use crate::steps::parse_steps;
use crate::suggestions::{is_short_query, parse_suggestions};

/// Text shown as the only step when the backend answers with nothing
pub const NO_RESPONSE_TEXT: &str = "No response received";

/// Service that answers a prompt with generated text
///
/// Each call is a single request with a single outcome. Failures should be
/// reported as [`GuideError::Backend`] carrying the message to show the user.
pub trait PromptBackend {
    /// Submit a prompt and return the generated text
    fn submit(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Service that looks up a ready-made how-to article for a query
///
/// [`GuideError::Backend`] failures surface as [`GuideError::Scrape`].
pub trait ScrapeBackend {
    /// Fetch a structured article for `query`
    fn scrape(&self, query: &str) -> impl Future<Output = Result<ScrapedArticle>> + Send;
}

impl<T: PromptBackend + Sync + ?Sized> PromptBackend for &T {
    fn submit(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send {
        (**self).submit(prompt)
    }
}

impl<T: ScrapeBackend + Sync + ?Sized> ScrapeBackend for &T {
    fn scrape(&self, query: &str) -> impl Future<Output = Result<ScrapedArticle>> + Send {
        (**self).scrape(query)
    }
}

/// What a guide produced for a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideResponse {
    /// Plain steps for the step-by-step view
    Steps(Vec<String>),
    /// More specific queries to pick from (the query was too short)
    Suggestions(Vec<String>),
    /// A structured article
    Article(Article),
}

/// How-to guide over a prompt backend
///
/// # Example
///
/// ```no_run
/// use stepwise::{Guide, GuideConfig, GuideResponse, PromptBackend, Result};
///
/// struct MyBackend;
///
/// impl PromptBackend for MyBackend {
///     async fn submit(&self, _prompt: &str) -> Result<String> {
///         Ok("1. Fold the paper in half\n2. Fold the corners down".to_string())
///     }
/// }
///
/// # async fn example() -> Result<()> {
/// let guide = Guide::new(MyBackend, GuideConfig::default());
/// let steps = guide.ask_steps("How to make a paper airplane?").await?;
/// assert_eq!(steps.len(), 2);
///
/// match guide.search("how to bake sourdough bread at home").await? {
///     GuideResponse::Article(article) => println!("{}", article.title),
///     GuideResponse::Suggestions(list) => println!("Did you mean: {list:?}"),
///     GuideResponse::Steps(_) => unreachable!(),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Guide<B> {
    backend: B,
    config: GuideConfig,
}

impl<B: PromptBackend> Guide<B> {
    /// Create a guide over `backend`
    pub fn new(backend: B, config: GuideConfig) -> Self {
        Self { backend, config }
    }

    /// Current configuration
    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run one backend call under the configured timeout
    async fn call<T>(&self, what: &str, request: impl Future<Output = Result<T>>) -> Result<T> {
        match timeout(self.config.request_timeout, request).await {
            Ok(Ok(value)) => {
                debug!("{} request succeeded", what);
                Ok(value)
            }
            Ok(Err(e)) => {
                warn!("{} request failed: {}", what, e);
                Err(e)
            }
            Err(_) => {
                warn!(
                    "{} request timed out after {:?}",
                    what, self.config.request_timeout
                );
                Err(GuideError::Timeout)
            }
        }
    }

    async fn submit(&self, prompt: &str) -> Result<String> {
        debug!("Submitting prompt ({} bytes)", prompt.len());
        self.call("Prompt", self.backend.submit(prompt)).await
    }

    /// Answer a question as plain steps
    ///
    /// The question is sent as-is. An empty answer becomes a single
    /// "No response received" step.
    pub async fn ask_steps(&self, question: &str) -> Result<Vec<String>> {
        let question = question.trim();
        if question.is_empty() {
            return Err(GuideError::EmptyQuery);
        }

        let response = self.submit(&steps_prompt(question)).await?;
        let text = if response.is_empty() {
            NO_RESPONSE_TEXT
        } else {
            response.as_str()
        };
        Ok(parse_steps(text))
    }

    /// Ask for more specific alternatives to a short query
    ///
    /// Any failure, including an answer with no usable lines, is reported as
    /// [`GuideError::QueryTooShort`] so the user is asked for more detail.
    pub async fn suggest(&self, short_query: &str) -> Result<Vec<String>> {
        let response = self
            .submit(&suggestion_prompt(short_query.trim()))
            .await
            .map_err(|_| GuideError::QueryTooShort)?;

        let suggestions = parse_suggestions(&response);
        if suggestions.is_empty() {
            debug!("No usable suggestions for '{}'", short_query);
            return Err(GuideError::QueryTooShort);
        }
        Ok(suggestions)
    }

    /// Reject blank queries and divert short ones to suggestions
    async fn gate(&self, query: &str) -> Result<Option<GuideResponse>> {
        if query.is_empty() {
            return Err(GuideError::EmptyQuery);
        }
        if is_short_query(query, self.config.short_query_words) {
            debug!("Query '{}' is short, offering suggestions", query);
            return self.suggest(query).await.map(|s| Some(GuideResponse::Suggestions(s)));
        }
        Ok(None)
    }

    /// Search for an article generated by the backend
    ///
    /// Short queries return [`GuideResponse::Suggestions`] instead. The
    /// query doubles as the title when the answer has no `TITLE:` line.
    pub async fn search(&self, query: &str) -> Result<GuideResponse> {
        let query = query.trim();
        if let Some(suggestions) = self.gate(query).await? {
            return Ok(suggestions);
        }

        let response = self.submit(&article_prompt(query)).await?;
        Ok(GuideResponse::Article(parse_article(&response, query)))
    }

    /// Search for an article through a scrape service instead of generation
    ///
    /// Short queries still go through the prompt backend for suggestions.
    pub async fn search_scraped<S: ScrapeBackend>(
        &self,
        scraper: &S,
        query: &str,
    ) -> Result<GuideResponse> {
        let query = query.trim();
        if let Some(suggestions) = self.gate(query).await? {
            return Ok(suggestions);
        }

        debug!("Scraping article for '{}'", query);
        let scraped = self
            .call("Scrape", scraper.scrape(query))
            .await
            .map_err(|e| match e {
                GuideError::Backend(message) => GuideError::Scrape(message),
                other => other,
            })?;
        Ok(GuideResponse::Article(Article::from_scraped(scraped, query)))
    }

    /// Answer a query in the view that suits `group`
    pub async fn ask(&self, group: AgeGroup, query: &str) -> Result<GuideResponse> {
        match group.view() {
            GuideView::Steps => self.ask_steps(query).await.map(GuideResponse::Steps),
            GuideView::Article => self.search(query).await,
        }
    }
}
