//! Guide error types
//!
//! The parsers in this crate are total and never produce these errors.
//! They only describe what can go wrong around a backend round-trip.

use thiserror::Error;

/// Fallback shown when a backend fails without saying why
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing your request";

/// Fallback shown when the scrape service fails without saying why
pub const SCRAPE_FAILURE_MESSAGE: &str = "Failed to scrape WikiHow. Try a different query.";

/// Shown when a short query produced no usable suggestions
pub const MORE_DETAIL_MESSAGE: &str =
    "Please provide more details (at least 4 words) for better accuracy.";

/// Errors raised by the guide layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    /// Query was empty or whitespace only
    #[error("Please enter a question")]
    EmptyQuery,

    /// Query was too short and no suggestions could be produced for it
    #[error("Query too short")]
    QueryTooShort,

    /// The prompt backend reported a failure
    #[error("Backend error: {0}")]
    Backend(String),

    /// The scrape service reported a failure
    #[error("Scrape error: {0}")]
    Scrape(String),

    /// The backend did not answer within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Unknown age group name
    #[error("Unknown age group: {0}")]
    InvalidAgeGroup(String),
}

impl GuideError {
    /// Message suitable for showing to an end user
    ///
    /// Backend failures surface the backend's own message when it has one.
    pub fn user_message(&self) -> String {
        match self {
            GuideError::EmptyQuery => "Please enter a question".to_string(),
            GuideError::QueryTooShort => MORE_DETAIL_MESSAGE.to_string(),
            GuideError::Backend(message) if message.trim().is_empty() => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            GuideError::Scrape(message) if message.trim().is_empty() => {
                SCRAPE_FAILURE_MESSAGE.to_string()
            }
            GuideError::Backend(message) | GuideError::Scrape(message) => message.clone(),
            GuideError::Timeout => "Request timed out".to_string(),
            GuideError::InvalidAgeGroup(name) => format!("Unknown age group: {name}"),
        }
    }
}

/// Result type alias using GuideError
pub type Result<T> = std::result::Result<T, GuideError>;
