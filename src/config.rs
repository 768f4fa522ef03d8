//! Guide configuration

use std::time::Duration;

use crate::suggestions::DEFAULT_SHORT_QUERY_WORDS;

/// Default time allowed for a single backend call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Guide configuration
///
/// Controls how long a backend call may take and which queries are
/// considered too short to answer directly.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use stepwise::GuideConfig;
///
/// // Defaults: 30 second timeout, suggestions for queries of 3 words or fewer
/// let config = GuideConfig::default();
///
/// // Or adjust individual settings
/// let config = GuideConfig::default()
///     .with_request_timeout(Duration::from_secs(10))
///     .with_short_query_words(2);
///
/// // Or construct manually
/// let config = GuideConfig {
///     request_timeout: Duration::from_secs(10),
///     short_query_words: 2,
/// };
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuideConfig {
    /// Maximum time to wait for a backend response
    ///
    /// Serialized as whole seconds.
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_request_timeout", with = "duration_secs")
    )]
    pub request_timeout: Duration,

    /// Queries with this many words or fewer get suggestions instead of an article
    ///
    /// Set to 0 to disable suggestions.
    ///
    /// Default: 3
    #[cfg_attr(feature = "serde", serde(default = "default_short_query_words"))]
    pub short_query_words: usize,
}

#[cfg(feature = "serde")]
fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

#[cfg(feature = "serde")]
fn default_short_query_words() -> usize {
    DEFAULT_SHORT_QUERY_WORDS
}

#[cfg(feature = "serde")]
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(value.as_secs())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            short_query_words: DEFAULT_SHORT_QUERY_WORDS,
        }
    }
}

impl GuideConfig {
    /// Create a configuration with explicit values
    ///
    /// # Arguments
    ///
    /// * `request_timeout` - Maximum time to wait for a backend response
    /// * `short_query_words` - Word count at or below which suggestions are offered
    pub fn new(request_timeout: Duration, short_query_words: usize) -> Self {
        Self {
            request_timeout,
            short_query_words,
        }
    }

    /// Configuration that never offers suggestions
    pub fn without_suggestions() -> Self {
        Self {
            short_query_words: 0,
            ..Default::default()
        }
    }

    /// Set the backend timeout
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Set the short-query word threshold
    pub fn with_short_query_words(mut self, words: usize) -> Self {
        self.short_query_words = words;
        self
    }
}
