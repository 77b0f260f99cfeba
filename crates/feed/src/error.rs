// ABOUTME: Error types for podcast feed loading and mapping.
// ABOUTME: Tagged variants carry the input/timeout/transport/format/wrapped taxonomy.

use thiserror::Error;

/// Errors that can occur while loading or mapping a podcast feed.
///
/// Display output is the full user-visible message; unclassified failures
/// carry the "failed to load podcast feed" envelope exactly once.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed URL did not parse as an absolute URL; nothing was fetched.
    #[error("invalid feed URL: {0}")]
    InvalidUrl(String),

    /// The fetch exceeded the configured deadline and was aborted.
    #[error("podcast feed request timeout after {0}ms")]
    Timeout(u64),

    /// The feed host answered with a non-success HTTP status.
    #[error("failed to load podcast feed: failed to fetch podcast feed: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The request failed below the HTTP layer.
    #[error("failed to load podcast feed: {0}")]
    Request(String),

    /// The response body contained nothing but whitespace.
    #[error("failed to load podcast feed: podcast feed is empty")]
    EmptyFeed,

    /// The parsed document has no channel node.
    #[error("invalid podcast feed: missing channel data")]
    MissingChannel,

    /// A mandatory channel or episode field is absent or empty.
    #[error("invalid podcast feed: missing required field \"{0}\"")]
    MissingField(&'static str),

    /// Any other failure, wrapped once.
    #[error("failed to load podcast feed: {0}")]
    Parse(String),
}

impl FeedError {
    /// Returns true if the URL was rejected before any network call.
    pub fn is_input(&self) -> bool {
        matches!(self, FeedError::InvalidUrl(_))
    }

    /// Returns true if the fetch hit the deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FeedError::Timeout(_))
    }

    /// Returns true for HTTP-status and network-level failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, FeedError::Status { .. } | FeedError::Request(_))
    }

    /// Returns true for empty, channel-less, or field-incomplete feeds.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            FeedError::EmptyFeed | FeedError::MissingChannel | FeedError::MissingField(_)
        )
    }

    /// Returns true if an unclassified failure was wrapped.
    pub fn is_wrapped(&self) -> bool {
        matches!(self, FeedError::Parse(_))
    }
}
