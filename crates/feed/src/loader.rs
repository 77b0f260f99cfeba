// ABOUTME: Fetch orchestration for podcast feeds.
// ABOUTME: Validates the URL, fetches with a bounded deadline, and hands off to the mapper.

use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::error::FeedError;
use crate::mapper::parse_feed;
use crate::models::Podcast;

/// Default bound on a single feed fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Loads podcast feeds over HTTP and normalizes them.
///
/// Holds only fixed configuration; every call is one independent fetch
/// with no retries and no shared state.
#[derive(Debug, Clone)]
pub struct PodcastLoader {
    http: reqwest::Client,
    timeout: Duration,
}

impl PodcastLoader {
    /// Creates a loader with the default 30 second fetch timeout.
    pub fn new() -> Self {
        PodcastLoaderBuilder::new().build()
    }

    /// Starts building a loader with custom settings.
    pub fn builder() -> PodcastLoaderBuilder {
        PodcastLoaderBuilder::new()
    }

    /// Fetches the feed URL and returns the normalized podcast.
    pub async fn get_podcast_from_feed(&self, feed_url: &str) -> Result<Podcast, FeedError> {
        let url =
            Url::parse(feed_url).map_err(|_| FeedError::InvalidUrl(feed_url.to_string()))?;

        let body = self.fetch_feed(url).await?;

        if body.trim().is_empty() {
            return Err(FeedError::EmptyFeed);
        }

        parse_feed(&body)
    }

    /// One GET bounded by the configured deadline. Dropping the timed-out
    /// future aborts the in-flight request; the timer is released on every
    /// exit path.
    async fn fetch_feed(&self, url: Url) -> Result<String, FeedError> {
        debug!(%url, timeout_ms = self.timeout.as_millis() as u64, "fetching podcast feed");

        let fetch = async {
            let response = self
                .http
                .get(url.clone())
                .send()
                .await
                .map_err(|e| FeedError::Request(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FeedError::Status {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or_default().to_string(),
                });
            }

            response
                .text()
                .await
                .map_err(|e| FeedError::Request(e.to_string()))
        };

        match tokio::time::timeout(self.timeout, fetch).await {
            Ok(result) => result,
            Err(_) => {
                warn!(%url, "podcast feed fetch hit the deadline");
                Err(FeedError::Timeout(self.timeout.as_millis() as u64))
            }
        }
    }
}

impl Default for PodcastLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for PodcastLoader instances with a custom timeout or HTTP client.
#[derive(Debug, Clone, Default)]
pub struct PodcastLoaderBuilder {
    http: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl PodcastLoaderBuilder {
    /// Create a new PodcastLoaderBuilder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound a single feed fetch to the given duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Builds the loader with the configured settings.
    pub fn build(self) -> PodcastLoader {
        PodcastLoader {
            http: self.http.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_FETCH_TIMEOUT),
        }
    }
}
