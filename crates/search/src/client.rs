// ABOUTME: HTTP client for the catalog search and lookup endpoints.
// ABOUTME: Performs a single GET per call and decodes the JSON result envelope.

use tracing::debug;
use url::Url;

use crate::error::{ApiEndpoint, SearchError};
use crate::options::SearchParams;
use crate::results::SearchResponse;

/// Fixed base endpoint for catalog searches.
pub const ITUNES_SEARCH_URL: &str = "https://itunes.apple.com/search";

/// Fixed base endpoint for id lookups.
pub const ITUNES_LOOKUP_URL: &str = "https://itunes.apple.com/lookup";

/// Client for the catalog search and lookup endpoints.
///
/// Holds no state beyond its fixed configuration; every call is one
/// independent GET with no retries.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    search_url: Url,
    lookup_url: Url,
}

impl SearchClient {
    /// Creates a client against the fixed production endpoints.
    pub fn new() -> Self {
        SearchClientBuilder::new().build()
    }

    /// Starts building a client with custom settings.
    pub fn builder() -> SearchClientBuilder {
        SearchClientBuilder::new()
    }

    /// Searches the catalog with the given parameters.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse, SearchError> {
        let url = self.build_search_url(params);
        self.get_envelope(url, ApiEndpoint::Search).await
    }

    /// Looks up a single catalog entry by its identifier.
    pub async fn lookup_by_id(&self, id: u64) -> Result<SearchResponse, SearchError> {
        let mut url = self.lookup_url.clone();
        url.query_pairs_mut().append_pair("id", &id.to_string());
        self.get_envelope(url, ApiEndpoint::Lookup).await
    }

    fn build_search_url(&self, params: &SearchParams) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params.query_pairs() {
                query.append_pair(key, &value);
            }
        }
        url
    }

    async fn get_envelope(
        &self,
        url: Url,
        api: ApiEndpoint,
    ) -> Result<SearchResponse, SearchError> {
        debug!(%url, %api, "requesting catalog endpoint");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                api,
                status: status.as_u16(),
            });
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| SearchError::Fetch(e.to_string()))
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for SearchClient instances with custom endpoints or HTTP client.
#[derive(Debug, Clone, Default)]
pub struct SearchClientBuilder {
    http: Option<reqwest::Client>,
    search_url: Option<Url>,
    lookup_url: Option<Url>,
}

impl SearchClientBuilder {
    /// Create a new SearchClientBuilder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Override the search endpoint.
    pub fn search_url(mut self, url: Url) -> Self {
        self.search_url = Some(url);
        self
    }

    /// Override the lookup endpoint.
    pub fn lookup_url(mut self, url: Url) -> Self {
        self.lookup_url = Some(url);
        self
    }

    /// Builds the client, falling back to the fixed production endpoints.
    pub fn build(self) -> SearchClient {
        SearchClient {
            http: self.http.unwrap_or_default(),
            search_url: self
                .search_url
                .unwrap_or_else(|| Url::parse(ITUNES_SEARCH_URL).unwrap()),
            lookup_url: self
                .lookup_url
                .unwrap_or_else(|| Url::parse(ITUNES_LOOKUP_URL).unwrap()),
        }
    }
}
