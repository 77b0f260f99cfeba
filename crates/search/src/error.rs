// ABOUTME: Error types for catalog search and lookup operations.
// ABOUTME: Provides SearchError with parameter, HTTP-status, and fetch-wrapping variants.

use std::fmt;

use thiserror::Error;

use crate::options::{Entity, MediaType};

/// The remote endpoint a request was issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEndpoint {
    Search,
    Lookup,
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApiEndpoint::Search => "Search API",
            ApiEndpoint::Lookup => "Lookup API",
        };
        write!(f, "{}", s)
    }
}

/// Errors that can occur while building or executing a catalog request.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search term was empty or whitespace-only.
    #[error("search term must not be empty")]
    EmptyTerm,

    /// The entity is not permitted for the chosen media type.
    #[error("entity \"{entity}\" is not valid for media type \"{media}\"")]
    InvalidEntity { media: MediaType, entity: Entity },

    /// The endpoint answered with a non-success HTTP status.
    #[error("{api} request failed with status {status}")]
    Status { api: ApiEndpoint, status: u16 },

    /// A network-level or body-decode failure, wrapped once.
    #[error("Fetch failed: {0}")]
    Fetch(String),
}

impl SearchError {
    /// Returns true if the parameter set was rejected before any request.
    pub fn is_invalid_params(&self) -> bool {
        matches!(
            self,
            SearchError::EmptyTerm | SearchError::InvalidEntity { .. }
        )
    }

    /// Returns true if the endpoint answered with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, SearchError::Status { .. })
    }

    /// Returns true if the request failed below the HTTP layer.
    pub fn is_fetch(&self) -> bool {
        matches!(self, SearchError::Fetch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_the_endpoint() {
        let search = SearchError::Status {
            api: ApiEndpoint::Search,
            status: 404,
        };
        assert_eq!(
            search.to_string(),
            "Search API request failed with status 404"
        );

        let lookup = SearchError::Status {
            api: ApiEndpoint::Lookup,
            status: 404,
        };
        assert_eq!(
            lookup.to_string(),
            "Lookup API request failed with status 404"
        );
    }

    #[test]
    fn test_fetch_message_prefix() {
        let err = SearchError::Fetch("connection refused".to_string());
        assert_eq!(err.to_string(), "Fetch failed: connection refused");
        assert!(err.is_fetch());
    }
}
