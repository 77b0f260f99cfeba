// ABOUTME: Client library for the iTunes catalog search and lookup endpoints.
// ABOUTME: Builds query URLs from validated parameters and decodes JSON result envelopes.

pub mod client;
pub mod error;
pub mod options;
pub mod results;

pub use client::{SearchClient, SearchClientBuilder, ITUNES_LOOKUP_URL, ITUNES_SEARCH_URL};
pub use error::{ApiEndpoint, SearchError};
pub use options::{Entity, ExplicitFilter, MediaType, SearchParams, SearchParamsBuilder};
pub use results::{Explicitness, Kind, SearchResponse, SearchResult, WrapperType};
