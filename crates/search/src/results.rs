// ABOUTME: Typed result envelope for the catalog search and lookup endpoints.
// ABOUTME: Mirrors the wire format; absent fields stay absent, never null.

use serde::{Deserialize, Serialize};

/// Result wrapper classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WrapperType {
    Track,
    Collection,
    Artist,
}

/// Content-rating classification of a track or collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Explicitness {
    Explicit,
    Cleaned,
    NotExplicit,
}

/// The concrete content kind of a result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Book,
    Album,
    CoachedAudio,
    FeatureMovie,
    InteractiveBooklet,
    MusicVideo,
    Pdf,
    Podcast,
    PodcastEpisode,
    SoftwarePackage,
    Song,
    TvEpisode,
    Artist,
}

/// One catalog result row. The body is trusted as-is; every field the
/// endpoint may omit stays optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper_type: Option<WrapperType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_censored_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_censored_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_view_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_view_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_view_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_url30: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_url60: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_url100: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_explicitness: Option<Explicitness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_explicitness: Option<Explicitness>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_time_millis: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_genre_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// The result-count-plus-results envelope returned by both endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    pub result_count: u32,
    pub results: Vec<SearchResult>,
}
