// ABOUTME: Domain models for normalized podcast feeds.
// ABOUTME: Podcast, Episode, Category, and Enclosure as returned to callers.

use serde::{Deserialize, Serialize};

/// The media attachment of a single episode.
///
/// All three fields are verbatim strings from the feed; the byte length is
/// deliberately left unparsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enclosure {
    pub url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub length: String,
}

/// One flattened feed category label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// A single episode item of a podcast feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub title: Option<String>,
    pub guid: String,
    pub link_url: Option<String>,
    /// Publication date as the feed carries it; not parsed to a date type.
    pub pub_date: Option<String>,
    pub description: Option<String>,
    /// Duration as the feed carries it ("3600", "45:30", ...), unparsed.
    pub duration_in_seconds: Option<String>,
    pub image_url: Option<String>,
    pub explicit: bool,
    pub number: Option<u32>,
    pub season: Option<u32>,
    #[serde(rename = "type")]
    pub episode_type: Option<String>,
    pub enclosure: Option<Enclosure>,
}

/// A normalized podcast feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub language: Option<String>,
    /// Document order, with sub-categories flattened behind their parent.
    pub categories: Vec<Category>,
    pub explicit: bool,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub copyright: Option<String>,
    pub funding_url: Option<String>,
    #[serde(rename = "type")]
    pub podcast_type: Option<String>,
    pub episodes: Vec<Episode>,
}
