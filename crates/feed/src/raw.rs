// ABOUTME: Loosely-typed raw shapes produced by the XML-to-tree deserializer.
// ABOUTME: Input-only structs; every shape policy is deferred to the mapper.

use serde::Deserialize;

// quick-xml's serde layer surfaces attributes under an "@" prefix, element
// text under "$text", and collects repeated sibling elements into Vec
// fields. Fields that may appear once or many times are declared Vec here
// so the mapper always iterates a sequence.

/// Root of a parsed feed document (the children of `<rss>`).
#[derive(Debug, Default, Deserialize)]
pub struct RawFeed {
    pub channel: Option<RawChannel>,
}

/// The top-level channel metadata node.
#[derive(Debug, Default, Deserialize)]
pub struct RawChannel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "category", default)]
    pub categories: Vec<RawCategory>,
    #[serde(rename = "explicit")]
    pub explicit: Option<String>,
    #[serde(rename = "image")]
    pub image: Option<RawImage>,
    #[serde(rename = "author")]
    pub author: Option<String>,
    pub copyright: Option<String>,
    #[serde(rename = "funding")]
    pub funding: Option<RawFunding>,
    #[serde(rename = "type")]
    pub channel_type: Option<String>,
    #[serde(rename = "item", default)]
    pub items: Vec<RawEpisode>,
}

/// One category node; sub-categories nest one level below.
#[derive(Debug, Default, Deserialize)]
pub struct RawCategory {
    #[serde(rename = "@text", default)]
    pub text: String,
    #[serde(rename = "category", default)]
    pub subcategories: Vec<RawCategory>,
}

/// An image reference carried as an href attribute.
#[derive(Debug, Default, Deserialize)]
pub struct RawImage {
    #[serde(rename = "@href")]
    pub href: Option<String>,
}

/// A funding link carried as a url attribute.
#[derive(Debug, Default, Deserialize)]
pub struct RawFunding {
    #[serde(rename = "@url")]
    pub url: Option<String>,
}

/// The guid element's text-content wrapper.
#[derive(Debug, Default, Deserialize)]
pub struct RawGuid {
    #[serde(rename = "$text")]
    pub value: Option<String>,
}

/// One item node of the channel.
#[derive(Debug, Default, Deserialize)]
pub struct RawEpisode {
    pub title: Option<String>,
    pub guid: Option<RawGuid>,
    pub link: Option<String>,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "duration")]
    pub duration: Option<String>,
    #[serde(rename = "image")]
    pub image: Option<RawImage>,
    #[serde(rename = "explicit")]
    pub explicit: Option<String>,
    #[serde(rename = "episode")]
    pub number: Option<u32>,
    #[serde(rename = "season")]
    pub season: Option<u32>,
    #[serde(rename = "episodeType")]
    pub episode_type: Option<String>,
    #[serde(rename = "enclosure", default)]
    pub enclosures: Vec<RawEnclosure>,
}

/// One enclosure entry; attributes pass through verbatim.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawEnclosure {
    #[serde(rename = "@url", default)]
    pub url: String,
    #[serde(rename = "@type", default)]
    pub mime_type: String,
    #[serde(rename = "@length", default)]
    pub length: String,
}
