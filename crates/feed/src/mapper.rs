// ABOUTME: Pure mapping from raw parsed XML shapes into the Podcast domain model.
// ABOUTME: Owns required-field validation, category flattening, and explicit-flag coercion.

use crate::error::FeedError;
use crate::models::{Category, Enclosure, Episode, Podcast};
use crate::raw::{RawCategory, RawChannel, RawEnclosure, RawEpisode, RawFeed};

/// Parses feed XML into a Podcast without any I/O.
///
/// Runs the parse, channel-extraction, validation, and mapping steps;
/// parser failures surface inside the generic load-failure envelope.
pub fn parse_feed(xml: &str) -> Result<Podcast, FeedError> {
    let document: RawFeed =
        quick_xml::de::from_str(xml).map_err(|e| FeedError::Parse(e.to_string()))?;

    let channel = document.channel.ok_or(FeedError::MissingChannel)?;

    map_channel(channel)
}

/// Maps a channel into the domain model, validating required fields first.
fn map_channel(channel: RawChannel) -> Result<Podcast, FeedError> {
    let title = require_field(channel.title, "title")?;
    let link = require_field(channel.link, "link")?;

    Ok(Podcast {
        title,
        description: channel.description,
        link,
        language: channel.language,
        categories: map_categories(&channel.categories),
        // channel-level explicit uses the true/false vocabulary
        explicit: channel.explicit.as_deref() == Some("true"),
        image_url: channel.image.and_then(|image| image.href),
        author: channel.author,
        copyright: channel.copyright,
        funding_url: channel.funding.and_then(|funding| funding.url),
        podcast_type: channel.channel_type,
        episodes: map_episodes(channel.items)?,
    })
}

/// Rejects absent or empty mandatory fields, naming the field.
fn require_field(value: Option<String>, name: &'static str) -> Result<String, FeedError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(FeedError::MissingField(name)),
    }
}

/// Flattens one level of category nesting, parent before its children.
/// Anything nested deeper than one level is dropped.
fn map_categories(categories: &[RawCategory]) -> Vec<Category> {
    let mut flattened = Vec::new();
    for category in categories {
        flattened.push(Category {
            name: category.text.clone(),
        });
        for sub in &category.subcategories {
            flattened.push(Category {
                name: sub.text.clone(),
            });
        }
    }
    flattened
}

fn map_episodes(items: Vec<RawEpisode>) -> Result<Vec<Episode>, FeedError> {
    items.into_iter().map(map_episode).collect()
}

/// Maps one item; the guid text wrapper is the only structurally required part.
fn map_episode(item: RawEpisode) -> Result<Episode, FeedError> {
    let guid = item
        .guid
        .and_then(|guid| guid.value)
        .filter(|value| !value.is_empty())
        .ok_or(FeedError::MissingField("guid"))?;

    Ok(Episode {
        title: item.title,
        guid,
        link_url: item.link,
        pub_date: item.pub_date,
        description: item.description,
        duration_in_seconds: item.duration,
        image_url: item.image.and_then(|image| image.href),
        // episode-level explicit uses the yes/no vocabulary
        explicit: item.explicit.as_deref() == Some("yes"),
        number: item.number,
        season: item.season,
        episode_type: item.episode_type,
        enclosure: map_enclosure(item.enclosures),
    })
}

/// Keeps only the first enclosure entry, attributes verbatim.
fn map_enclosure(enclosures: Vec<RawEnclosure>) -> Option<Enclosure> {
    enclosures.into_iter().next().map(|enclosure| Enclosure {
        url: enclosure.url,
        mime_type: enclosure.mime_type,
        length: enclosure.length,
    })
}
