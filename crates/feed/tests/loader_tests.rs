// ABOUTME: Integration tests for PodcastLoader against a local mock HTTP server.
// ABOUTME: Covers the success path, transport errors, empty bodies, and the fetch deadline.

use std::time::Duration;

use httpmock::prelude::*;
use podling_feed::{FeedError, PodcastLoader};
use pretty_assertions::assert_eq;

const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd" xmlns:podcast="https://podcastindex.org/namespace/1.0">
    <channel>
        <title>Test Podcast</title>
        <description>A test podcast</description>
        <link>https://example.com</link>
        <language>en</language>
        <itunes:category text="Technology">
            <itunes:category text="Software How-To"/>
        </itunes:category>
        <itunes:category text="Business">
            <itunes:category text="Careers"/>
        </itunes:category>
        <itunes:explicit>true</itunes:explicit>
        <itunes:image href="https://example.com/image.jpg"/>
        <itunes:author>John Doe</itunes:author>
        <copyright>2024 Test Podcast</copyright>
        <podcast:funding url="https://example.com/support">Support Us</podcast:funding>
        <itunes:type>episodic</itunes:type>
        <item>
            <title>Episode 1</title>
            <guid>episode-1-guid</guid>
            <link>https://example.com/episode1</link>
            <pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate>
            <description>First episode</description>
            <itunes:duration>3600</itunes:duration>
            <itunes:image href="https://example.com/ep1.jpg"/>
            <itunes:explicit>yes</itunes:explicit>
            <itunes:episode>1</itunes:episode>
            <itunes:season>1</itunes:season>
            <itunes:episodeType>full</itunes:episodeType>
            <enclosure url="https://example.com/ep1.mp3" type="audio/mpeg" length="123456"/>
            <enclosure url="https://example.com/ep1-alt.ogg" type="audio/ogg" length="654321"/>
        </item>
        <item>
            <title>Episode 2</title>
            <guid>episode-2-guid</guid>
        </item>
    </channel>
</rss>"#;

#[tokio::test]
async fn loads_and_normalizes_a_valid_feed() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/feed.xml");
        then.status(200)
            .header("content-type", "application/rss+xml")
            .body(SAMPLE_FEED);
    });

    let loader = PodcastLoader::new();
    let podcast = loader
        .get_podcast_from_feed(&server.url("/feed.xml"))
        .await
        .expect("feed should load");
    mock.assert();

    assert_eq!(podcast.title, "Test Podcast");
    assert_eq!(podcast.link, "https://example.com");
    assert!(podcast.explicit);

    // two parents, each with one child, flattened in document order
    let category_names: Vec<&str> = podcast.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        category_names,
        vec!["Technology", "Software How-To", "Business", "Careers"]
    );

    assert_eq!(podcast.episodes.len(), 2);

    let first = &podcast.episodes[0];
    assert_eq!(first.guid, "episode-1-guid");
    assert!(first.explicit);
    assert_eq!(first.duration_in_seconds.as_deref(), Some("3600"));
    let enclosure = first.enclosure.as_ref().unwrap();
    assert_eq!(enclosure.url, "https://example.com/ep1.mp3");
    assert_eq!(enclosure.mime_type, "audio/mpeg");
    assert_eq!(enclosure.length, "123456");

    let second = &podcast.episodes[1];
    assert_eq!(second.guid, "episode-2-guid");
    assert!(!second.explicit);
    assert_eq!(second.enclosure, None);
}

#[tokio::test]
async fn http_error_status_is_wrapped_once() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing.xml");
        then.status(404);
    });

    let loader = PodcastLoader::new();
    let err = loader
        .get_podcast_from_feed(&server.url("/missing.xml"))
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(
        err.to_string(),
        "failed to load podcast feed: failed to fetch podcast feed: 404 Not Found"
    );
}

#[tokio::test]
async fn whitespace_body_is_an_empty_feed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/empty.xml");
        then.status(200).body("   \n\t  ");
    });

    let loader = PodcastLoader::new();
    let err = loader
        .get_podcast_from_feed(&server.url("/empty.xml"))
        .await
        .unwrap_err();

    assert!(matches!(err, FeedError::EmptyFeed));
    assert_eq!(
        err.to_string(),
        "failed to load podcast feed: podcast feed is empty"
    );
}

#[tokio::test]
async fn missing_channel_is_reported_as_invalid_feed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/no-channel.xml");
        then.status(200).body("<rss version=\"2.0\"></rss>");
    });

    let loader = PodcastLoader::new();
    let err = loader
        .get_podcast_from_feed(&server.url("/no-channel.xml"))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid podcast feed: missing channel data"
    );
}

#[tokio::test]
async fn missing_required_channel_field_names_the_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/no-title.xml");
        then.status(200).body(
            "<rss><channel><link>https://example.com</link></channel></rss>",
        );
    });

    let loader = PodcastLoader::new();
    let err = loader
        .get_podcast_from_feed(&server.url("/no-title.xml"))
        .await
        .unwrap_err();

    assert!(err.is_format());
    assert_eq!(
        err.to_string(),
        "invalid podcast feed: missing required field \"title\""
    );
}

#[tokio::test]
async fn malformed_xml_is_wrapped_once() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/garbage.xml");
        then.status(200).body("this is not xml");
    });

    let loader = PodcastLoader::new();
    let err = loader
        .get_podcast_from_feed(&server.url("/garbage.xml"))
        .await
        .unwrap_err();

    assert!(err.is_wrapped());
    let message = err.to_string();
    assert!(message.starts_with("failed to load podcast feed: "));
    assert_eq!(message.matches("failed to load podcast feed:").count(), 1);
}

#[tokio::test]
async fn stalled_server_hits_the_deadline() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow.xml");
        then.status(200)
            .delay(Duration::from_millis(500))
            .body(SAMPLE_FEED);
    });

    let loader = PodcastLoader::builder()
        .timeout(Duration::from_millis(50))
        .build();
    let err = loader
        .get_podcast_from_feed(&server.url("/slow.xml"))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(err.to_string(), "podcast feed request timeout after 50ms");
}

#[tokio::test]
async fn network_failure_is_a_transport_error() {
    let loader = PodcastLoader::new();
    let err = loader
        .get_podcast_from_feed("http://does-not-exist.invalid/feed.xml")
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(err
        .to_string()
        .starts_with("failed to load podcast feed: "));
}
