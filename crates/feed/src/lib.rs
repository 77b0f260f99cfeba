// ABOUTME: Core podcast feed library for podling.
// ABOUTME: Fetches RSS feeds and normalizes them into the Podcast domain model.

pub mod error;
pub mod loader;
pub mod mapper;
pub mod models;
pub mod raw;

pub use error::FeedError;
pub use loader::{PodcastLoader, PodcastLoaderBuilder, DEFAULT_FETCH_TIMEOUT};
pub use mapper::parse_feed;
pub use models::{Category, Enclosure, Episode, Podcast};
