// ABOUTME: Search request parameters including the media type and entity enums.
// ABOUTME: SearchParams validates media/entity pairing and serializes to ordered query pairs.

use std::fmt;

use crate::error::SearchError;

/// The kind of catalog content a search is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    Podcast,
    Music,
    MusicVideo,
    Audiobook,
    ShortFilm,
    TvShow,
    Software,
    Ebook,
    All,
}

impl MediaType {
    /// The query-parameter form expected by the catalog API.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Podcast => "podcast",
            MediaType::Music => "music",
            MediaType::MusicVideo => "musicVideo",
            MediaType::Audiobook => "audiobook",
            MediaType::ShortFilm => "shortFilm",
            MediaType::TvShow => "tvShow",
            MediaType::Software => "software",
            MediaType::Ebook => "ebook",
            MediaType::All => "all",
        }
    }

    /// Entities that may narrow a search for this media type.
    pub fn permitted_entities(&self) -> &'static [Entity] {
        match self {
            MediaType::Movie => &[Entity::MovieArtist, Entity::Movie],
            MediaType::Podcast => &[Entity::PodcastAuthor, Entity::Podcast],
            MediaType::Music => &[
                Entity::MusicArtist,
                Entity::MusicTrack,
                Entity::Album,
                Entity::MusicVideo,
                Entity::Mix,
                Entity::Song,
            ],
            MediaType::MusicVideo => &[Entity::MusicArtist, Entity::MusicVideo],
            MediaType::Audiobook => &[Entity::AudiobookAuthor, Entity::Audiobook],
            MediaType::ShortFilm => &[Entity::ShortFilmArtist, Entity::ShortFilm],
            MediaType::TvShow => &[Entity::TvEpisode, Entity::TvSeason],
            MediaType::Software => &[
                Entity::Software,
                Entity::IPadSoftware,
                Entity::MacSoftware,
            ],
            MediaType::Ebook => &[Entity::Ebook],
            MediaType::All => &[
                Entity::Movie,
                Entity::Album,
                Entity::AllArtist,
                Entity::Podcast,
                Entity::MusicVideo,
                Entity::Mix,
                Entity::Audiobook,
                Entity::TvSeason,
                Entity::AllTrack,
            ],
        }
    }

    /// Returns true if `entity` may be combined with this media type.
    pub fn permits(&self, entity: Entity) -> bool {
        self.permitted_entities().contains(&entity)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sub-kind of search result, restricted by media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    MovieArtist,
    Movie,
    PodcastAuthor,
    Podcast,
    MusicArtist,
    MusicTrack,
    Album,
    MusicVideo,
    Mix,
    Song,
    AudiobookAuthor,
    Audiobook,
    ShortFilmArtist,
    ShortFilm,
    TvEpisode,
    TvSeason,
    Software,
    IPadSoftware,
    MacSoftware,
    Ebook,
    AllArtist,
    AllTrack,
}

impl Entity {
    /// The query-parameter form expected by the catalog API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::MovieArtist => "movieArtist",
            Entity::Movie => "movie",
            Entity::PodcastAuthor => "podcastAuthor",
            Entity::Podcast => "podcast",
            Entity::MusicArtist => "musicArtist",
            Entity::MusicTrack => "musicTrack",
            Entity::Album => "album",
            Entity::MusicVideo => "musicVideo",
            Entity::Mix => "mix",
            Entity::Song => "song",
            Entity::AudiobookAuthor => "audiobookAuthor",
            Entity::Audiobook => "audiobook",
            Entity::ShortFilmArtist => "shortFilmArtist",
            Entity::ShortFilm => "shortFilm",
            Entity::TvEpisode => "tvEpisode",
            Entity::TvSeason => "tvSeason",
            Entity::Software => "software",
            Entity::IPadSoftware => "iPadSoftware",
            Entity::MacSoftware => "macSoftware",
            Entity::Ebook => "ebook",
            Entity::AllArtist => "allArtist",
            Entity::AllTrack => "allTrack",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether explicit results are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplicitFilter {
    Yes,
    No,
}

impl ExplicitFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplicitFilter::Yes => "Yes",
            ExplicitFilter::No => "No",
        }
    }
}

/// A validated set of catalog search parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    media: MediaType,
    entity: Option<Entity>,
    term: String,
    country: Option<String>,
    limit: Option<u32>,
    lang: Option<String>,
    version: Option<u32>,
    explicit: Option<ExplicitFilter>,
}

impl SearchParams {
    /// Starts building parameters for the given media type and term.
    pub fn builder(media: MediaType, term: impl Into<String>) -> SearchParamsBuilder {
        SearchParamsBuilder {
            media,
            entity: None,
            term: term.into(),
            country: None,
            limit: None,
            lang: None,
            version: None,
            explicit: None,
        }
    }

    pub fn media(&self) -> MediaType {
        self.media
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Serializes every defined parameter in declaration order.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("media", self.media.as_str().to_string())];
        if let Some(entity) = self.entity {
            pairs.push(("entity", entity.as_str().to_string()));
        }
        pairs.push(("term", self.term.clone()));
        if let Some(ref country) = self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(ref lang) = self.lang {
            pairs.push(("lang", lang.clone()));
        }
        if let Some(version) = self.version {
            pairs.push(("version", version.to_string()));
        }
        if let Some(explicit) = self.explicit {
            pairs.push(("explicit", explicit.as_str().to_string()));
        }
        pairs
    }
}

/// Builder for SearchParams; the media/entity pairing is checked at build().
#[derive(Debug, Clone)]
pub struct SearchParamsBuilder {
    media: MediaType,
    entity: Option<Entity>,
    term: String,
    country: Option<String>,
    limit: Option<u32>,
    lang: Option<String>,
    version: Option<u32>,
    explicit: Option<ExplicitFilter>,
}

impl SearchParamsBuilder {
    /// Narrow results to a single entity kind.
    pub fn entity(mut self, entity: Entity) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Two-letter store country code.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Maximum number of results to return.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Language for the returned result strings.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Search API version.
    pub fn version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Include or exclude explicit results.
    pub fn explicit(mut self, explicit: ExplicitFilter) -> Self {
        self.explicit = Some(explicit);
        self
    }

    /// Validates the parameter set.
    pub fn build(self) -> Result<SearchParams, SearchError> {
        if self.term.trim().is_empty() {
            return Err(SearchError::EmptyTerm);
        }

        if let Some(entity) = self.entity {
            if !self.media.permits(entity) {
                return Err(SearchError::InvalidEntity {
                    media: self.media,
                    entity,
                });
            }
        }

        Ok(SearchParams {
            media: self.media,
            entity: self.entity,
            term: self.term,
            country: self.country,
            limit: self.limit,
            lang: self.lang,
            version: self.version,
            explicit: self.explicit,
        })
    }
}
