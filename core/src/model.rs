use serde::{
    Deserialize,
    Serialize,
};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

use crate::{
    timestamp,
    PlayData,
};

/// One observed play event from a backup file.
///
/// Input lines carry snake_case keys; the canonical serialized form is
/// PascalCase. The alias table below is the whole rename mapping.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayRecord {
    #[serde(alias = "artist")]
    pub artist: String,

    #[serde(alias = "track")]
    pub track: String,

    #[serde(alias = "timestamp", with = "timestamp")]
    pub timestamp: OffsetDateTime,

    #[serde(alias = "album")]
    pub album: Option<String>,

    /// Track length in seconds; pass-through only.
    #[serde(alias = "duration")]
    pub duration: Option<u32>,

    #[serde(alias = "spotify_id")]
    pub spotify_id: Option<String>,

    #[serde(alias = "album_cover")]
    pub album_cover: Option<String>,

    #[serde(alias = "artwork")]
    pub artwork: Option<String>,

    /// Present only in aggregate views, never in raw timelines.
    #[serde(alias = "count")]
    pub count: Option<u64>,

    #[serde(alias = "lifetime")]
    pub lifetime: Option<bool>,
}

impl PlayData for PlayRecord {
    fn artist_name(&self) -> &str { self.artist.as_str() }

    fn track_name(&self) -> &str { self.track.as_str() }

    fn timestamp(&self) -> Option<OffsetDateTime> { Some(self.timestamp) }

    fn count(&self) -> Option<u64> { self.count }

    fn artwork(&self) -> Option<&str> { non_empty(&self.album_cover).or_else(|| non_empty(&self.artwork)) }

    fn spotify_id(&self) -> Option<&str> { non_empty(&self.spotify_id) }

    fn lifetime(&self) -> bool { self.lifetime == Some(true) }
}

/// Play count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonthlyCount {
    /// Sort key, `YYYY-MM`.
    pub month: String,
    /// Chart label, e.g. `January 2006`.
    pub pretty: String,
    pub count: u64,
}

/// Ranked play count for one track over some period.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackTally {
    pub track: String,
    pub artist: String,
    pub album: Option<String>,
    pub count: u64,
    pub artwork: Option<String>,
    pub spotify: Option<String>,
    /// Set when a lifetime-history series exists for this track.
    pub lifetime: Option<bool>,
}

impl PlayData for TrackTally {
    fn artist_name(&self) -> &str { self.artist.as_str() }

    fn track_name(&self) -> &str { self.track.as_str() }

    fn count(&self) -> Option<u64> { Some(self.count) }

    fn artwork(&self) -> Option<&str> { non_empty(&self.artwork) }

    fn spotify_id(&self) -> Option<&str> { non_empty(&self.spotify) }

    fn lifetime(&self) -> bool { self.lifetime == Some(true) }
}

/// Ranked play count for one artist over some period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArtistTally {
    pub artist: String,
    pub count: u64,
}

/// One row of the recently-played timeline.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecentPlay {
    pub track: String,
    pub artist: String,
    pub album: Option<String>,
    #[serde(with = "timestamp")]
    pub timestamp: OffsetDateTime,
    pub artwork: Option<String>,
}

impl PlayData for RecentPlay {
    fn artist_name(&self) -> &str { self.artist.as_str() }

    fn track_name(&self) -> &str { self.track.as_str() }

    fn timestamp(&self) -> Option<OffsetDateTime> { Some(self.timestamp) }

    fn artwork(&self) -> Option<&str> { non_empty(&self.artwork) }
}

/// All-time tallies for one artist, tracks ranked by play count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArtistTracks {
    pub name: String,
    pub tracks: Vec<TrackTally>,
}

impl ArtistTracks {
    pub fn total_plays(&self) -> u64 { self.tracks.iter().map(|t| t.count).sum() }
}

/// Dashboard overview payload, `stats.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Overview {
    pub plays_by_month: Vec<MonthlyCount>,

    pub plays_year: Vec<TrackTally>,
    pub plays_month: Vec<TrackTally>,
    pub plays_week: Vec<TrackTally>,

    pub artists_year: Vec<ArtistTally>,
    pub artists_month: Vec<ArtistTally>,
    pub artists_week: Vec<ArtistTally>,

    #[serde(with = "timestamp")]
    pub last_updated: OffsetDateTime,
}

/// Recently-played payload, `stats-recent.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecentSummary {
    #[serde(with = "timestamp")]
    pub last_updated: OffsetDateTime,
    pub recent_plays: Vec<RecentPlay>,
}

/// Per-artist track tallies payload, `stats-tracks.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TracksSummary {
    #[serde(with = "timestamp")]
    pub last_updated: OffsetDateTime,
    pub artists: Vec<ArtistTracks>,
}

fn non_empty(field: &Option<String>) -> Option<&str> { field.as_deref().filter(|s| !s.is_empty()) }
