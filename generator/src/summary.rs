//! Dashboard summary payloads, computed from the backup itself.
//!
//! Everything here is a pure function of `(plays, now)` so that artifacts
//! come out identical for any permutation of the input lines.

use std::{
    collections::{
        BTreeMap,
        BTreeSet,
    },
    fs,
    path::Path,
};

use anyhow::{
    Context,
    Result,
};
use playlog_core::{
    slug,
    ArtistTally,
    ArtistTracks,
    MonthlyCount,
    Overview,
    PlayRecord,
    RecentPlay,
    RecentSummary,
    TrackTally,
    TracksSummary,
};
use serde::Serialize;
use time::{
    Duration,
    OffsetDateTime,
};

/// Ranked lists mirror the dashboard layout: ten entries per period card.
const PERIOD_LIMIT: usize = 10;
const RECENT_LIMIT: usize = 100;

/// Play counts per calendar month (UTC), ascending by month.
pub fn counts_by_month<'a, I>(plays: I) -> Vec<MonthlyCount>
where
    I: IntoIterator<Item = &'a PlayRecord>,
{
    let mut counts: BTreeMap<String, (String, u64)> = BTreeMap::new();
    for play in plays {
        let ts = play.timestamp;
        let month = format!("{:04}-{:02}", ts.year(), u8::from(ts.month()));
        let pretty = format!("{} {}", ts.month(), ts.year());
        counts.entry(month).or_insert((pretty, 0)).1 += 1;
    }

    counts
        .into_iter()
        .map(|(month, (pretty, count))| MonthlyCount { month, pretty, count })
        .collect()
}

/// Most-played tracks since `since`, grouped by (track, artist, album).
///
/// Ties rank ascending by artist then track so the output is deterministic.
pub fn top_tracks(plays: &[PlayRecord], since: OffsetDateTime, limit: usize) -> Vec<TrackTally> {
    let mut tallies: BTreeMap<(&str, &str, Option<&str>), TrackTally> = BTreeMap::new();
    for play in plays.iter().filter(|p| p.timestamp >= since) {
        let key = (play.artist.as_str(), play.track.as_str(), play.album.as_deref());
        let tally = tallies.entry(key).or_insert_with(|| blank_tally(play, play.album.clone()));
        tally.count += 1;
        absorb_metadata(tally, play);
    }

    rank(tallies.into_values().collect(), limit)
}

/// Most-played artists since `since`; ties rank ascending by name.
pub fn top_artists(plays: &[PlayRecord], since: OffsetDateTime, limit: usize) -> Vec<ArtistTally> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for play in plays.iter().filter(|p| p.timestamp >= since) {
        *counts.entry(play.artist.as_str()).or_default() += 1;
    }

    let mut tallies: Vec<ArtistTally> = counts
        .into_iter()
        .map(|(artist, count)| ArtistTally { artist: artist.to_owned(), count })
        .collect();
    tallies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.artist.cmp(&b.artist)));
    tallies.truncate(limit);
    tallies
}

/// The newest `limit` plays, newest first.
pub fn recent_plays(plays: &[PlayRecord], limit: usize) -> Vec<RecentPlay> {
    let mut ordered: Vec<&PlayRecord> = plays.iter().collect();
    ordered.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.artist.cmp(&b.artist))
            .then_with(|| a.track.cmp(&b.track))
    });

    ordered
        .into_iter()
        .take(limit)
        .map(|p| RecentPlay {
            track: p.track.clone(),
            artist: p.artist.clone(),
            album: p.album.clone(),
            timestamp: p.timestamp,
            artwork: p.album_cover.clone().filter(|c| !c.is_empty()),
        })
        .collect()
}

/// The `stats.json` payload: monthly counts plus year/month/week top tens.
pub fn overview(plays: &[PlayRecord], now: OffsetDateTime) -> Overview {
    let year = now - Duration::days(365);
    let month = now - Duration::days(30);
    let week = now - Duration::days(7);

    Overview {
        plays_by_month: counts_by_month(plays),

        plays_year: top_tracks(plays, year, PERIOD_LIMIT),
        plays_month: top_tracks(plays, month, PERIOD_LIMIT),
        plays_week: top_tracks(plays, week, PERIOD_LIMIT),

        artists_year: top_artists(plays, year, PERIOD_LIMIT),
        artists_month: top_artists(plays, month, PERIOD_LIMIT),
        artists_week: top_artists(plays, week, PERIOD_LIMIT),

        last_updated: now,
    }
}

/// The `stats-tracks.json` payload: all-time tallies grouped per artist,
/// artists ranked by total plays. Tracks with at least `lifetime_min` plays
/// are flagged as having a lifetime graph.
pub fn tracks_summary(plays: &[PlayRecord], now: OffsetDateTime, lifetime_min: u64) -> TracksSummary {
    let mut tallies: BTreeMap<(&str, &str), TrackTally> = BTreeMap::new();
    for play in plays {
        let key = (play.artist.as_str(), play.track.as_str());
        let tally = tallies.entry(key).or_insert_with(|| blank_tally(play, None));
        tally.count += 1;
        absorb_metadata(tally, play);
    }

    let mut by_artist: BTreeMap<String, Vec<TrackTally>> = BTreeMap::new();
    for mut tally in tallies.into_values() {
        tally.lifetime = (tally.count >= lifetime_min).then_some(true);
        by_artist.entry(tally.artist.clone()).or_default().push(tally);
    }

    let mut artists: Vec<ArtistTracks> = by_artist
        .into_iter()
        .map(|(name, mut tracks)| {
            tracks.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.track.cmp(&b.track)));
            ArtistTracks { name, tracks }
        })
        .collect();
    artists.sort_by(|a, b| {
        b.total_plays()
            .cmp(&a.total_plays())
            .then_with(|| a.name.cmp(&b.name))
    });

    TracksSummary { last_updated: now, artists }
}

/// Monthly play counts for one track, for the on-demand lifetime graph.
pub fn lifetime_series(plays: &[PlayRecord], track: &str) -> Vec<MonthlyCount> {
    counts_by_month(plays.iter().filter(|p| p.track == track))
}

/// Write `stats.json`, `stats-recent.json`, `stats-tracks.json`, and one
/// `tracks/<slug>.json` series per lifetime-flagged track under `out_dir`.
///
/// # Errors
///
/// This function will return an error if any payload cannot be serialized or
/// written.
pub fn write_summaries(plays: &[PlayRecord], now: OffsetDateTime, out_dir: &Path, lifetime_min: u64) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    write_json(&out_dir.join("stats.json"), &overview(plays, now))?;
    write_json(&out_dir.join("stats-recent.json"), &RecentSummary {
        last_updated: now,
        recent_plays: recent_plays(plays, RECENT_LIMIT),
    })?;

    let tracks = tracks_summary(plays, now, lifetime_min);

    // same stale-page reasoning as document::write_documents
    let series_dir = out_dir.join("tracks");
    if series_dir.exists() {
        fs::remove_dir_all(&series_dir).with_context(|| format!("clearing {}", series_dir.display()))?;
    }
    fs::create_dir_all(&series_dir).with_context(|| format!("creating {}", series_dir.display()))?;

    let mut written = BTreeSet::new();
    for tally in tracks.artists.iter().flat_map(|a| a.tracks.iter()) {
        if tally.lifetime != Some(true) {
            continue;
        }
        let stem = slug(tally.track.as_str());
        if written.insert(stem.clone()) {
            write_json(&series_dir.join(format!("{stem}.json")), &lifetime_series(plays, tally.track.as_str()))?;
        }
    }

    write_json(&out_dir.join("stats-tracks.json"), &tracks)
}

fn blank_tally(play: &PlayRecord, album: Option<String>) -> TrackTally {
    TrackTally {
        track: play.track.clone(),
        artist: play.artist.clone(),
        album,
        count: 0,
        artwork: None,
        spotify: None,
        lifetime: None,
    }
}

/// Keep the longest cover on offer and one Spotify id. Ties settle
/// lexicographically so the pick does not depend on input order.
fn absorb_metadata(tally: &mut TrackTally, play: &PlayRecord) {
    if let Some(cover) = play.album_cover.as_deref().filter(|c| !c.is_empty()) {
        let better = tally
            .artwork
            .as_deref()
            .map_or(true, |a| (a.len(), a) < (cover.len(), cover));
        if better {
            tally.artwork = Some(cover.to_owned());
        }
    }
    if let Some(id) = play.spotify_id.as_deref().filter(|s| !s.is_empty()) {
        if tally.spotify.as_deref().map_or(true, |s| id < s) {
            tally.spotify = Some(id.to_owned());
        }
    }
}

fn rank(mut tallies: Vec<TrackTally>, limit: usize) -> Vec<TrackTally> {
    tallies.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.artist.cmp(&b.artist))
            .then_with(|| a.track.cmp(&b.track))
    });
    tallies.truncate(limit);
    tallies
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)?).with_context(|| path.display().to_string())
}

#[cfg(test)]
mod tests;
