use std::fs;

use serde_json::json;
use time::macros::datetime;

use super::*;

const NOW: OffsetDateTime = datetime!(2020-06-15 12:00:00 UTC);

fn play(artist: &str, track: &str, timestamp: &str) -> PlayRecord {
    serde_json::from_value(json!({ "artist": artist, "track": track, "timestamp": timestamp })).unwrap()
}

fn enriched(artist: &str, track: &str, timestamp: &str, cover: &str, spotify: &str) -> PlayRecord {
    serde_json::from_value(json!({
        "artist": artist,
        "track": track,
        "timestamp": timestamp,
        "album_cover": cover,
        "spotify_id": spotify
    }))
    .unwrap()
}

fn sample() -> Vec<PlayRecord> {
    vec![
        // two months apart, all within the last year
        play("Radiohead", "Nude", "2020-06-14T10:00:00Z"),
        play("Radiohead", "Nude", "2020-06-13T10:00:00Z"),
        play("Radiohead", "Reckoner", "2020-05-01T10:00:00Z"),
        play("Four Tet", "Angel Echoes", "2020-05-02T10:00:00Z"),
        play("Four Tet", "Angel Echoes", "2019-07-01T10:00:00Z"),
    ]
}

#[test]
fn counts_by_month_ascending_with_pretty_labels() {
    let months = counts_by_month(&sample());
    assert_eq!(months, [
        MonthlyCount { month: "2019-07".into(), pretty: "July 2019".into(), count: 1 },
        MonthlyCount { month: "2020-05".into(), pretty: "May 2020".into(), count: 2 },
        MonthlyCount { month: "2020-06".into(), pretty: "June 2020".into(), count: 2 },
    ]);
}

#[test]
fn top_tracks_window_and_ranking() {
    let plays = sample();

    let week = top_tracks(&plays, NOW - Duration::days(7), 10);
    assert_eq!(week.len(), 1);
    assert_eq!(week[0].track, "Nude");
    assert_eq!(week[0].count, 2);

    let year = top_tracks(&plays, NOW - Duration::days(365), 10);
    assert_eq!(year[0].count, 2);
    // ties rank ascending by artist
    assert_eq!(year[0].artist, "Four Tet");
    assert_eq!(year[1].artist, "Radiohead");
}

#[test]
fn top_tracks_enforces_limit() {
    let plays = sample();
    let year = top_tracks(&plays, NOW - Duration::days(365), 2);
    assert_eq!(year.len(), 2);
}

#[test]
fn top_tracks_keeps_longest_cover_and_a_spotify_id() {
    let plays = vec![
        enriched("A", "T", "2020-06-01T00:00:00Z", "https://img/small", "id1"),
        enriched("A", "T", "2020-06-02T00:00:00Z", "https://img/full-size-640", "id1"),
    ];
    let top = top_tracks(&plays, NOW - Duration::days(30), 10);
    assert_eq!(top[0].artwork.as_deref(), Some("https://img/full-size-640"));
    assert_eq!(top[0].spotify.as_deref(), Some("id1"));
}

#[test]
fn top_artists_ranks_by_count_then_name() {
    let artists = top_artists(&sample(), NOW - Duration::days(365), 10);
    assert_eq!(artists, [
        ArtistTally { artist: "Radiohead".into(), count: 3 },
        ArtistTally { artist: "Four Tet".into(), count: 1 },
    ]);
}

#[test]
fn recent_plays_newest_first_with_limit() {
    let recent = recent_plays(&sample(), 3);
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].track, "Nude");
    assert_eq!(recent[0].timestamp, datetime!(2020-06-14 10:00:00 UTC));
    assert_eq!(recent[2].track, "Angel Echoes");
}

#[test]
fn overview_is_permutation_independent() {
    let forward = overview(&sample(), NOW);

    let mut shuffled = sample();
    shuffled.reverse();
    shuffled.swap(0, 2);
    let reordered = overview(&shuffled, NOW);

    assert_eq!(forward, reordered);
    assert_eq!(forward.last_updated, NOW);
}

#[test]
fn tracks_summary_ranks_artists_by_total_plays() {
    let summary = tracks_summary(&sample(), NOW, 2);

    let names: Vec<&str> = summary.artists.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["Radiohead", "Four Tet"]);

    let radiohead = &summary.artists[0];
    assert_eq!(radiohead.total_plays(), 3);
    assert_eq!(radiohead.tracks[0].track, "Nude");
    assert_eq!(radiohead.tracks[0].lifetime, Some(true));
    assert_eq!(radiohead.tracks[1].lifetime, None, "below the threshold");
}

#[test]
fn lifetime_series_covers_one_track() {
    let series = lifetime_series(&sample(), "Angel Echoes");
    assert_eq!(series, [
        MonthlyCount { month: "2019-07".into(), pretty: "July 2019".into(), count: 1 },
        MonthlyCount { month: "2020-05".into(), pretty: "May 2020".into(), count: 1 },
    ]);
}

#[test]
fn write_summaries_places_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    write_summaries(&sample(), NOW, dir.path(), 2).unwrap();

    for name in ["stats.json", "stats-recent.json", "stats-tracks.json"] {
        assert!(dir.path().join(name).is_file(), "missing {name}");
    }

    // only "Nude" and "Angel Echoes" reach two plays
    let series: Vec<String> = fs::read_dir(dir.path().join("tracks"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(series.len(), 2);

    let stats = fs::read_to_string(dir.path().join("stats.json")).unwrap();
    assert!(stats.contains("\"PlaysByMonth\""));
    assert!(stats.contains("\"LastUpdated\": \"2020-06-15T12:00:00Z\""));
}
