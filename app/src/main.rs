use std::{
    fs::{
        self,
        File,
    },
    io::BufReader,
    path::Path,
};

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use playlog_core::{
    Overview,
    RecentSummary,
    TracksSummary,
};
use playlog_generator::{
    document,
    group,
    load_plays,
    resolve_backup,
    summary,
};
use playlog_render::{
    plays_by_month,
    render_artists,
    render_artists_with_tracks,
    render_plays,
    Fragment,
};
use time::OffsetDateTime;

mod args;
use args::{
    Args,
    Command,
};

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Generate { backup, out } => generate(&backup, &out),
        Command::Summarize { backup, out, lifetime_min } => summarize(&backup, &out, lifetime_min),
        Command::Dashboard {
            stats,
            out,
            track_count,
            artist_count,
        } => dashboard(&stats, &out, track_count, artist_count),
    }
}

fn generate(backup: &Path, out: &Path) -> Result<()> {
    let backup = resolve_backup(backup)?;
    println!("loading {}", backup.display());
    let outcome = load_plays(&backup)?;

    let groups = group::group_by_artist(outcome.plays);
    let total = document::write_documents(&groups, out)?;

    match outcome.skipped {
        0 => println!("generated {total} artist pages"),
        n => println!("generated {total} artist pages ({n} lines skipped)"),
    }
    Ok(())
}

fn summarize(backup: &Path, out: &Path, lifetime_min: u64) -> Result<()> {
    let backup = resolve_backup(backup)?;
    println!("loading {}", backup.display());
    let outcome = load_plays(&backup)?;

    summary::write_summaries(&outcome.plays, OffsetDateTime::now_utc(), out, lifetime_min)?;

    if outcome.skipped > 0 {
        println!("{} lines skipped", outcome.skipped);
    }
    println!("summaries written to {}", out.display());
    Ok(())
}

fn dashboard(stats: &Path, out: &Path, track_count: usize, artist_count: usize) -> Result<()> {
    let overview: Overview = read_json(&stats.join("stats.json"))?;
    let recent: RecentSummary = read_json(&stats.join("stats-recent.json"))?;
    let tracks: TracksSummary = read_json(&stats.join("stats-tracks.json"))?;
    let now = OffsetDateTime::now_utc();

    fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;

    let mut fragment = Fragment::new("recent-plays");
    render_plays(&mut fragment, &recent.recent_plays, now, true);
    write_fragment(out, &fragment)?;

    for (id, tallies) in [
        ("plays-week", &overview.plays_week),
        ("plays-month", &overview.plays_month),
        ("plays-year", &overview.plays_year),
    ] {
        let mut fragment = Fragment::new(id);
        render_plays(&mut fragment, tallies, now, true);
        write_fragment(out, &fragment)?;
    }

    for (id, tallies) in [
        ("artists-week", &overview.artists_week),
        ("artists-month", &overview.artists_month),
        ("artists-year", &overview.artists_year),
    ] {
        let mut fragment = Fragment::new(id);
        render_artists(&mut fragment, tallies, artist_count);
        write_fragment(out, &fragment)?;
    }

    let mut fragment = Fragment::new("artists");
    render_artists_with_tracks(&mut fragment, &tracks.artists, track_count, now);
    write_fragment(out, &fragment)?;

    let chart = plays_by_month(&overview.plays_by_month);
    let path = out.join("plays-by-month.json");
    fs::write(&path, serde_json::to_string_pretty(&chart)?).with_context(|| path.display().to_string())?;

    println!("dashboard fragments written to {}", out.display());
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let rdr = File::open(path).map(BufReader::new).with_context(|| path.display().to_string())?;
    serde_json::from_reader(rdr).with_context(|| path.display().to_string())
}

fn write_fragment(dir: &Path, fragment: &Fragment) -> Result<()> {
    let path = dir.join(format!("{}.html", fragment.id()));
    fs::write(&path, fragment.html()).with_context(|| path.display().to_string())
}
