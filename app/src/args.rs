use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};

/// Turn a play-history backup into static site sources
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Write one front-matter document per artist for the site builder
    Generate {
        /// Backup file, or a directory searched for the newest backup
        #[arg(short, long, env = "PLAYLOG_BACKUP")]
        backup: PathBuf,

        /// Directory for the artist documents; cleared before writing
        #[arg(short, long, default_value = "content/artists")]
        out: PathBuf,
    },

    /// Compute the dashboard summary payloads
    Summarize {
        /// Backup file, or a directory searched for the newest backup
        #[arg(short, long, env = "PLAYLOG_BACKUP")]
        backup: PathBuf,

        /// Directory for stats.json, stats-recent.json, stats-tracks.json
        #[arg(short, long, default_value = "summary")]
        out: PathBuf,

        /// Minimum all-time play count for a track to get a lifetime graph
        #[arg(long, default_value_t = 25)]
        lifetime_min: u64,
    },

    /// Pre-render the dashboard HTML fragments from the summary payloads
    Dashboard {
        /// Directory holding the summarize output
        #[arg(short, long, default_value = "summary")]
        stats: PathBuf,

        /// Directory for the rendered fragments
        #[arg(short, long, default_value = "fragments")]
        out: PathBuf,

        /// Tracks listed per artist
        #[arg(long, default_value_t = 5)]
        track_count: usize,

        /// Artists named in each top-artists line
        #[arg(long, default_value_t = 10)]
        artist_count: usize,
    },
}
