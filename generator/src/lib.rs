use std::{
    ffi::OsStr,
    fs::{
        self,
        File,
    },
    io::{
        BufRead,
        BufReader,
    },
    path::{
        Path,
        PathBuf,
    },
    sync::LazyLock,
};

use anyhow::{
    anyhow,
    bail,
    Context,
    Result,
};
use playlog_core::PlayRecord;
use regex::Regex;

pub mod document;
pub mod group;
pub mod summary;

/// Result of reading a backup file: the usable records plus how many lines
/// were rejected.
#[derive(Debug)]
pub struct LoadOutcome {
    pub plays: Vec<PlayRecord>,
    pub skipped: usize,
}

static BACKUP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:plays|enriched)-backup-.+$").unwrap());
static DATED_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:plays|enriched)-backup-(\d{4}-\d{2}-\d{2}-\d{4})$").unwrap());

/// Resolve a backup argument to a concrete file.
///
/// A file is accepted when its name matches the uploader's backup naming. A
/// directory is searched for the `-latest` backup first, then the newest
/// dated one.
///
/// # Errors
///
/// This function will return an error if the directory cannot be read, holds
/// no recognized backup, or the file name is not a recognized pattern.
pub fn resolve_backup(path: &Path) -> Result<PathBuf> {
    const ERR_MSG: &str = "Unrecognized backup file name";

    if path.is_dir() {
        let mut newest: Option<(String, PathBuf)> = None;
        for entry in fs::read_dir(path).with_context(|| path.display().to_string())? {
            let candidate = entry?.path();
            if candidate.extension().and_then(OsStr::to_str) != Some("json") {
                continue;
            }
            let Some(stem) = candidate.file_stem().and_then(OsStr::to_str) else { continue };
            if stem.ends_with("-latest") && BACKUP_REGEX.is_match(stem) {
                return Ok(candidate);
            }
            if let Some(captures) = DATED_REGEX.captures(stem) {
                let date = captures[1].to_owned();
                if newest.as_ref().map(|(d, _)| *d < date).unwrap_or(true) {
                    newest = Some((date, candidate));
                }
            }
        }
        return newest.map(|(_, p)| p).ok_or_else(|| anyhow!("No backup files in {}", path.display()));
    }

    let stem = path.file_stem().and_then(OsStr::to_str).ok_or_else(|| anyhow!(ERR_MSG))?;
    if BACKUP_REGEX.is_match(stem) {
        Ok(path.to_path_buf())
    } else {
        Err(anyhow!(ERR_MSG))
    }
}

/// Read one `PlayRecord` per line of a newline-delimited JSON backup.
///
/// Lines that fail to parse or validate are skipped and counted, never
/// silently grouped; grouping only ever sees the records returned here.
///
/// # Errors
///
/// This function will return an error if the file cannot be opened or read.
pub fn load_plays(path: &Path) -> Result<LoadOutcome> {
    let file = File::open(path).map(BufReader::new).with_context(|| path.display().to_string())?;

    let mut plays = Vec::new();
    let mut skipped = 0usize;
    for (idx, line) in file.lines().enumerate() {
        let line = line.with_context(|| format!("{}: read failed at line {}", path.display(), idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line.as_str()) {
            Ok(play) => plays.push(play),
            Err(e) => {
                eprintln!("line {}: {e:#}", idx + 1);
                skipped += 1;
            },
        }
    }

    Ok(LoadOutcome { plays, skipped })
}

fn parse_line(line: &str) -> Result<PlayRecord> {
    let play: PlayRecord = serde_json::from_str(line)?;
    if play.artist.is_empty() {
        bail!("empty artist name");
    }
    Ok(play)
}
