use std::{
    fs,
    path::Path,
};

use anyhow::{
    Context,
    Result,
};
use playlog_core::PlayRecord;
use serde::Serialize;

use crate::group::ArtistGroup;

#[derive(Serialize)]
struct ArtistDocument<'a> {
    title: &'a str,
    plays: &'a [PlayRecord],
}

/// Front-matter block for one artist page, plus the body separator the site
/// builder expects.
pub fn front_matter(group: &ArtistGroup) -> serde_json::Result<String> {
    let doc = ArtistDocument {
        title: group.name.as_str(),
        plays: group.plays.as_slice(),
    };
    Ok(format!("{}\n---\n", serde_json::to_string_pretty(&doc)?))
}

/// Write one `<slug>.md` document per group under `out_dir`.
///
/// The directory is cleared and recreated first so renamed or removed
/// artists leave no stale pages behind.
///
/// # Errors
///
/// This function will return an error if the directory cannot be replaced or
/// any document cannot be written.
pub fn write_documents(groups: &[ArtistGroup], out_dir: &Path) -> Result<usize> {
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).with_context(|| format!("clearing {}", out_dir.display()))?;
    }
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let total = groups.len();
    for (count, group) in groups.iter().enumerate() {
        let path = out_dir.join(format!("{}.md", group.slug()));
        fs::write(&path, front_matter(group)?).with_context(|| path.display().to_string())?;

        if (count + 1) % 500 == 0 {
            print!("{}%\r", (count + 1) * 100 / total);
        }
    }

    Ok(total)
}
