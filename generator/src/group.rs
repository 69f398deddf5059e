use std::collections::BTreeMap;

use playlog_core::{
    slug,
    PlayRecord,
};

/// All plays for one artist, keyed by exact name match.
#[cfg_attr(test, derive(PartialEq, Eq))]
#[derive(Debug)]
pub struct ArtistGroup {
    pub name: String,
    pub plays: Vec<PlayRecord>,
}

impl ArtistGroup {
    /// Identifier used as the document filename stem and URL path segment.
    pub fn slug(&self) -> String { slug(self.name.as_str()) }
}

/// Partition plays by artist.
///
/// Groups come out ascending by name and each group ascending by timestamp,
/// so the result is independent of input order; equal timestamps keep input
/// order (stable sort).
pub fn group_by_artist(plays: Vec<PlayRecord>) -> Vec<ArtistGroup> {
    let mut groups: BTreeMap<String, Vec<PlayRecord>> = BTreeMap::new();
    for play in plays {
        groups.entry(play.artist.clone()).or_default().push(play);
    }

    groups
        .into_iter()
        .map(|(name, mut plays)| {
            plays.sort_by_key(|p| p.timestamp);
            ArtistGroup { name, plays }
        })
        .collect()
}
