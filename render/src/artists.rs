use playlog_core::{
    slug,
    ArtistTally,
    ArtistTracks,
};
use time::OffsetDateTime;

use crate::{
    escape,
    plays::render_plays,
    Fragment,
};

/// One `artists-list` table: a header row per artist (name plus a detail
/// link) followed by that artist's top `track_count` tracks.
///
/// `track_count` is an inclusive upper bound on the tracks listed per
/// artist.
pub fn render_artists_with_tracks(target: &mut Fragment, artists: &[ArtistTracks], track_count: usize, now: OffsetDateTime) {
    target.push("<table id=\"artists-list\" class=\"f6-ns f7 w-100\">");
    for artist in artists {
        target.push(&format!(
            "<tr><td colspan=\"3\"><h3 class=\"f5-ns f6\">{}<a class=\"pl2 no-underline orange display\" href=\"/artists/{}\">view &rarr;</a></h3></td></tr>",
            escape(artist.name.as_str()),
            slug(artist.name.as_str()),
        ));

        let top = &artist.tracks[..artist.tracks.len().min(track_count)];
        render_plays(target, top, now, false);
    }
    target.push("</table>");
}

/// Comma-joined detail links for at most `count` ranked artists, in input
/// order.
pub fn render_artists(target: &mut Fragment, artists: &[ArtistTally], count: usize) {
    let links: Vec<String> = artists
        .iter()
        .take(count)
        .map(|a| {
            format!(
                "<a class=\"no-underline black\" href=\"/artists/{}\">{}</a>",
                slug(a.artist.as_str()),
                escape(a.artist.as_str())
            )
        })
        .collect();
    target.push(links.join(", ").as_str());
}
