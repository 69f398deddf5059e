use playlog_core::{
    slug,
    PlayData,
};
use time::OffsetDateTime;

use crate::{
    escape,
    timeago,
    Fragment,
    PLACEHOLDER_IMAGE,
};

/// Append one `<tr>` per run of consecutive plays of the same (artist,
/// track) pair.
///
/// A run collapses to the row for its first play, annotated `(Nx)` in the
/// time cell when the run holds more than one play, including a run ending
/// at the end of the input. Count, time, and lifetime cells render only when
/// the underlying field is present; `now` anchors the relative time labels.
pub fn render_plays<P: PlayData>(target: &mut Fragment, plays: &[P], now: OffsetDateTime, show_artist: bool) {
    let mut i = 0;
    while i < plays.len() {
        let play = &plays[i];
        let mut run = 1;
        while i + run < plays.len() && same_play(play, &plays[i + run]) {
            run += 1;
        }
        render_row(target, play, run, now, show_artist);
        i += run;
    }
}

fn same_play<P: PlayData>(a: &P, b: &P) -> bool {
    a.artist_name() == b.artist_name() && a.track_name() == b.track_name()
}

fn render_row<P: PlayData>(target: &mut Fragment, play: &P, run: usize, now: OffsetDateTime, show_artist: bool) {
    target.push("<tr>");

    match play.artwork() {
        Some(url) => target.push(&format!(
            "<td><img class=\"ba lazy\" style=\"min-width: 25px; width: 25px;\" data-src=\"{}\"></td>",
            escape(url)
        )),
        None => target.push(&format!(
            "<td><img class=\"lazy o-0\" style=\"min-width: 25px; width: 25px;\" data-src=\"{PLACEHOLDER_IMAGE}\"></td>"
        )),
    }

    let mut track_cell = format!("<strong>{}</strong>", escape(play.track_name()));
    if show_artist {
        track_cell.push_str(&format!(
            " <span class=\"mid-gray\">by</span> <a class=\"no-underline black\" href=\"/artists/{}\">{}</a>",
            slug(play.artist_name()),
            escape(play.artist_name())
        ));
    }
    target.push(&format!("<td>{track_cell}</td>"));

    if let Some(count) = play.count() {
        target.push(&format!("<td class=\"light-silver tr\"><strong>{count}</strong> plays</td>"));
    }

    if let Some(ts) = play.timestamp() {
        let mut time_cell = timeago::relative(ts, now);
        if run > 1 {
            time_cell.push_str(&format!(" <span class=\"o-80 red\">({run}x)</span>"));
        }
        target.push(&format!("<td class=\"light-silver\">{time_cell}</td>"));
    }

    if play.lifetime() {
        target.push(&format!(
            "<td><button class=\"input-reset ba b--silver pv1 mr2\" data-track=\"{}\">\u{1F4C8}</button></td>",
            escape(play.track_name())
        ));
    }

    target.push("</tr>");
}
