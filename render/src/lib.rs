//! HTML fragments and chart configurations for the dashboard pages.
//!
//! Every function here appends into a caller-identified [`Fragment`] or
//! returns a value; nothing is kept between invocations, so rendering the
//! same input into a cleared target is byte-identical every time.

pub mod artists;
pub mod chart;
pub mod plays;
pub mod timeago;

pub use artists::{
    render_artists,
    render_artists_with_tracks,
};
pub use chart::{
    lifetime_chart,
    mount_lifetime_chart,
    plays_by_month,
    ChartConfig,
};
pub use plays::render_plays;

/// Shown when a play carries no artwork (the empty-string sentinel included).
pub const PLACEHOLDER_IMAGE: &str = "https://upload.wikimedia.org/wikipedia/commons/1/1a/1x1_placeholder.png";

/// A caller-identified rendering target: an element id plus the HTML built
/// up for it. Render functions only append; clearing is the caller's call.
#[derive(Debug)]
pub struct Fragment {
    id: String,
    html: String,
}

impl Fragment {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            html: String::new(),
        }
    }

    pub fn id(&self) -> &str { self.id.as_str() }

    pub fn html(&self) -> &str { self.html.as_str() }

    pub fn is_empty(&self) -> bool { self.html.is_empty() }

    pub fn clear(&mut self) { self.html.clear(); }

    pub(crate) fn push(&mut self, html: &str) { self.html.push_str(html); }
}

/// Escape text for element bodies and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests;
