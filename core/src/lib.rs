use time::OffsetDateTime;

pub mod model;
pub mod slug;
pub mod timestamp;

pub use model::*;
pub use slug::slug;

/// Accessors for anything renderable as a play row.
///
/// Required accessors identify the play; the optional ones toggle optional
/// table columns when absent.
pub trait PlayData {
    fn artist_name(&self) -> &str;
    fn track_name(&self) -> &str;

    fn timestamp(&self) -> Option<OffsetDateTime> { None }

    fn count(&self) -> Option<u64> { None }

    /// Artwork URL with the empty-string "no artwork" sentinel resolved to
    /// `None`.
    fn artwork(&self) -> Option<&str> { None }

    fn spotify_id(&self) -> Option<&str> { None }

    fn lifetime(&self) -> bool { false }
}
