//! Timestamp field (de)serialization.
//!
//! Backups exported from the warehouse carry `YYYY-MM-DD hh:mm:ss[.frac] UTC`
//! strings; everything this tool writes is RFC 3339. Both shapes must parse.

use serde::{
    de::Error,
    Deserialize,
    Deserializer,
    Serializer,
};
use time::{
    format_description::{
        well_known::Rfc3339,
        FormatItem,
    },
    macros::format_description,
    OffsetDateTime,
    PrimitiveDateTime,
};

const EXPORT_FMT: &[FormatItem] = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

pub fn serialize<S>(dt: &OffsetDateTime, ser: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    dt.format(&Rfc3339)
        .map_err(serde::ser::Error::custom)
        .and_then(|s| ser.serialize_str(s.as_str()))
}

pub fn deserialize<'de, D>(de: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let val = String::deserialize(de)?;
    parse(val.as_str()).map_err(Error::custom)
}

/// Parse RFC 3339, falling back to the warehouse-export shape. The export's
/// fractional seconds vary in width, so they are dropped rather than parsed.
pub fn parse(val: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(val, &Rfc3339).or_else(|e| {
        let bare = val.strip_suffix(" UTC").unwrap_or(val);
        let bare = bare.split_once('.').map_or(bare, |(head, _)| head);
        PrimitiveDateTime::parse(bare, &EXPORT_FMT)
            .map(PrimitiveDateTime::assume_utc)
            .map_err(|_| e)
    })
}
