use time::OffsetDateTime;

/// How long ago `then` happened, relative to `now`, in the dashboard's
/// timeago phrasing. Future instants clamp to "just now".
pub fn relative(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let seconds = (now - then).whole_seconds().max(0);
    if seconds < 45 {
        return "just now".to_owned();
    }
    if seconds < 90 {
        return "a minute ago".to_owned();
    }

    let minutes = (seconds + 30) / 60;
    if minutes < 45 {
        return format!("{minutes} minutes ago");
    }
    if minutes < 90 {
        return "an hour ago".to_owned();
    }

    let hours = (minutes + 30) / 60;
    if hours < 22 {
        return format!("{hours} hours ago");
    }
    if hours < 36 {
        return "a day ago".to_owned();
    }

    let days = (hours + 12) / 24;
    if days < 26 {
        return format!("{days} days ago");
    }
    if days < 46 {
        return "a month ago".to_owned();
    }
    if days < 320 {
        return format!("{} months ago", (days + 15) / 30);
    }
    if days < 548 {
        return "a year ago".to_owned();
    }
    format!("{} years ago", (days + 182) / 365)
}
