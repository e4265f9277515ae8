//! Display helpers for API date strings.

/// The calendar date of an ISO timestamp (`2020-01-01T00:00:00.000Z` becomes
/// `2020-01-01`). Other strings are returned trimmed.
pub fn date(raw: &str) -> &str {
    let raw = raw.trim();
    raw.split_once('T').map_or(raw, |(day, _)| day)
}

/// `from - to` for a finished entry, `from - Current` for an ongoing one.
pub fn date_range(from: &str, to: Option<&str>) -> String {
    match to.map(date).filter(|to| !to.is_empty()) {
        Some(to) => format!("{} - {}", date(from), to),
        None => format!("{} - Current", date(from)),
    }
}

/// Gravatar links come back protocol-relative (`//www.gravatar.com/...`).
pub fn avatar_url(raw: &str) -> String {
    if raw.starts_with("//") {
        format!("https:{raw}")
    } else {
        raw.to_string()
    }
}
