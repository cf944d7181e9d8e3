//! Time utilities: timestamp normalisation between grid, table and export forms.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

/// Storage form of every date/time column.
pub const STORED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Grid form of `sample_start` / `sample_end`.
pub const GRID_FORMAT: &str = "%Y-%m-%d %H:%M";

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse any accepted input into a naive UTC date-time.
///
/// Offset-aware values are converted to UTC before the offset is dropped;
/// naive values are taken as they are; a bare date means midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(to_utc_naive(dt));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(to_utc_naive(dt));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn to_utc_naive(dt: DateTime<FixedOffset>) -> NaiveDateTime {
    dt.with_timezone(&Utc).naive_utc()
}

/// Normalise for storage: `YYYY-MM-DD HH:MM:SS`, no fraction, no offset.
/// Unparseable input becomes `None`.
pub fn normalize_timestamp(s: &str) -> Option<String> {
    parse_timestamp(s).map(|dt| dt.format(STORED_FORMAT).to_string())
}

/// Stored value → grid value (`YYYY-MM-DD HH:MM`). Unparseable values are kept.
pub fn to_grid_timestamp(s: &str) -> String {
    parse_timestamp(s)
        .map(|dt| dt.format(GRID_FORMAT).to_string())
        .unwrap_or_else(|| s.to_string())
}

/// Stored value → date picker value (`YYYY-MM-DD`). Unparseable values are kept.
pub fn to_grid_date(s: &str) -> String {
    parse_timestamp(s)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| s.to_string())
}

/// Stamp used in export file names, to the second.
pub fn file_stamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d_%H-%M-%S").to_string()
}
