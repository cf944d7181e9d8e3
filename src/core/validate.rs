//! Format checks for kit IDs, sampler IDs, grid timestamps and dates.
//!
//! All checks trim the input and then require a full match.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static KIT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^EC-\d{4}$").expect("kit id pattern"));
static SAMPLER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ECCC\d{4}$").expect("sampler id pattern"));
static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").expect("timestamp pattern"));
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern"));

/// Placeholder shown in empty timestamp cells.
pub const DATE_TIME_PLACEHOLDER: &str = "YYYY-MM-DD HH:MM";

/// Length of a complete sampler ID (`ECCC####`).
pub const SAMPLER_ID_LEN: usize = 8;

pub fn is_kit_id(s: &str) -> bool {
    KIT_ID_RE.is_match(s.trim())
}

pub fn is_sampler_id(s: &str) -> bool {
    SAMPLER_ID_RE.is_match(s.trim())
}

/// `YYYY-MM-DD HH:MM` with a real calendar date and clock time.
pub fn is_timestamp(s: &str) -> bool {
    let s = s.trim();
    TIMESTAMP_RE.is_match(s) && NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").is_ok()
}

pub fn is_date(s: &str) -> bool {
    let s = s.trim();
    DATE_RE.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

pub fn kit_id(s: &str) -> AppResult<&str> {
    if is_kit_id(s) {
        Ok(s.trim())
    } else {
        Err(AppError::InvalidKitId(s.to_string()))
    }
}

pub fn sampler_id(s: &str) -> AppResult<&str> {
    if is_sampler_id(s) {
        Ok(s.trim())
    } else {
        Err(AppError::InvalidSamplerId(s.to_string()))
    }
}

pub fn timestamp(s: &str) -> AppResult<&str> {
    if is_timestamp(s) {
        Ok(s.trim())
    } else {
        Err(AppError::InvalidTimestamp(s.to_string()))
    }
}

pub fn date(s: &str) -> AppResult<&str> {
    if is_date(s) {
        Ok(s.trim())
    } else {
        Err(AppError::InvalidDate(s.to_string()))
    }
}
