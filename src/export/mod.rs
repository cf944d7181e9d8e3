// src/export/mod.rs

pub mod csv;
pub(crate) mod fs_utils;
mod model;

pub use model::SampleExport;

use crate::ui::messages::success;
use crate::utils::time::file_stamp;
use chrono::{DateTime, Local};
use std::path::Path;

/// Column order of the CSV file, same as the table.
pub use crate::db::migrate::PAS_TRACKING_COLUMNS as HEADERS;

/// `pas_tracking_YYYY-MM-DD_HH-MM-SS.csv`
pub fn file_name(now: DateTime<Local>) -> String {
    format!("pas_tracking_{}.csv", file_stamp(now))
}

pub(crate) fn notify_export_success(rows: usize, path: &Path) {
    success(format!("Exported {rows} row(s) to {}", path.display()));
}
