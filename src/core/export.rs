use crate::db::queries::load_samples;
use crate::errors::AppResult;
use crate::export::csv::{write_csv, write_csv_file};
use crate::export::fs_utils::ensure_writable;
use crate::export::{SampleExport, file_name, notify_export_success};
use chrono::Local;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Full-table CSV dump of `pas_tracking`.
pub struct ExportLogic;

impl ExportLogic {
    pub fn rows(conn: &Connection) -> AppResult<Vec<SampleExport>> {
        Ok(load_samples(conn)?.iter().map(SampleExport::from).collect())
    }

    /// File name and CSV body, for a download.
    pub fn to_bytes(conn: &Connection) -> AppResult<(String, Vec<u8>)> {
        let rows = Self::rows(conn)?;
        let mut body = Vec::new();
        write_csv(&mut body, &rows)?;
        Ok((file_name(Local::now()), body))
    }

    /// Write the dump to disk.
    ///
    /// `target` may be a directory (a timestamped file name is added) or a file
    /// path; without it the file lands in the working directory.
    pub fn to_path(conn: &Connection, target: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = match target {
            Some(t) if t.is_dir() => t.join(file_name(Local::now())),
            Some(t) => t.to_path_buf(),
            None => PathBuf::from(file_name(Local::now())),
        };
        ensure_writable(&path, force)?;

        let rows = Self::rows(conn)?;
        write_csv_file(&path, &rows)?;
        notify_export_success(rows.len(), &path);
        Ok(path)
    }
}
