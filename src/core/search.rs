//! "Update" modal: load persisted rows into the session for editing.

use crate::core::reply::{Modal, Reply};
use crate::core::session::Session;
use crate::core::validate::{is_kit_id, is_sampler_id};
use crate::db::queries::{Filter, latest_kit_for_sampler, load_samples_by};
use crate::errors::AppResult;
use crate::models::sample::SampleRecord;
use crate::models::site::SiteCatalog;
use crate::ui::feedback::Feedback;
use crate::utils::time::{to_grid_date, to_grid_timestamp};
use rusqlite::Connection;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Kit,
    Sampler,
    Location,
}

/// Result of a lookup: matching rows as stored, or the reason there are none.
#[derive(Debug)]
pub enum Outcome {
    Found(Vec<SampleRecord>),
    Rejected(Feedback),
}

pub struct SearchLogic;

impl SearchLogic {
    pub fn find(conn: &Connection, mode: SearchMode, value: &str) -> AppResult<Outcome> {
        let value = value.trim();
        let rejected = |f: Feedback| -> AppResult<Outcome> { Ok(Outcome::Rejected(f)) };

        let rows = match mode {
            SearchMode::Kit => {
                if !is_kit_id(value) {
                    return rejected(Feedback::error("Invalid Kit ID"));
                }
                load_samples_by(conn, Filter::KitId, value)?
            }
            SearchMode::Location => {
                if value.is_empty() {
                    return rejected(Feedback::error("Shipped Location cannot be empty."));
                }
                let rows = load_samples_by(conn, Filter::ShippedLocation, value)?;
                if rows.is_empty() {
                    return rejected(Feedback::warning(format!(
                        "No entries found for shipped location '{value}'."
                    )));
                }
                rows
            }
            SearchMode::Sampler => {
                if !is_sampler_id(value) {
                    return rejected(Feedback::error("Invalid Sampler ID"));
                }
                match latest_kit_for_sampler(conn, value)? {
                    Some(kit) => load_samples_by(conn, Filter::KitId, &kit)?,
                    None => {
                        return rejected(Feedback::warning("No entries found for this Sampler ID."));
                    }
                }
            }
        };

        if rows.is_empty() {
            return rejected(Feedback::warning("No entries found for this Kit ID."));
        }
        Ok(Outcome::Found(rows))
    }

    /// Replace the buffer with the matching rows in grid form. When nothing
    /// matches the search modal stays open and the buffer is left alone.
    pub fn apply(
        session: &mut Session,
        conn: &Connection,
        sites: &SiteCatalog,
        mode: SearchMode,
        value: &str,
    ) -> AppResult<Reply> {
        match Self::find(conn, mode, value)? {
            Outcome::Rejected(feedback) => Ok(Reply::of(session)
                .with_feedback(feedback)
                .with_modal(Modal::Search)),
            Outcome::Found(rows) => {
                let n = rows.len();
                session.replace(rows.into_iter().map(|r| for_grid(r, sites)).collect());
                log::info!("Loaded {} row(s) by {:?} '{}'", n, mode, value.trim());
                Ok(Reply::of(session))
            }
        }
    }
}

/// Stored row → grid row: minute timestamps, plain dates, site labels.
pub fn for_grid(mut r: SampleRecord, sites: &SiteCatalog) -> SampleRecord {
    r.sample_start = r.sample_start.as_deref().map(to_grid_timestamp);
    r.sample_end = r.sample_end.as_deref().map(to_grid_timestamp);
    r.shipped_date = r.shipped_date.as_deref().map(to_grid_date);
    r.return_date = r.return_date.as_deref().map(to_grid_date);
    r.siteid = r.siteid.as_deref().map(|s| sites.label_for(s));
    r
}
