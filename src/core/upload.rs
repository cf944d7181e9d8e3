use crate::core::reconcile::{UploadPlan, plan_upload};
use crate::core::reply::{Modal, Reply};
use crate::core::session::Session;
use crate::core::validate::is_kit_id;
use crate::db::pool::{Databases, Role, Schema};
use crate::db::queries::{BatchResult, existing_sampleids, write_batch};
use crate::errors::AppResult;
use crate::models::sample::SampleRecord;
use crate::models::site::SiteCatalog;
use crate::ui::feedback::Feedback;
use crate::utils::time::normalize_timestamp;

/// "Upload Data to Database" and the overwrite confirmation that may follow.
pub struct UploadLogic;

impl UploadLogic {
    /// Rows with a blank sampler are skipped. A malformed Kit ID on any other
    /// row stops the upload before anything is read or written.
    pub fn apply(session: &mut Session, dbs: &Databases, sites: &SiteCatalog) -> AppResult<Reply> {
        let bad_kits: Vec<String> = session
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.samplerid.trim().is_empty() && !is_kit_id(&r.kitid))
            .map(|(i, _)| (i + 1).to_string())
            .collect();
        if !bad_kits.is_empty() {
            return Ok(Reply::of(session).with_feedback(Feedback::error(format!(
                "Invalid Kit ID format at Row(s) {}. Expected EC-####.",
                bad_kits.join(", ")
            ))));
        }

        let rows: Vec<SampleRecord> = session
            .rows()
            .iter()
            .filter(|r| !r.samplerid.trim().is_empty())
            .map(|r| for_storage(r.clone(), sites))
            .collect();

        if rows.is_empty() {
            return Ok(Reply::of(session).with_feedback(Feedback::warning(
                "No valid data to upload. All entries are empty or have empty Sampler IDs.",
            )));
        }

        let existing = {
            let viewer = dbs.open(Schema::Project, Role::Viewer)?;
            existing_sampleids(&viewer.conn)?
        };
        let plan = plan_upload(&rows, &existing);

        if plan.is_blocked() {
            log::warn!(
                "Upload held back: {} duplicate sample ID(s)",
                plan.duplicates.len()
            );
            let duplicates = plan.duplicates.clone();
            session.pending = Some(plan);
            return Ok(Reply::of(session).with_modal(Modal::OverwriteConfirm { duplicates }));
        }

        let result = write(dbs, &plan, "upload")?;
        session.mark_persisted(&plan);
        log::info!(
            "Uploaded {} row(s): {} inserted, {} updated",
            plan.writes.len(),
            result.inserted,
            result.updated
        );

        Ok(Reply::of(session).with_feedback(Feedback::success(format!(
            "Successfully uploaded {} entries to 'pas_tracking' table!",
            plan.writes.len()
        ))))
    }

    /// "Yes, Overwrite": write the held batch, replacing persisted rows.
    pub fn confirm(session: &mut Session, dbs: &Databases) -> AppResult<Reply> {
        let Some(plan) = session.pending.clone() else {
            return Ok(Reply::of(session).with_feedback(Feedback::warning("Nothing to overwrite.")));
        };

        let result = write(dbs, &plan, "overwrite")?;
        session.mark_persisted(&plan);
        log::info!(
            "Overwrote {} row(s): {} inserted, {} updated",
            plan.writes.len(),
            result.inserted,
            result.updated
        );

        Ok(Reply::of(session).with_feedback(Feedback::success(format!(
            "Successfully overwrote {} entries.",
            plan.writes.len()
        ))))
    }

    /// "Cancel": drop the held batch; the buffer is untouched.
    pub fn cancel(session: &mut Session) -> Reply {
        session.pending = None;
        Reply::of(session)
    }
}

fn write(dbs: &Databases, plan: &UploadPlan, operation: &str) -> AppResult<BatchResult> {
    let mut pool = dbs.open(Schema::Project, Role::Editor)?;
    write_batch(&mut pool, &plan.writes, operation)
}

/// Grid row → table row: normalised date/time columns and bare site ids.
pub fn for_storage(mut r: SampleRecord, sites: &SiteCatalog) -> SampleRecord {
    let norm = |v: Option<String>| v.as_deref().and_then(normalize_timestamp);
    r.sample_start = norm(r.sample_start);
    r.sample_end = norm(r.sample_end);
    r.shipped_date = norm(r.shipped_date);
    r.return_date = norm(r.return_date);
    r.siteid = r.siteid.map(|s| sites.id_for(&s));
    r
}
