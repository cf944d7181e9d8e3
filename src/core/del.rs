use crate::core::reply::Reply;
use crate::core::session::Session;
use crate::db::log::audit;
use crate::db::pool::{Databases, Role, Schema};
use crate::db::queries::delete_sample;
use crate::errors::{AppError, AppResult};
use crate::ui::feedback::Feedback;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the row at `row` (0-based) from the buffer and, when it was
    /// loaded from the table, the persisted row it came from.
    pub fn apply(session: &mut Session, dbs: &Databases, row: usize) -> AppResult<Reply> {
        let record = session
            .rows()
            .get(row)
            .ok_or(AppError::InvalidRow(row + 1))?;
        let n = row + 1;

        let feedback = match record.original_sampleid.clone() {
            None => Feedback::success(format!("Row {n} deleted.")),
            Some(id) => {
                let mut pool = dbs.open(Schema::Project, Role::Editor)?;
                let user = pool.user.clone();
                let tx = pool.conn.transaction()?;
                let deleted = delete_sample(&tx, &id)?;
                if deleted > 0 {
                    audit(&tx, &user, "delete", &id, "Deleted sample")?;
                }
                tx.commit()?;

                if deleted == 0 {
                    log::warn!("Sample {} was already gone from the database", id);
                    Feedback::warning(format!(
                        "Row {n} deleted. '{id}' was not found in the database."
                    ))
                } else {
                    log::info!("Deleted sample {}", id);
                    Feedback::success(format!("Row {n} deleted. '{id}' removed from the database."))
                }
            }
        };

        session.remove(row)?;
        Ok(Reply::of(session).with_feedback(feedback))
    }
}
