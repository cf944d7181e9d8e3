//! Single-cell edits from the grid.

use crate::core::reply::Reply;
use crate::core::session::Session;
use crate::core::validate::{DATE_TIME_PLACEHOLDER, is_date, is_kit_id, is_sampler_id, is_timestamp};
use crate::errors::{AppError, AppResult};
use crate::models::column::Column;
use crate::models::sample_type::SampleType;
use crate::ui::feedback::Feedback;

pub struct EditLogic;

impl EditLogic {
    /// Apply `value` to the cell at (`row`, `field`), `row` being 0-based.
    ///
    /// A value that fails its format check leaves the row untouched and comes
    /// back as an error message. The Kit ID cannot be cleared. Unknown rows or
    /// columns are request errors. Any accepted change drops a batch held for
    /// overwrite confirmation, since it no longer matches the buffer.
    pub fn apply(
        session: &mut Session,
        row: usize,
        field: &str,
        value: Option<String>,
    ) -> AppResult<Reply> {
        let column = Column::from_field(field)?;
        if !column.is_editable() {
            return Err(AppError::UnknownColumn(format!("{field} is not editable")));
        }

        let record = session.row_mut(row)?;
        let old = record.get(column).unwrap_or_default();
        let new = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .filter(|v| !(column.is_timestamp() && v == DATE_TIME_PLACEHOLDER));

        let col = column.header();
        let n = row + 1;

        let feedback = match new {
            None if column == Column::KitId => {
                let reason = format!("Invalid Kit ID format at Row {n}. Expected EC-####.");
                return Ok(Reply::of(session).with_feedback(Feedback::error(reason)));
            }
            None => {
                record.set(column, None)?;
                Feedback::success(format!("{col} at Row {n}, value cleared."))
            }
            Some(new) => {
                if let Some(reason) = rejection(column, &new, n) {
                    return Ok(Reply::of(session).with_feedback(Feedback::error(reason)));
                }
                record.set(column, Some(new.clone()))?;
                Feedback::success(format!("{col} at Row {n}, changed from '{old}' to '{new}'."))
            }
        };

        let feedback = if matches!(column, Column::KitId | Column::SamplerId) {
            let id = &session.row_mut(row)?.sampleid;
            Feedback::success(format!("{} Sample ID updated to '{id}'.", feedback.text))
        } else {
            feedback
        };

        session.pending = None;
        Ok(Reply::of(session).with_feedback(feedback))
    }
}

/// Message explaining why `value` is not acceptable in `column`, if it is not.
fn rejection(column: Column, value: &str, n: usize) -> Option<String> {
    let col = column.header();
    let ok = match column {
        Column::SampleStart | Column::SampleEnd => is_timestamp(value),
        Column::ShippedDate | Column::ReturnDate => is_date(value),
        Column::KitId => is_kit_id(value),
        Column::SamplerId => is_sampler_id(value),
        Column::SampleType => SampleType::parse(value).is_some(),
        _ => true,
    };
    if ok {
        return None;
    }

    let msg = match column {
        Column::SampleStart | Column::SampleEnd => format!(
            "Invalid datetime format for {col} at Row {n}. Expected format: YYYY-MM-DD HH:MM."
        ),
        Column::ShippedDate | Column::ReturnDate => {
            format!("Invalid date format for {col} at Row {n}. Expected format: YYYY-MM-DD.")
        }
        Column::KitId => format!("Invalid Kit ID format at Row {n}. Expected EC-####."),
        Column::SamplerId => format!("Invalid Sampler ID format at Row {n}. Expected ECCC####."),
        _ => format!("Invalid {col} at Row {n}. Expected Sample or Blank."),
    };
    Some(msg)
}
