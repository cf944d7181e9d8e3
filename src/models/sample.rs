use super::{column::Column, sample_type::SampleType};
use crate::core::reconcile::sample_id;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One sampler deployment, as held in a session buffer.
///
/// Timestamps are kept in grid form (`YYYY-MM-DD HH:MM`) while editing and
/// normalised to `YYYY-MM-DD HH:MM:SS` only when written to the database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub sample_start: Option<String>, // ⇔ pas_tracking.sample_start
    pub sample_end: Option<String>,   // ⇔ pas_tracking.sample_end
    pub sampleid: String,             // ⇔ pas_tracking.sampleid (UNIQUE)
    pub kitid: String,
    pub samplerid: String,
    pub siteid: Option<String>, // site label in the grid, bare id in the table
    pub shipped_location: Option<String>,
    pub shipped_date: Option<String>,
    pub return_date: Option<String>,
    pub sample_type: Option<SampleType>,
    pub note: Option<String>,
    pub screen_sampling_rate: Option<f64>,

    /// Identifier of the persisted row this record was loaded from.
    /// Not a table column.
    #[serde(default)]
    pub original_sampleid: Option<String>,
}

impl SampleRecord {
    /// Fresh, not yet persisted record for one sampler of a kit.
    pub fn new(kitid: &str, samplerid: &str, sample_type: Option<SampleType>) -> Self {
        let kitid = kitid.trim().to_string();
        let samplerid = samplerid.trim().to_string();
        Self {
            sampleid: sample_id(&kitid, &samplerid),
            kitid,
            samplerid,
            sample_type,
            ..Self::default()
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.original_sampleid.is_some()
    }

    /// Recompute `sampleid` from kit and sampler IDs. Returns true if it changed.
    pub fn refresh_sampleid(&mut self) -> bool {
        let derived = sample_id(&self.kitid, &self.samplerid);
        if derived == self.sampleid {
            return false;
        }
        self.sampleid = derived;
        true
    }

    /// Text value of a column, `None` when the cell is empty.
    pub fn get(&self, column: Column) -> Option<String> {
        let owned = |s: &str| if s.is_empty() { None } else { Some(s.to_string()) };
        match column {
            Column::SampleStart => self.sample_start.clone(),
            Column::SampleEnd => self.sample_end.clone(),
            Column::SampleId => owned(&self.sampleid),
            Column::KitId => owned(&self.kitid),
            Column::SamplerId => owned(&self.samplerid),
            Column::SiteId => self.siteid.clone(),
            Column::ShippedLocation => self.shipped_location.clone(),
            Column::ShippedDate => self.shipped_date.clone(),
            Column::ReturnDate => self.return_date.clone(),
            Column::SampleType => self.sample_type.map(|t| t.as_str().to_string()),
            Column::Note => self.note.clone(),
        }
    }

    /// Store a cell value without format checks (see `core::edit` for those).
    ///
    /// Writing the kit or sampler ID recomputes the sample identifier.
    pub fn set(&mut self, column: Column, value: Option<String>) -> AppResult<()> {
        let value = value.filter(|v| !v.trim().is_empty());
        match column {
            Column::SampleStart => self.sample_start = value,
            Column::SampleEnd => self.sample_end = value,
            Column::SampleId => return Err(AppError::UnknownColumn("sampleid is derived".into())),
            Column::KitId => {
                self.kitid = value.map(|v| v.trim().to_string()).unwrap_or_default();
                self.refresh_sampleid();
            }
            Column::SamplerId => {
                self.samplerid = value.map(|v| v.trim().to_string()).unwrap_or_default();
                self.refresh_sampleid();
            }
            Column::SiteId => self.siteid = value,
            Column::ShippedLocation => self.shipped_location = value,
            Column::ShippedDate => self.shipped_date = value,
            Column::ReturnDate => self.return_date = value,
            Column::SampleType => {
                self.sample_type = match value {
                    None => None,
                    Some(v) => Some(
                        SampleType::parse(&v).ok_or_else(|| AppError::InvalidSampleType(v))?,
                    ),
                }
            }
            Column::Note => self.note = value,
        }
        Ok(())
    }
}
