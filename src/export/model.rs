use crate::models::sample::SampleRecord;
use crate::models::sample_type::SampleType;
use crate::utils::time::normalize_timestamp;
use serde::{Deserialize, Serialize};

/// Flat CSV row of `pas_tracking`, columns in table order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SampleExport {
    pub sample_start: Option<String>,
    pub sample_end: Option<String>,
    pub sampleid: String,
    pub kitid: String,
    pub samplerid: String,
    pub siteid: Option<String>,
    pub shipped_location: Option<String>,
    pub shipped_date: Option<String>,
    pub return_date: Option<String>,
    pub sample_type: Option<String>,
    pub note: Option<String>,
    pub screen_sampling_rate: Option<f64>,
}

impl From<&SampleRecord> for SampleExport {
    /// Timestamps go out as `YYYY-MM-DD HH:MM:SS`; other values as stored.
    fn from(r: &SampleRecord) -> Self {
        let stamp = |v: &Option<String>| {
            v.as_deref()
                .map(|s| normalize_timestamp(s).unwrap_or_else(|| s.to_string()))
        };
        Self {
            sample_start: stamp(&r.sample_start),
            sample_end: stamp(&r.sample_end),
            sampleid: r.sampleid.clone(),
            kitid: r.kitid.clone(),
            samplerid: r.samplerid.clone(),
            siteid: r.siteid.clone(),
            shipped_location: r.shipped_location.clone(),
            shipped_date: r.shipped_date.clone(),
            return_date: r.return_date.clone(),
            sample_type: r.sample_type.map(|t| t.as_str().to_string()),
            note: r.note.clone(),
            screen_sampling_rate: r.screen_sampling_rate,
        }
    }
}

impl SampleExport {
    /// Back to a record, as if freshly loaded from the table.
    pub fn into_record(self) -> SampleRecord {
        SampleRecord {
            original_sampleid: Some(self.sampleid.clone()),
            sample_start: self.sample_start,
            sample_end: self.sample_end,
            sampleid: self.sampleid,
            kitid: self.kitid,
            samplerid: self.samplerid,
            siteid: self.siteid,
            shipped_location: self.shipped_location,
            shipped_date: self.shipped_date,
            return_date: self.return_date,
            sample_type: self.sample_type.as_deref().and_then(SampleType::from_db_str),
            note: self.note,
            screen_sampling_rate: self.screen_sampling_rate,
        }
    }
}
