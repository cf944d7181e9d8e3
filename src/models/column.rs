use crate::errors::{AppError, AppResult};

/// Editable grid columns and their `pas_tracking` field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    SampleStart,
    SampleEnd,
    SampleId,
    KitId,
    SamplerId,
    SiteId,
    ShippedLocation,
    ShippedDate,
    ReturnDate,
    SampleType,
    Note,
}

impl Column {
    pub const ALL: [Column; 11] = [
        Column::SampleStart,
        Column::SampleEnd,
        Column::SampleId,
        Column::KitId,
        Column::SamplerId,
        Column::SiteId,
        Column::ShippedLocation,
        Column::ShippedDate,
        Column::ReturnDate,
        Column::SampleType,
        Column::Note,
    ];

    pub fn field(&self) -> &'static str {
        match self {
            Column::SampleStart => "sample_start",
            Column::SampleEnd => "sample_end",
            Column::SampleId => "sampleid",
            Column::KitId => "kitid",
            Column::SamplerId => "samplerid",
            Column::SiteId => "siteid",
            Column::ShippedLocation => "shipped_location",
            Column::ShippedDate => "shipped_date",
            Column::ReturnDate => "return_date",
            Column::SampleType => "sample_type",
            Column::Note => "note",
        }
    }

    /// Header shown to the user in feedback messages.
    pub fn header(&self) -> &'static str {
        match self {
            Column::SampleStart => "Sample Start",
            Column::SampleEnd => "Sample End",
            Column::SampleId => "Sample ID",
            Column::KitId => "Kit ID",
            Column::SamplerId => "Sampler ID",
            Column::SiteId => "Site ID",
            Column::ShippedLocation => "Shipped Location",
            Column::ShippedDate => "Shipped Date",
            Column::ReturnDate => "Return Date",
            Column::SampleType => "Sample Type",
            Column::Note => "Note",
        }
    }

    pub fn from_field(field: &str) -> AppResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.field() == field)
            .ok_or_else(|| AppError::UnknownColumn(field.to_string()))
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, Column::SampleStart | Column::SampleEnd)
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Column::ShippedDate | Column::ReturnDate)
    }

    /// The derived identifier is never edited directly.
    pub fn is_editable(&self) -> bool {
        !matches!(self, Column::SampleId)
    }
}
