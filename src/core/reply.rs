//! What every event handler hands back to the grid.

use crate::core::kit::KitEntry;
use crate::core::session::Session;
use crate::models::sample::SampleRecord;
use crate::ui::feedback::Feedback;
use serde::Serialize;

/// Modal dialog the client should show after the event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Modal {
    Closed,
    /// "Enter New Kit Information", with the current sampler entries.
    NewKit { entries: Vec<KitEntry> },
    /// "Update Kit Entry" search dialog.
    Search,
    /// "Some sample IDs already exist in the database. Do you want to overwrite them?"
    OverwriteConfirm { duplicates: Vec<SampleRecord> },
}

#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub rows: Vec<SampleRecord>,
    pub feedback: Option<Feedback>,
    pub modal: Modal,
    /// Whether the "Upload Data to Database" button is shown.
    pub show_upload: bool,
}

impl Reply {
    /// Snapshot of the session with the modal closed.
    pub fn of(session: &Session) -> Self {
        Self {
            rows: session.buffer.clone(),
            feedback: None,
            modal: Modal::Closed,
            show_upload: !session.buffer.is_empty(),
        }
    }

    pub fn with_feedback(mut self, feedback: Feedback) -> Self {
        self.feedback = Some(feedback);
        self
    }

    pub fn with_modal(mut self, modal: Modal) -> Self {
        self.modal = modal;
        self
    }
}
