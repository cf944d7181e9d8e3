//! "New kit" modal: the draft list of samplers and its completion.

use crate::core::reply::{Modal, Reply};
use crate::core::session::Session;
use crate::core::validate::{SAMPLER_ID_LEN, is_kit_id, is_sampler_id};
use crate::models::sample::SampleRecord;
use crate::models::sample_type::SampleType;
use crate::ui::feedback::Feedback;
use serde::{Deserialize, Serialize};

/// One sampler line of the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitEntry {
    pub index: u32,
    #[serde(default)]
    pub sampler_id: String,
    #[serde(default)]
    pub sample_type: Option<SampleType>,
}

impl KitEntry {
    pub fn blank(index: u32) -> Self {
        Self {
            index,
            sampler_id: String::new(),
            sample_type: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KitDraft {
    pub entries: Vec<KitEntry>,
    /// Index handed to the next appended entry.
    next_index: u32,
}

impl Default for KitDraft {
    fn default() -> Self {
        Self {
            entries: vec![KitEntry::blank(1)],
            next_index: 2,
        }
    }
}

impl KitDraft {
    /// Take the entries as typed by the user.
    ///
    /// When the last entry holds a complete sampler ID a blank line is appended,
    /// unless the next index is already present.
    pub fn update(&mut self, entries: Vec<KitEntry>) {
        self.entries = entries;
        if let Some(max) = self.entries.iter().map(|e| e.index).max() {
            self.next_index = self.next_index.max(max + 1);
        }

        let wants_more = self
            .entries
            .last()
            .is_some_and(|e| e.sampler_id.chars().count() == SAMPLER_ID_LEN);
        let next = self.next_index;
        if wants_more && !self.entries.iter().any(|e| e.index == next) {
            self.entries.push(KitEntry::blank(next));
            self.next_index += 1;
        }
    }

    /// Drop the entry carrying `index`. Unknown indexes are ignored.
    pub fn remove(&mut self, index: u32) {
        self.entries.retain(|e| e.index != index);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Entries with a non-blank sampler ID, in order.
    pub fn filled(&self) -> impl Iterator<Item = &KitEntry> {
        self.entries
            .iter()
            .filter(|e| !e.sampler_id.trim().is_empty())
    }
}

/// "Done" on the new-kit modal.
pub struct NewKitLogic;

impl NewKitLogic {
    /// Validate the kit and its samplers, then replace the buffer with one new
    /// row per sampler. On failure the modal stays open and the buffer is kept.
    pub fn apply(session: &mut Session, kit_id: &str) -> Reply {
        let reopen = |session: &Session, msg: String| {
            Reply::of(session)
                .with_feedback(Feedback::error(msg))
                .with_modal(Modal::NewKit {
                    entries: session.draft.entries.clone(),
                })
        };

        if !is_kit_id(kit_id) {
            return reopen(session, "Invalid Kit ID format. Expected EC-####.".into());
        }

        let invalid: Vec<&str> = session
            .draft
            .filled()
            .map(|e| e.sampler_id.as_str())
            .filter(|s| !is_sampler_id(s))
            .collect();
        if !invalid.is_empty() {
            let msg = format!(
                "Invalid Sample ID(s): {}. Expected ECCC####.",
                invalid.join(", ")
            );
            return reopen(session, msg);
        }

        let rows: Vec<SampleRecord> = session
            .draft
            .filled()
            .map(|e| SampleRecord::new(kit_id, &e.sampler_id, e.sample_type))
            .collect();
        if rows.is_empty() {
            return reopen(session, "Enter at least one Sampler ID.".into());
        }

        log::info!("New kit {} with {} sampler(s)", kit_id.trim(), rows.len());
        session.replace(rows);
        session.draft.reset();
        Reply::of(session)
    }
}
