//! Derived identifiers and pre-write partitioning of a session batch.

use crate::models::sample::SampleRecord;
use std::collections::{HashMap, HashSet};

/// Composite sample identifier: `{kitid}_{samplerid}`.
pub fn sample_id(kitid: &str, samplerid: &str) -> String {
    format!("{}_{}", kitid.trim(), samplerid.trim())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteKind {
    /// Never persisted.
    Insert,
    /// Loaded from the table under `previous`; may have been renamed since.
    Update { previous: String },
}

#[derive(Debug, Clone)]
pub struct PlannedWrite {
    pub record: SampleRecord,
    pub kind: WriteKind,
}

impl PlannedWrite {
    /// Old identifier to retire when the row was renamed.
    pub fn renamed_from(&self) -> Option<&str> {
        match &self.kind {
            WriteKind::Update { previous } if *previous != self.record.sampleid => {
                Some(previous.as_str())
            }
            _ => None,
        }
    }
}

/// Outcome of reconciling a batch against the persisted identifiers.
#[derive(Debug, Clone, Default)]
pub struct UploadPlan {
    /// Every uploadable row, in buffer order.
    pub writes: Vec<PlannedWrite>,
    /// Rows whose identifier collides inside the batch or with another persisted row.
    pub duplicates: Vec<SampleRecord>,
    /// Rows dropped because their sampler ID is blank.
    pub skipped: usize,
}

impl UploadPlan {
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// A plan with duplicates must not be written without explicit overwrite.
    pub fn is_blocked(&self) -> bool {
        !self.duplicates.is_empty()
    }

    pub fn inserts(&self) -> usize {
        self.writes
            .iter()
            .filter(|w| w.kind == WriteKind::Insert)
            .count()
    }

    pub fn updates(&self) -> usize {
        self.writes.len() - self.inserts()
    }
}

/// Partition `rows` into inserts, updates and duplicates.
///
/// A row is a duplicate when its identifier occurs more than once in the batch
/// (every occurrence is reported) or when it is already persisted by a record
/// other than the one the row was loaded from.
pub fn plan_upload(rows: &[SampleRecord], persisted: &HashSet<String>) -> UploadPlan {
    let candidates: Vec<&SampleRecord> = rows
        .iter()
        .filter(|r| !r.samplerid.trim().is_empty())
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in &candidates {
        *counts.entry(r.sampleid.as_str()).or_insert(0) += 1;
    }

    let mut plan = UploadPlan {
        skipped: rows.len() - candidates.len(),
        ..UploadPlan::default()
    };

    for r in candidates {
        let id = r.sampleid.as_str();
        let repeated = counts.get(id).copied().unwrap_or(0) > 1;
        let taken = persisted.contains(id) && r.original_sampleid.as_deref() != Some(id);

        if repeated || taken {
            plan.duplicates.push(r.clone());
        }

        let kind = match &r.original_sampleid {
            None => WriteKind::Insert,
            Some(prev) => WriteKind::Update {
                previous: prev.clone(),
            },
        };
        plan.writes.push(PlannedWrite {
            record: r.clone(),
            kind,
        });
    }

    plan
}
