//! Per-session edit buffers.
//!
//! Every browser client gets its own `Session`, addressed by a UUID token.
//! The `SessionStore` is shared across the HTTP workers; handlers lock only the
//! session they act on, so two clients never observe each other's rows.

use crate::core::kit::KitDraft;
use crate::core::reconcile::UploadPlan;
use crate::errors::{AppError, AppResult};
use crate::models::sample::SampleRecord;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// Editing context of one client.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Rows currently shown in the grid, in display order.
    pub buffer: Vec<SampleRecord>,
    /// Batch waiting for overwrite confirmation.
    pub pending: Option<UploadPlan>,
    /// State of the "new kit" modal.
    pub draft: KitDraft,
}

impl Session {
    pub fn rows(&self) -> &[SampleRecord] {
        &self.buffer
    }

    pub fn replace(&mut self, rows: Vec<SampleRecord>) {
        self.buffer = rows;
        self.pending = None;
    }

    pub fn row_mut(&mut self, index: usize) -> AppResult<&mut SampleRecord> {
        self.buffer
            .get_mut(index)
            .ok_or(AppError::InvalidRow(index + 1))
    }

    /// Removing a row also drops any batch held for overwrite confirmation.
    pub fn remove(&mut self, index: usize) -> AppResult<SampleRecord> {
        if index >= self.buffer.len() {
            return Err(AppError::InvalidRow(index + 1));
        }
        self.pending = None;
        Ok(self.buffer.remove(index))
    }

    /// After a successful write the rows `plan` wrote are keyed by their
    /// current id. Rows the plan did not cover keep their previous key.
    pub fn mark_persisted(&mut self, plan: &UploadPlan) {
        let written: HashSet<&str> = plan
            .writes
            .iter()
            .map(|w| w.record.sampleid.as_str())
            .collect();
        for r in self
            .buffer
            .iter_mut()
            .filter(|r| written.contains(r.sampleid.as_str()))
        {
            r.original_sampleid = Some(r.sampleid.clone());
        }
        self.pending = None;
    }
}

struct Slot {
    session: Arc<Mutex<Session>>,
    last_seen: Instant,
}

/// Shared map of live sessions.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Slot>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Create an empty session, evicting those idle for longer than the ttl.
    pub async fn open(&self) -> Uuid {
        let mut sessions = self.sessions.write().await;
        let ttl = self.ttl;
        let before = sessions.len();
        sessions.retain(|_, slot| slot.last_seen.elapsed() < ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            log::info!("Evicted {} idle session(s)", evicted);
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            Slot {
                session: Arc::new(Mutex::new(Session::default())),
                last_seen: Instant::now(),
            },
        );
        id
    }

    pub async fn get(&self, id: &Uuid) -> AppResult<Arc<Mutex<Session>>> {
        let mut sessions = self.sessions.write().await;
        let slot = sessions
            .get_mut(id)
            .ok_or_else(|| AppError::SessionNotFound(id.to_string()))?;
        slot.last_seen = Instant::now();
        Ok(slot.session.clone())
    }

    pub async fn close(&self, id: &Uuid) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
