use crate::core::reply::Reply;
use crate::core::session::{Session, SessionStore};
use crate::db::pool::Databases;
use crate::errors::{AppError, AppResult};
use crate::models::site::SiteCatalog;
use crate::ui::feedback::Feedback;
use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;

/// Shared across workers as `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub dbs: Databases,
    pub sessions: SessionStore,
    pub sites: Arc<SiteCatalog>,
}

impl AppState {
    /// Run `op` on the blocking pool against a copy of session `id`.
    ///
    /// The copy replaces the session only when `op` succeeds. Request errors
    /// (unknown session, bad row or column) become 4xx responses; anything else
    /// is logged and returned as a red message over the unchanged rows.
    pub async fn with_session<F>(
        &self,
        id: Uuid,
        failure: &'static str,
        op: F,
    ) -> AppResult<HttpResponse>
    where
        F: FnOnce(&mut Session, &AppState) -> AppResult<Reply> + Send + 'static,
    {
        let slot = self.sessions.get(&id).await?;
        let mut session = slot.lock().await;

        let mut work = session.clone();
        let state = self.clone();
        let (work, outcome) = web::block(move || {
            let outcome = op(&mut work, &state);
            (work, outcome)
        })
        .await
        .map_err(|e| AppError::Blocking(e.to_string()))?;

        match outcome {
            Ok(reply) => {
                *session = work;
                Ok(HttpResponse::Ok().json(reply))
            }
            Err(e) if super::error::is_request_error(&e) => Err(e),
            Err(e) => {
                log::error!("{} (session {}): {}", failure, id, e);
                let reply = Reply::of(&session).with_feedback(Feedback::error(format!("{failure}: {e}.")));
                Ok(HttpResponse::Ok().json(reply))
            }
        }
    }
}
