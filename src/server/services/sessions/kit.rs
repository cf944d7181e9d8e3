use crate::core::kit::{KitEntry, NewKitLogic};
use crate::core::reply::{Modal, Reply};
use crate::errors::AppResult;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

/// Either the full list of lines as typed, or the index of a line to drop.
#[derive(Debug, Deserialize)]
pub(crate) struct EntriesRequest {
    #[serde(default)]
    entries: Option<Vec<KitEntry>>,
    #[serde(default)]
    remove: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DoneRequest {
    kit_id: String,
    /// Final state of the lines; the stored draft is used when absent.
    #[serde(default)]
    entries: Option<Vec<KitEntry>>,
}

pub(crate) async fn entries(
    id: web::Path<Uuid>,
    body: web::Json<EntriesRequest>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    state
        .with_session(*id, "Error updating kit entries", move |session, _| {
            if let Some(entries) = req.entries {
                session.draft.update(entries);
            }
            if let Some(index) = req.remove {
                session.draft.remove(index);
            }
            Ok(Reply::of(session).with_modal(Modal::NewKit {
                entries: session.draft.entries.clone(),
            }))
        })
        .await
}

pub(crate) async fn done(
    id: web::Path<Uuid>,
    body: web::Json<DoneRequest>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    state
        .with_session(*id, "Error creating kit", move |session, _| {
            if let Some(entries) = req.entries {
                session.draft.update(entries);
            }
            Ok(NewKitLogic::apply(session, &req.kit_id))
        })
        .await
}
