use crate::core::reply::{Modal, Reply};
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
struct Opened {
    session: Uuid,
    sites: Vec<String>,
    #[serde(flatten)]
    reply: Reply,
}

pub(crate) async fn open(state: web::Data<AppState>) -> HttpResponse {
    let session = state.sessions.open().await;
    log::info!("Opened session {}", session);
    HttpResponse::Ok().json(Opened {
        session,
        sites: state.sites.labels(),
        reply: Reply::of(&Session::default()),
    })
}

pub(crate) async fn get(id: web::Path<Uuid>, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let slot = state.sessions.get(&id).await?;
    let session = slot.lock().await;
    let mut reply = Reply::of(&session);
    if let Some(plan) = &session.pending {
        reply = reply.with_modal(Modal::OverwriteConfirm {
            duplicates: plan.duplicates.clone(),
        });
    }
    Ok(HttpResponse::Ok().json(reply))
}

pub(crate) async fn close(id: web::Path<Uuid>, state: web::Data<AppState>) -> HttpResponse {
    if state.sessions.close(&id).await {
        log::info!("Closed session {}", id);
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().body(format!("Session not found: {id}"))
    }
}
