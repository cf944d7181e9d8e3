//! # Session routes
//!
//! Everything the grid does goes through a session token issued by
//! `POST /sessions`. Handlers only ever touch the caller's own session.
//!
//! - `POST /sessions`: new empty session plus the site dropdown labels.
//! - `GET /sessions/{id}`: current rows.
//! - `DELETE /sessions/{id}`: drop the session.
//! - `POST /sessions/{id}/kit/entries`: update or remove draft sampler lines.
//! - `POST /sessions/{id}/kit`: "Done" on the new-kit modal.
//! - `POST /sessions/{id}/edit`: one cell edit.
//! - `DELETE /sessions/{id}/rows/{row}`: delete a row (and its persisted copy).
//! - `POST /sessions/{id}/search`: load rows by kit, sampler or location.
//! - `POST /sessions/{id}/upload`: reconcile and write the buffer.
//! - `POST /sessions/{id}/overwrite/confirm|cancel`: answer the overwrite prompt.

mod delete_row;
mod edit;
mod kit;
mod lifecycle;
mod overwrite;
mod search;
mod upload;

use actix_web::Scope;
use actix_web::web::{delete, get, post, scope};

const API_PATH: &str = "/sessions";

pub fn configure_routes(api: &str) -> Scope {
    scope(&format!("{api}{API_PATH}"))
        .route("", post().to(lifecycle::open))
        .route("/{id}", get().to(lifecycle::get))
        .route("/{id}", delete().to(lifecycle::close))
        .route("/{id}/kit/entries", post().to(kit::entries))
        .route("/{id}/kit", post().to(kit::done))
        .route("/{id}/edit", post().to(edit::process))
        .route("/{id}/rows/{row}", delete().to(delete_row::process))
        .route("/{id}/search", post().to(search::process))
        .route("/{id}/upload", post().to(upload::process))
        .route("/{id}/overwrite/confirm", post().to(overwrite::confirm))
        .route("/{id}/overwrite/cancel", post().to(overwrite::cancel))
}
