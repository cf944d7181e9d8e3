use crate::core::upload::UploadLogic;
use crate::errors::AppResult;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

pub(crate) async fn confirm(id: web::Path<Uuid>, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state
        .with_session(*id, "Error overwriting", |session, state| {
            UploadLogic::confirm(session, &state.dbs)
        })
        .await
}

pub(crate) async fn cancel(id: web::Path<Uuid>, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state
        .with_session(*id, "Error cancelling overwrite", |session, _| {
            Ok(UploadLogic::cancel(session))
        })
        .await
}
