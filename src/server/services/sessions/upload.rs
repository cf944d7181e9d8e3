use crate::core::upload::UploadLogic;
use crate::errors::AppResult;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

pub(crate) async fn process(id: web::Path<Uuid>, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state
        .with_session(*id, "Error uploading data", |session, state| {
            UploadLogic::apply(session, &state.dbs, &state.sites)
        })
        .await
}
