use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use uuid::Uuid;

pub(crate) async fn process(
    path: web::Path<(Uuid, usize)>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let (id, row) = path.into_inner();
    state
        .with_session(id, "Error deleting row", move |session, state| {
            DeleteLogic::apply(session, &state.dbs, row)
        })
        .await
}
