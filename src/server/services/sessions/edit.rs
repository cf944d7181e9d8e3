use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct EditRequest {
    /// 0-based grid row.
    row: usize,
    /// Table field name, e.g. `sample_start`.
    field: String,
    #[serde(default)]
    value: Option<String>,
}

pub(crate) async fn process(
    id: web::Path<Uuid>,
    body: web::Json<EditRequest>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    state
        .with_session(*id, "Error editing cell", move |session, _| {
            EditLogic::apply(session, req.row, &req.field, req.value)
        })
        .await
}
