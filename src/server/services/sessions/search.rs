use crate::core::search::{SearchLogic, SearchMode};
use crate::db::pool::{Role, Schema};
use crate::errors::AppResult;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchRequest {
    mode: SearchMode,
    #[serde(default)]
    value: String,
}

pub(crate) async fn process(
    id: web::Path<Uuid>,
    body: web::Json<SearchRequest>,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    state
        .with_session(*id, "Error loading data", move |session, state| {
            let viewer = state.dbs.open(Schema::Project, Role::Viewer)?;
            SearchLogic::apply(session, &viewer.conn, &state.sites, req.mode, &req.value)
        })
        .await
}
