use crate::db::pool::{Role, Schema};
use crate::db::queries::shipped_locations;
use crate::errors::{AppError, AppResult};
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};

pub(crate) async fn process(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let dbs = state.dbs.clone();
    let locations = web::block(move || {
        let viewer = dbs.open(Schema::Project, Role::Viewer)?;
        shipped_locations(&viewer.conn)
    })
    .await
    .map_err(|e| AppError::Blocking(e.to_string()))?
    .inspect_err(|e| log::error!("Error loading shipped locations: {}", e))?;

    Ok(HttpResponse::Ok().json(locations))
}
