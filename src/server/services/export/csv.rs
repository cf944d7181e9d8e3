use crate::core::export::ExportLogic;
use crate::db::pool::{Role, Schema};
use crate::errors::{AppError, AppResult};
use crate::server::state::AppState;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, web};

pub(crate) async fn process(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let dbs = state.dbs.clone();
    let (file_name, body) = web::block(move || {
        let viewer = dbs.open(Schema::Project, Role::Viewer)?;
        ExportLogic::to_bytes(&viewer.conn)
    })
    .await
    .map_err(|e| AppError::Blocking(e.to_string()))?
    .inspect_err(|e| log::error!("Error exporting pas_tracking to CSV: {}", e))?;

    log::info!("Serving {} ({} bytes)", file_name, body.len());
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file_name)],
        })
        .body(body))
}
