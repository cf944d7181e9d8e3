use crate::server::state::AppState;
use actix_web::{HttpResponse, web};

pub(crate) async fn process(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.sites.labels())
}
