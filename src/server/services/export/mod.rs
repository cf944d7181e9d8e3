//! Full-table CSV download.

mod csv;

use actix_web::Scope;
use actix_web::web::{get, scope};

const API_PATH: &str = "/export";

pub fn configure_routes(api: &str) -> Scope {
    scope(&format!("{api}{API_PATH}")).route("/csv", get().to(csv::process))
}
