//! Dropdown contents: site labels and distinct shipped locations.

mod locations;
mod sites;

use actix_web::Scope;
use actix_web::web::{get, scope};

const API_PATH: &str = "/reference";

pub fn configure_routes(api: &str) -> Scope {
    scope(&format!("{api}{API_PATH}"))
        .route("/sites", get().to(sites::process))
        .route("/locations", get().to(locations::process))
}
