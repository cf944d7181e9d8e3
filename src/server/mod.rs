//! HTTP JSON API for the grid client.
//!
//! Every session-scoped route works on a copy of the caller's session and
//! stores it back only when the handler succeeds, so a failed database call
//! leaves the buffer as it was.

pub mod error;
pub mod services;
pub mod state;

use crate::config::Config;
use crate::db::pool::{Databases, Role, Schema};
use crate::db::reference::load_sites;
use crate::errors::AppResult;
use crate::core::session::SessionStore;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use env_logger::Env;
use log::info;
use state::AppState;
use std::sync::Arc;
use std::time::Duration;

/// Build the shared state: schema in place, site catalogue loaded.
pub fn prepare(cfg: &Config) -> AppResult<AppState> {
    let dbs = Databases::from_config(cfg);
    dbs.ensure_created()?;

    let sites = {
        let viewer = dbs.open(Schema::Reference, Role::Viewer)?;
        load_sites(&viewer.conn, &cfg.project_id)?
    };
    info!(
        "Loaded {} site(s) for project {}",
        sites.sites().len(),
        cfg.project_id
    );

    Ok(AppState {
        dbs,
        sessions: SessionStore::new(Duration::from_secs(cfg.session_ttl_minutes * 60)),
        sites: Arc::new(sites),
    })
}

/// Register every route under `{prefix}/api`.
pub fn routes(prefix: String) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        let api = format!("{prefix}/api");
        cfg.service(services::sessions::configure_routes(&api))
            .service(services::reference::configure_routes(&api))
            .service(services::export::configure_routes(&api));
    }
}

/// Start the server and block until it stops.
pub async fn run(cfg: Config) -> AppResult<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    cfg.validate("configuration")?;

    let state = prepare(&cfg)?;
    let prefix = cfg.scope_prefix();
    info!(
        "Server running at http://{}{}/api",
        cfg.listen, prefix
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(routes(prefix.clone()))
    })
    .bind(cfg.listen.as_str())?
    .run()
    .await?;
    Ok(())
}
