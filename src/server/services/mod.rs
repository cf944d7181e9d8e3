//! Route groups. Each exposes `configure_routes(api)` returning an actix `Scope`.

pub mod export;
pub mod reference;
pub mod sessions;
