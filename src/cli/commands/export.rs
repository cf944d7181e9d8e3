use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::pool::{Databases, Role, Schema};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let pool = Databases::from_config(cfg).open(Schema::Project, Role::Viewer)?;
        ExportLogic::to_path(&pool.conn, file.as_deref(), *force)?;
    }
    Ok(())
}
