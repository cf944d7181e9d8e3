use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::{Databases, Role, Schema};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config file (skipped in test mode)
///  - the data directory
///  - both SQLite databases with all migrations applied
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.server.clone(), cli.test)?;

    let dbs = Databases::from_config(cfg);
    println!("⚙️  Initializing SampleTrack…");
    println!("🗄️  Project database   : {}", dbs.path(Schema::Project).display());
    println!("🗄️  Reference database : {}", dbs.path(Schema::Reference).display());

    dbs.ensure_created()?;

    let pool = dbs.open(Schema::Project, Role::Editor)?;
    if let Err(e) = audit(
        &pool.conn,
        &pool.user,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.server),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("SampleTrack initialization completed!");
    Ok(())
}
