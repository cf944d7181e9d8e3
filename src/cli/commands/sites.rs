use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::{Databases, Role, Schema};
use crate::db::reference::{load_sites, save_site};
use crate::errors::AppResult;
use crate::models::site::Site;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sites { add, description } = cmd {
        let dbs = Databases::from_config(cfg);

        if let Some(siteid) = add {
            let site = Site {
                siteid: siteid.trim().to_string(),
                description: description.clone().unwrap_or_default().trim().to_string(),
                projectid: cfg.project_id.clone(),
            };
            let pool = dbs.open(Schema::Reference, Role::Editor)?;
            save_site(&pool.conn, &site)?;

            let log_pool = dbs.open(Schema::Project, Role::Editor)?;
            audit(
                &log_pool.conn,
                &log_pool.user,
                "site",
                &site.siteid,
                &format!("Saved site '{}'", site.label()),
            )?;
            success(format!("Site saved: {}", site.label()));
            return Ok(());
        }

        let pool = dbs.open(Schema::Reference, Role::Viewer)?;
        let catalog = load_sites(&pool.conn, &cfg.project_id)?;
        if catalog.sites().is_empty() {
            info(format!("No sites for project {}.", cfg.project_id));
            return Ok(());
        }

        let mut table = Table::new(["Site ID", "Description", "Label"]);
        for s in catalog.sites() {
            table.add_row(vec![s.siteid.clone(), s.description.clone(), s.label()]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
