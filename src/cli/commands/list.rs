use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::search::{Outcome, SearchLogic, SearchMode, for_grid};
use crate::db::pool::{Databases, Role, Schema};
use crate::db::queries::load_samples;
use crate::db::reference::load_sites;
use crate::errors::AppResult;
use crate::models::sample::SampleRecord;
use crate::ui::messages::{feedback, info};
use crate::utils::colors::{colorize_optional, colorize_sample_type};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        kit,
        sampler,
        location,
    } = cmd
    {
        let dbs = Databases::from_config(cfg);
        let pool = dbs.open(Schema::Project, Role::Viewer)?;

        let query = match (kit, sampler, location) {
            (Some(k), _, _) => Some((SearchMode::Kit, k)),
            (_, Some(s), _) => Some((SearchMode::Sampler, s)),
            (_, _, Some(l)) => Some((SearchMode::Location, l)),
            _ => None,
        };

        let rows = match query {
            None => load_samples(&pool.conn)?,
            Some((mode, value)) => match SearchLogic::find(&pool.conn, mode, value)? {
                Outcome::Found(rows) => rows,
                Outcome::Rejected(fb) => {
                    feedback(&fb);
                    return Ok(());
                }
            },
        };

        if rows.is_empty() {
            info("No samples recorded yet.");
            return Ok(());
        }

        let sites = {
            let reference = dbs.open(Schema::Reference, Role::Viewer)?;
            load_sites(&reference.conn, &cfg.project_id)?
        };
        let rows: Vec<SampleRecord> = rows.into_iter().map(|r| for_grid(r, &sites)).collect();
        print!("{}", render(&rows));
        println!("\n{} row(s)", rows.len());
    }
    Ok(())
}

fn render(rows: &[SampleRecord]) -> String {
    let mut table = Table::new([
        "Sample ID",
        "Start",
        "End",
        "Site",
        "Shipped to",
        "Shipped",
        "Returned",
        "Type",
        "Note",
    ]);
    for r in rows {
        table.add_row(vec![
            r.sampleid.clone(),
            colorize_optional(r.sample_start.as_deref()),
            colorize_optional(r.sample_end.as_deref()),
            colorize_optional(r.siteid.as_deref()),
            colorize_optional(r.shipped_location.as_deref()),
            colorize_optional(r.shipped_date.as_deref()),
            colorize_optional(r.return_date.as_deref()),
            colorize_sample_type(r.sample_type.map(|t| t.as_str())),
            colorize_optional(r.note.as_deref()),
        ]);
    }
    table.render()
}
