use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::{Databases, Role, Schema};
use crate::db::queries::read_table;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info,
        dump,
        reference,
    } = cmd
    {
        let dbs = Databases::from_config(cfg);

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            // the editor connection applies pending migrations on open
            dbs.ensure_created()?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            let pool = dbs.open(Schema::Project, Role::Viewer)?;
            stats::print_db_info(&pool, &dbs.path(Schema::Project))?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);
            for schema in [Schema::Project, Schema::Reference] {
                let pool = dbs.open(schema, Role::Viewer)?;
                let integrity: String =
                    pool.conn
                        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

                let path = dbs.path(schema);
                if integrity == "ok" {
                    println!("{}✔ {}: integrity check passed.{}", GREEN, path.display(), RESET);
                } else {
                    println!(
                        "{}✘ {}: integrity check failed:{} {}",
                        RED,
                        path.display(),
                        RESET,
                        integrity
                    );
                }
            }
            println!();
        }

        //
        // 4) DUMP
        //
        if let Some(table) = dump {
            let schema = if *reference {
                Schema::Reference
            } else {
                Schema::Project
            };
            let pool = dbs.open(schema, Role::Viewer)?;
            let rows = read_table(&pool.conn, table)?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }

    Ok(())
}
