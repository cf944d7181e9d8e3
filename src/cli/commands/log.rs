use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::{Databases, Role, Schema};
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

/// Colour of an operation name in the printed log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "upload" => Colour::Green,
        "overwrite" => Colour::Yellow,
        "delete" => Colour::Red,
        "site" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const MAX_TARGET: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Log { print: true }) {
        return Ok(());
    }

    let pool = Databases::from_config(cfg).open(Schema::Project, Role::Viewer)?;
    let entries = load_log(&pool.conn)?;
    if entries.is_empty() {
        info("The log is empty.");
        return Ok(());
    }

    let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
    let op_w = entries.iter().map(|e| e.operation.len()).max().unwrap_or(1);
    let target_w = entries
        .iter()
        .map(|e| e.target.chars().count().min(MAX_TARGET))
        .max()
        .unwrap_or(1);

    println!("📜 Internal log:\n");
    for e in &entries {
        let date = chrono::DateTime::parse_from_rfc3339(&e.date)
            .map(|dt| dt.format("%F %T").to_string())
            .unwrap_or_else(|_| e.date.clone());

        let target = if e.target.chars().count() > MAX_TARGET {
            let mut s: String = e.target.chars().take(MAX_TARGET - 3).collect();
            s.push_str("...");
            s
        } else {
            e.target.clone()
        };
        let user = if e.user.is_empty() { "-" } else { e.user.as_str() };

        // pad before painting so ANSI codes do not count towards the width
        let op = format!("{:<op_w$}", e.operation);
        println!(
            "{:>id_w$}: {} | {} {:<target_w$} | {} => {}",
            e.id,
            date,
            color_for_operation(&e.operation).paint(op),
            target,
            user,
            e.message,
        );
    }

    Ok(())
}
