use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &DbPool, db_path: &Path) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        db_path.display(),
        RESET
    );
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM pas_tracking", [], |row| row.get(0))?;
    let kits: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT kitid) FROM pas_tracking",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Total samples:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );
    println!("{}• Kits:{} {}{}{}", CYAN, RESET, GREEN, kits, RESET);

    //
    // 3) SAMPLING RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT sample_start FROM pas_tracking WHERE sample_start IS NOT NULL
             ORDER BY sample_start ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT sample_start FROM pas_tracking WHERE sample_start IS NOT NULL
             ORDER BY sample_start DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Sampling starts:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
