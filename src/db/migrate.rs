use crate::db::pool::Schema;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

/// Column list of `pas_tracking`, in table order.
pub const PAS_TRACKING_COLUMNS: [&str; 12] = [
    "sample_start",
    "sample_end",
    "sampleid",
    "kitid",
    "samplerid",
    "siteid",
    "shipped_location",
    "shipped_date",
    "return_date",
    "sample_type",
    "note",
    "screen_sampling_rate",
];

const UNIQUE_SAMPLEID: &str = "20250601_0002_unique_sampleid";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    log::info!("Migration applied: {} → {}", version, message);
    Ok(())
}

/// Create the `pas_tracking` table with the modern schema.
fn create_pas_tracking_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS pas_tracking (
            sample_start         TEXT,
            sample_end           TEXT,
            sampleid             TEXT NOT NULL,
            kitid                TEXT NOT NULL,
            samplerid            TEXT NOT NULL,
            siteid               TEXT,
            shipped_location     TEXT,
            shipped_date         TEXT,
            return_date          TEXT,
            sample_type          TEXT CHECK(sample_type IS NULL OR sample_type IN ('Sample','Blank')),
            note                 TEXT,
            screen_sampling_rate REAL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_pas_tracking_sampleid ON pas_tracking(sampleid);
        CREATE INDEX IF NOT EXISTS idx_pas_tracking_kitid ON pas_tracking(kitid);
        "#,
    )?;
    Ok(())
}

/// Older tables carried no uniqueness guarantee on `sampleid`; the upsert path
/// needs one. Refuses to proceed while duplicates are present.
fn migrate_unique_sampleid(conn: &Connection) -> AppResult<()> {
    let version = UNIQUE_SAMPLEID;
    if migration_applied(conn, version)? {
        return Ok(());
    }

    let duplicated: i64 = conn.query_row(
        "SELECT COUNT(*) FROM (
            SELECT sampleid FROM pas_tracking GROUP BY sampleid HAVING COUNT(*) > 1
         )",
        [],
        |row| row.get(0),
    )?;
    if duplicated > 0 {
        return Err(AppError::Migration(format!(
            "{duplicated} sample ID(s) occur more than once in pas_tracking; resolve them before upgrading"
        )));
    }

    conn.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_pas_tracking_sampleid ON pas_tracking(sampleid);",
    )?;
    mark_applied(conn, version, "Unique index on pas_tracking.sampleid")?;
    Ok(())
}

fn migrate_log_user_column(conn: &Connection) -> Result<()> {
    let version = "20250601_0003_log_user";
    if column_exists(conn, "log", "user")? {
        return Ok(());
    }
    conn.execute("ALTER TABLE log ADD COLUMN user TEXT DEFAULT ''", [])?;
    mark_applied(conn, version, "Added user to log table")?;
    Ok(())
}

fn create_reference_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            username  TEXT PRIMARY KEY,
            email     TEXT DEFAULT '',
            fullname  TEXT DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS stations (
            siteid       TEXT PRIMARY KEY,
            description  TEXT NOT NULL,
            projectid    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_stations_projectid ON stations(projectid);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations for one schema.
///
/// Called by db::initialize::init_schema() on every editor connection.
pub fn run_pending_migrations(conn: &Connection, schema: Schema) -> AppResult<()> {
    match schema {
        Schema::Reference => create_reference_tables(conn)?,
        Schema::Project => {
            // 1) Ensure log table
            ensure_log_table(conn)?;

            // 2) Legacy tables predate the unique index
            if table_exists(conn, "pas_tracking")? {
                migrate_unique_sampleid(conn)?;
            } else {
                create_pas_tracking_table(conn)?;
                mark_applied(conn, UNIQUE_SAMPLEID, "Created pas_tracking (modern schema)")?;
            }

            // 3) Audit rows record the editor
            migrate_log_user_column(conn)?;
        }
    }
    Ok(())
}
