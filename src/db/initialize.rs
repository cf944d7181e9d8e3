use crate::db::migrate::run_pending_migrations;
use crate::db::pool::Schema;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize one database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_schema(conn: &Connection, schema: Schema) -> AppResult<()> {
    run_pending_migrations(conn, schema)?;
    Ok(())
}
