//! Role-scoped SQLite connections (short-lived, one per call).

use crate::config::{Config, Credentials};
use crate::db::initialize::init_schema;
use crate::errors::AppResult;
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;

/// The two databases the application talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// Shared reference data: `users`, `stations`.
    Reference,
    /// Sample tracking rows: `pas_tracking`, `log`.
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Viewer,
    Editor,
}

pub struct DbPool {
    pub conn: Connection,
    pub user: String,
}

/// Where the databases live and which credentials open them.
#[derive(Debug, Clone)]
pub struct Databases {
    server: PathBuf,
    project: String,
    reference: String,
    viewer: Credentials,
    editor: Credentials,
}

impl Databases {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            server: PathBuf::from(&cfg.server),
            project: cfg.database.clone(),
            reference: cfg.reference_database.clone(),
            viewer: cfg.viewer.clone(),
            editor: cfg.editor.clone(),
        }
    }

    pub fn path(&self, schema: Schema) -> PathBuf {
        let name = match schema {
            Schema::Reference => &self.reference,
            Schema::Project => &self.project,
        };
        self.server.join(format!("{name}.sqlite"))
    }

    /// Open a connection for `role`.
    ///
    /// SQLite has no login: the viewer role maps to read-only open flags and the
    /// editor role to read-write. The editor connection also brings the schema
    /// up to date, and its user name is stamped on audit log entries.
    pub fn open(&self, schema: Schema, role: Role) -> AppResult<DbPool> {
        let path = self.path(schema);
        let pool = match role {
            Role::Viewer => DbPool {
                conn: Connection::open_with_flags(
                    &path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )?,
                user: self.viewer.user.clone(),
            },
            Role::Editor => {
                if let Some(dir) = path.parent() {
                    std::fs::create_dir_all(dir)?;
                }
                let conn = Connection::open(&path)?;
                init_schema(&conn, schema)?;
                DbPool {
                    conn,
                    user: self.editor.user.clone(),
                }
            }
        };
        Ok(pool)
    }

    /// Create both database files with their schema.
    pub fn ensure_created(&self) -> AppResult<()> {
        self.open(Schema::Reference, Role::Editor)?;
        self.open(Schema::Project, Role::Editor)?;
        Ok(())
    }
}
