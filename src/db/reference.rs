//! Reads (and admin seeding) of the shared reference schema.

use crate::errors::AppResult;
use crate::models::site::{Site, SiteCatalog};
use rusqlite::{Connection, params};

/// Stations belonging to `project_id`, as a sorted catalogue.
pub fn load_sites(conn: &Connection, project_id: &str) -> AppResult<SiteCatalog> {
    let mut stmt = conn.prepare(
        "SELECT siteid, description, projectid FROM stations WHERE projectid = ?1",
    )?;
    let rows = stmt.query_map([project_id], |row| {
        Ok(Site {
            siteid: row.get(0)?,
            description: row.get(1)?,
            projectid: row.get(2)?,
        })
    })?;

    let mut sites = Vec::new();
    for r in rows {
        sites.push(r?);
    }
    Ok(SiteCatalog::new(sites))
}

/// Insert or update one station.
pub fn save_site(conn: &Connection, site: &Site) -> AppResult<()> {
    conn.execute(
        "INSERT INTO stations (siteid, description, projectid) VALUES (?1, ?2, ?3)
         ON CONFLICT(siteid) DO UPDATE SET description = excluded.description,
                                           projectid = excluded.projectid",
        params![site.siteid, site.description, site.projectid],
    )?;
    Ok(())
}
