use crate::core::reconcile::PlannedWrite;
use crate::db::log::audit;
use crate::db::migrate::PAS_TRACKING_COLUMNS;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::sample::SampleRecord;
use crate::models::sample_type::SampleType;
use regex::Regex;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Result, Row, params};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::LazyLock;

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"));

/// Which column a filtered read matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    KitId,
    SamplerId,
    ShippedLocation,
}

impl Filter {
    fn column(&self) -> &'static str {
        match self {
            Filter::KitId => "kitid",
            Filter::SamplerId => "samplerid",
            Filter::ShippedLocation => "shipped_location",
        }
    }
}

fn select_all() -> String {
    format!("SELECT {} FROM pas_tracking", PAS_TRACKING_COLUMNS.join(", "))
}

/// Row → record. The stored identifier becomes `original_sampleid`.
pub fn map_row(row: &Row) -> Result<SampleRecord> {
    let sampleid: String = row.get("sampleid")?;
    let sample_type: Option<String> = row.get("sample_type")?;

    Ok(SampleRecord {
        sample_start: row.get("sample_start")?,
        sample_end: row.get("sample_end")?,
        original_sampleid: Some(sampleid.clone()),
        sampleid,
        kitid: row.get("kitid")?,
        samplerid: row.get("samplerid")?,
        siteid: row.get("siteid")?,
        shipped_location: row.get("shipped_location")?,
        shipped_date: row.get("shipped_date")?,
        return_date: row.get("return_date")?,
        sample_type: sample_type.as_deref().and_then(SampleType::from_db_str),
        note: row.get("note")?,
        screen_sampling_rate: row.get("screen_sampling_rate")?,
    })
}

/// Typed bulk read of `pas_tracking`, in insertion order.
pub fn load_samples(conn: &Connection) -> AppResult<Vec<SampleRecord>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY rowid ASC", select_all()))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Case-insensitive exact match on one column (both sides trimmed).
pub fn load_samples_by(conn: &Connection, filter: Filter, value: &str) -> AppResult<Vec<SampleRecord>> {
    let sql = format!(
        "{} WHERE lower(trim({col})) = lower(trim(?1)) ORDER BY rowid ASC",
        select_all(),
        col = filter.column()
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([value], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Kit that most recently (by `sample_start`) held the given sampler.
pub fn latest_kit_for_sampler(conn: &Connection, samplerid: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare(
        "SELECT kitid FROM pas_tracking
         WHERE lower(trim(samplerid)) = lower(trim(?1)) AND kitid IS NOT NULL AND kitid <> ''
         ORDER BY sample_start IS NULL, sample_start DESC, rowid DESC
         LIMIT 1",
    )?;
    let mut rows = stmt.query([samplerid])?;
    match rows.next()? {
        Some(row) => Ok(Some(row.get(0)?)),
        None => Ok(None),
    }
}

pub fn existing_sampleids(conn: &Connection) -> AppResult<HashSet<String>> {
    let mut stmt = conn.prepare("SELECT sampleid FROM pas_tracking WHERE sampleid IS NOT NULL")?;
    let ids = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = HashSet::new();
    for id in ids {
        out.insert(id?);
    }
    Ok(out)
}

/// Distinct, sorted, non-empty shipped locations.
pub fn shipped_locations(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT shipped_location FROM pas_tracking
         WHERE shipped_location IS NOT NULL AND trim(shipped_location) <> ''
         ORDER BY shipped_location ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_samples(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM pas_tracking", [], |row| row.get(0))?)
}

/// Append-only insert of one record (already in storage form).
pub fn insert_sample(conn: &Connection, r: &SampleRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO pas_tracking (sample_start, sample_end, sampleid, kitid, samplerid, siteid,
                                   shipped_location, shipped_date, return_date, sample_type, note,
                                   screen_sampling_rate)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            r.sample_start,
            r.sample_end,
            r.sampleid,
            r.kitid,
            r.samplerid,
            r.siteid,
            r.shipped_location,
            r.shipped_date,
            r.return_date,
            r.sample_type.map(|t| t.to_db_str()),
            r.note,
            r.screen_sampling_rate,
        ],
    )?;
    Ok(())
}

/// Batch insert inside one transaction.
pub fn insert_samples(pool: &mut DbPool, rows: &[SampleRecord]) -> AppResult<usize> {
    let tx = pool.conn.transaction()?;
    for r in rows {
        insert_sample(&tx, r)?;
    }
    tx.commit()?;
    Ok(rows.len())
}

/// Insert, or replace every field of the row holding the same `sampleid`.
pub fn upsert_sample(conn: &Connection, r: &SampleRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO pas_tracking (sample_start, sample_end, sampleid, kitid, samplerid, siteid,
                                   shipped_location, shipped_date, return_date, sample_type, note,
                                   screen_sampling_rate)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
         ON CONFLICT(sampleid) DO UPDATE SET
            sample_start = excluded.sample_start,
            sample_end = excluded.sample_end,
            kitid = excluded.kitid,
            samplerid = excluded.samplerid,
            siteid = excluded.siteid,
            shipped_location = excluded.shipped_location,
            shipped_date = excluded.shipped_date,
            return_date = excluded.return_date,
            sample_type = excluded.sample_type,
            note = excluded.note,
            screen_sampling_rate = excluded.screen_sampling_rate",
        params![
            r.sample_start,
            r.sample_end,
            r.sampleid,
            r.kitid,
            r.samplerid,
            r.siteid,
            r.shipped_location,
            r.shipped_date,
            r.return_date,
            r.sample_type.map(|t| t.to_db_str()),
            r.note,
            r.screen_sampling_rate,
        ],
    )?;
    Ok(())
}

/// Remove the row with this identifier. Returns the number of rows deleted.
pub fn delete_sample(conn: &Connection, sampleid: &str) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM pas_tracking WHERE sampleid = ?1", [sampleid])?)
}

/// Counts of a committed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub inserted: usize,
    pub updated: usize,
}

/// Write a reconciled batch in a single transaction.
///
/// Renamed rows first retire their old identifier, then every row is upserted
/// on `sampleid`. Either the whole batch lands or nothing does.
pub fn write_batch(pool: &mut DbPool, writes: &[PlannedWrite], operation: &str) -> AppResult<BatchResult> {
    let user = pool.user.clone();
    let tx = pool.conn.transaction()?;

    for w in writes {
        if let Some(old) = w.renamed_from() {
            delete_sample(&tx, old)?;
            audit(
                &tx,
                &user,
                operation,
                old,
                &format!("Renamed to {}", w.record.sampleid),
            )?;
        }
    }

    let mut result = BatchResult::default();
    for w in writes {
        let existed: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM pas_tracking WHERE sampleid = ?1)",
            [&w.record.sampleid],
            |row| row.get(0),
        )?;
        upsert_sample(&tx, &w.record)?;
        if existed {
            result.updated += 1;
        } else {
            result.inserted += 1;
        }
        audit(
            &tx,
            &user,
            operation,
            &w.record.sampleid,
            if existed { "Updated sample" } else { "Inserted sample" },
        )?;
    }

    tx.commit()?;
    Ok(result)
}

/// Bulk read of any table by name, rows as JSON objects.
pub fn read_table(conn: &Connection, table: &str) -> AppResult<Vec<Map<String, Value>>> {
    if !IDENT_RE.is_match(table) {
        return Err(AppError::InvalidTable(table.to_string()));
    }
    let known: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type IN ('table','view') AND name = ?1)",
        [table],
        |row| row.get(0),
    )?;
    if !known {
        return Err(AppError::InvalidTable(table.to_string()));
    }

    let mut stmt = conn.prepare(&format!("SELECT * FROM \"{table}\""))?;
    let names: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let mut rows = stmt.query([])?;

    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut obj = Map::new();
        for (i, name) in names.iter().enumerate() {
            obj.insert(name.clone(), json_value(row.get_ref(i)?));
        }
        out.push(obj);
    }
    Ok(out)
}

fn json_value(v: ValueRef<'_>) -> Value {
    match v {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Value::from(f),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::String(format!("<{} bytes>", b.len())),
    }
}
