mod common;

use common::{Workspace, stored};
use sampletrack::core::export::ExportLogic;
use sampletrack::db::pool::{Role, Schema};
use sampletrack::db::queries::{insert_samples, read_table};
use sampletrack::export::csv::read_csv;
use sampletrack::export::{HEADERS, SampleExport, file_name};
use sampletrack::models::sample_type::SampleType;
use chrono::{Local, TimeZone};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;

fn seeded(ws: &Workspace) -> sampletrack::db::pool::Databases {
    let dbs = ws.init();
    let mut pool = dbs.open(Schema::Project, Role::Editor).unwrap();

    let mut a = stored("EC-0001", "ECCC0001", "2025-01-01 10:00:00");
    a.note = Some("lid, \"loose\"".into());
    a.screen_sampling_rate = Some(0.135);
    a.siteid = Some("SITE01".into());
    let mut b = stored("EC-0001", "ECCC0002", "2025-01-01 10:00:00");
    b.sample_type = Some(SampleType::Blank);
    b.return_date = Some("2025-02-01 00:00:00".into());
    let c = stored("EC-0002", "ECCC0003", "2025-02-10 08:15:00");
    insert_samples(&mut pool, &[a, b, c]).unwrap();
    dbs
}

/// (sampleid, column, value) triples, empty cells left out.
fn pairs_from_table(rows: &[serde_json::Map<String, Value>]) -> BTreeSet<(String, String, String)> {
    let mut out = BTreeSet::new();
    for row in rows {
        let id = row["sampleid"].as_str().unwrap().to_string();
        for (col, v) in row {
            let text = match v {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            out.insert((id.clone(), col.clone(), text));
        }
    }
    out
}

fn pairs_from_csv(rows: &[SampleExport]) -> BTreeSet<(String, String, String)> {
    let rows: Vec<serde_json::Map<String, Value>> = rows
        .iter()
        .map(|r| match serde_json::to_value(r).unwrap() {
            Value::Object(m) => m,
            _ => unreachable!(),
        })
        .collect();
    pairs_from_table(&rows)
}

#[test]
fn csv_round_trip_reproduces_the_table() {
    let ws = Workspace::new();
    let dbs = seeded(&ws);
    let pool = dbs.open(Schema::Project, Role::Viewer).unwrap();

    let (name, body) = ExportLogic::to_bytes(&pool.conn).unwrap();
    assert!(name.starts_with("pas_tracking_") && name.ends_with(".csv"));

    let text = String::from_utf8(body.clone()).unwrap();
    assert_eq!(text.lines().next().unwrap(), HEADERS.join(","));

    let reread = read_csv(body.as_slice()).unwrap();
    assert_eq!(reread.len(), 3);

    let table = read_table(&pool.conn, "pas_tracking").unwrap();
    assert_eq!(pairs_from_csv(&reread), pairs_from_table(&table));
}

#[test]
fn empty_table_exports_a_header_only() {
    let ws = Workspace::new();
    let dbs = ws.init();
    let pool = dbs.open(Schema::Project, Role::Viewer).unwrap();

    let (_, body) = ExportLogic::to_bytes(&pool.conn).unwrap();
    let text = String::from_utf8(body).unwrap();
    assert_eq!(text.trim_end(), HEADERS.join(","));
}

#[test]
fn file_name_is_stamped_to_the_second() {
    let when = Local.with_ymd_and_hms(2025, 7, 4, 13, 5, 9).unwrap();
    assert_eq!(file_name(when), "pas_tracking_2025-07-04_13-05-09.csv");
}

#[test]
fn export_to_directory_and_refuse_overwrite() {
    let ws = Workspace::new();
    let dbs = seeded(&ws);
    let pool = dbs.open(Schema::Project, Role::Viewer).unwrap();

    let written = ExportLogic::to_path(&pool.conn, Some(ws.path()), false).unwrap();
    assert_eq!(written.parent().unwrap(), ws.path());
    let reread = read_csv(fs::File::open(&written).unwrap()).unwrap();
    assert_eq!(reread.len(), 3);

    let target = ws.path().join("dump.csv");
    fs::write(&target, "old").unwrap();
    assert!(ExportLogic::to_path(&pool.conn, Some(&target), false).is_err());
    ExportLogic::to_path(&pool.conn, Some(&target), true).unwrap();
    assert!(fs::read_to_string(&target).unwrap().starts_with("sample_start,"));
}
