mod common;

use common::{Workspace, stored};
use sampletrack::core::reconcile::plan_upload;
use sampletrack::db::log::load_log;
use sampletrack::db::pool::{Role, Schema};
use sampletrack::db::queries::{
    Filter, count_samples, existing_sampleids, insert_sample, insert_samples, latest_kit_for_sampler,
    load_samples, load_samples_by, read_table, shipped_locations, write_batch,
};
use sampletrack::db::reference::load_sites;
use sampletrack::errors::AppError;
use std::collections::HashSet;

#[test]
fn migrations_run_once() {
    let ws = Workspace::new();
    let dbs = ws.init();
    dbs.ensure_created().unwrap();
    dbs.ensure_created().unwrap();

    let pool = dbs.open(Schema::Project, Role::Viewer).unwrap();
    let applied = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation == "migration_applied")
        .count();
    assert_eq!(applied, 2);
}

#[test]
fn sample_ids_are_unique_in_the_table() {
    let ws = Workspace::new();
    let dbs = ws.init();
    let pool = dbs.open(Schema::Project, Role::Editor).unwrap();

    let row = stored("EC-0001", "ECCC0001", "2025-01-01 10:00:00");
    insert_sample(&pool.conn, &row).unwrap();
    assert!(matches!(insert_sample(&pool.conn, &row), Err(AppError::Db(_))));
    assert_eq!(count_samples(&pool.conn).unwrap(), 1);
}

#[test]
fn viewer_connections_cannot_write() {
    let ws = Workspace::new();
    let dbs = ws.init();
    let pool = dbs.open(Schema::Project, Role::Viewer).unwrap();
    let row = stored("EC-0001", "ECCC0001", "2025-01-01 10:00:00");
    assert!(insert_sample(&pool.conn, &row).is_err());
}

#[test]
fn batch_write_upserts_and_audits() {
    let ws = Workspace::new();
    let dbs = ws.init();

    let rows = vec![
        stored("EC-0001", "ECCC0001", "2025-01-01 10:00:00"),
        stored("EC-0001", "ECCC0002", "2025-01-01 10:00:00"),
    ];
    let mut pool = dbs.open(Schema::Project, Role::Editor).unwrap();
    let plan = plan_upload(&rows, &HashSet::new());
    let result = write_batch(&mut pool, &plan.writes, "upload").unwrap();
    assert_eq!((result.inserted, result.updated), (2, 0));

    // reload, change a note, write again: an update keyed on the same id
    let mut loaded = load_samples(&pool.conn).unwrap();
    loaded[0].note = Some("cracked housing".into());
    let existing = existing_sampleids(&pool.conn).unwrap();
    let plan = plan_upload(&loaded, &existing);
    assert!(!plan.is_blocked());
    let result = write_batch(&mut pool, &plan.writes, "upload").unwrap();
    assert_eq!((result.inserted, result.updated), (0, 2));

    let after = load_samples(&pool.conn).unwrap();
    assert_eq!(after.len(), 2);
    assert_eq!(after[0].note.as_deref(), Some("cracked housing"));

    let log = load_log(&pool.conn).unwrap();
    let uploads: Vec<_> = log.iter().filter(|e| e.operation == "upload").collect();
    assert_eq!(uploads.len(), 4);
    assert!(uploads.iter().all(|e| e.user == "editor"));
}

#[test]
fn renamed_row_replaces_its_old_identifier() {
    let ws = Workspace::new();
    let dbs = ws.init();
    let mut pool = dbs.open(Schema::Project, Role::Editor).unwrap();
    insert_samples(
        &mut pool,
        &[
            stored("EC-0001", "ECCC0001", "2025-01-01 10:00:00"),
            stored("EC-0001", "ECCC0002", "2025-01-01 10:00:00"),
        ],
    )
    .unwrap();

    let mut rows = load_samples(&pool.conn).unwrap();
    rows[0].samplerid = "ECCC0003".into();
    rows[0].refresh_sampleid();

    let plan = plan_upload(&rows, &existing_sampleids(&pool.conn).unwrap());
    write_batch(&mut pool, &plan.writes, "upload").unwrap();

    let ids = existing_sampleids(&pool.conn).unwrap();
    let expected: HashSet<String> = ["EC-0001_ECCC0003", "EC-0001_ECCC0002"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(ids, expected);
}

#[test]
fn filtered_reads_match_case_insensitively() {
    let ws = Workspace::new();
    let dbs = ws.init();
    let mut pool = dbs.open(Schema::Project, Role::Editor).unwrap();

    let mut a = stored("EC-0001", "ECCC0001", "2025-01-01 10:00:00");
    a.shipped_location = Some("Winnipeg Lab".into());
    let mut b = stored("EC-0002", "ECCC0001", "2025-03-01 10:00:00");
    b.shipped_location = Some("  winnipeg lab ".into());
    let c = stored("EC-0002", "ECCC0002", "2025-03-01 10:00:00");
    insert_samples(&mut pool, &[a, b, c]).unwrap();

    let by_loc = load_samples_by(&pool.conn, Filter::ShippedLocation, "WINNIPEG LAB").unwrap();
    assert_eq!(by_loc.len(), 2);

    let by_kit = load_samples_by(&pool.conn, Filter::KitId, "ec-0002").unwrap();
    assert_eq!(by_kit.len(), 2);
    assert!(by_kit.iter().all(|r| r.original_sampleid.as_deref() == Some(r.sampleid.as_str())));

    assert_eq!(
        latest_kit_for_sampler(&pool.conn, "ECCC0001").unwrap().as_deref(),
        Some("EC-0002")
    );
    assert_eq!(latest_kit_for_sampler(&pool.conn, "ECCC0404").unwrap(), None);

    let locations = shipped_locations(&pool.conn).unwrap();
    assert_eq!(locations.len(), 2);
}

#[test]
fn generic_table_read_checks_the_name() {
    let ws = Workspace::new();
    let dbs = ws.init();
    let mut pool = dbs.open(Schema::Project, Role::Editor).unwrap();
    insert_samples(&mut pool, &[stored("EC-0001", "ECCC0001", "2025-01-01 10:00:00")]).unwrap();

    let rows = read_table(&pool.conn, "pas_tracking").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["sampleid"], "EC-0001_ECCC0001");

    assert!(matches!(
        read_table(&pool.conn, "pas_tracking; DROP TABLE log"),
        Err(AppError::InvalidTable(_))
    ));
    assert!(matches!(
        read_table(&pool.conn, "missing"),
        Err(AppError::InvalidTable(_))
    ));
}

#[test]
fn sites_are_filtered_by_project_and_sorted() {
    let ws = Workspace::new();
    let dbs = ws.init();
    let pool = dbs.open(Schema::Reference, Role::Viewer).unwrap();

    let catalog = load_sites(&pool.conn, "MERCURY_PASSIVE").unwrap();
    assert_eq!(catalog.labels(), ["Bay Beta (SITE02)", "Lake Alpha (SITE01)"]);
    assert_eq!(catalog.id_for("Lake Alpha (SITE01)"), "SITE01");
    assert_eq!(catalog.id_for("free text"), "free text");
    assert_eq!(catalog.label_for("SITE02"), "Bay Beta (SITE02)");

    assert!(load_sites(&pool.conn, "OTHER").unwrap().sites().is_empty());
}
