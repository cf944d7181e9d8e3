use sampletrack::core::edit::EditLogic;
use sampletrack::core::reconcile::plan_upload;
use sampletrack::core::session::Session;
use sampletrack::errors::AppError;
use sampletrack::models::sample::SampleRecord;
use sampletrack::models::sample_type::SampleType;
use sampletrack::ui::feedback::Level;
use std::collections::HashSet;

fn session() -> Session {
    let mut s = Session::default();
    let mut row = SampleRecord::new("EC-0001", "ECCC0001", Some(SampleType::Sample));
    row.sample_start = Some("2025-01-10 08:00".into());
    s.replace(vec![row, SampleRecord::new("EC-0001", "ECCC0002", None)]);
    s
}

fn edit(s: &mut Session, row: usize, field: &str, value: Option<&str>) -> (String, Level) {
    let reply = EditLogic::apply(s, row, field, value.map(str::to_string)).unwrap();
    let fb = reply.feedback.unwrap();
    (fb.text, fb.level)
}

#[test]
fn bad_timestamp_is_reverted_with_message() {
    let mut s = session();
    let (msg, level) = edit(&mut s, 0, "sample_start", Some("2025-01-10"));
    assert_eq!(
        msg,
        "Invalid datetime format for Sample Start at Row 1. Expected format: YYYY-MM-DD HH:MM."
    );
    assert_eq!(level, Level::Error);
    assert_eq!(s.buffer[0].sample_start.as_deref(), Some("2025-01-10 08:00"));
}

#[test]
fn valid_change_reports_old_and_new_value() {
    let mut s = session();
    let (msg, level) = edit(&mut s, 0, "sample_start", Some("2025-01-11 09:15"));
    assert_eq!(
        msg,
        "Sample Start at Row 1, changed from '2025-01-10 08:00' to '2025-01-11 09:15'."
    );
    assert_eq!(level, Level::Success);
    assert_eq!(s.buffer[0].sample_start.as_deref(), Some("2025-01-11 09:15"));
}

#[test]
fn empty_or_placeholder_clears_the_cell() {
    let mut s = session();
    let (msg, _) = edit(&mut s, 0, "sample_start", Some("YYYY-MM-DD HH:MM"));
    assert_eq!(msg, "Sample Start at Row 1, value cleared.");
    assert_eq!(s.buffer[0].sample_start, None);

    let (msg, _) = edit(&mut s, 1, "note", Some("   "));
    assert_eq!(msg, "Note at Row 2, value cleared.");
}

#[test]
fn sampler_change_updates_sample_id() {
    let mut s = session();
    let (msg, _) = edit(&mut s, 1, "samplerid", Some("ECCC0099"));
    assert_eq!(
        msg,
        "Sampler ID at Row 2, changed from 'ECCC0002' to 'ECCC0099'. Sample ID updated to 'EC-0001_ECCC0099'."
    );
    assert_eq!(s.buffer[1].sampleid, "EC-0001_ECCC0099");
    // the other row is untouched
    assert_eq!(s.buffer[0].sampleid, "EC-0001_ECCC0001");
}

#[test]
fn kit_change_updates_sample_id() {
    let mut s = session();
    let (msg, _) = edit(&mut s, 0, "kitid", Some("EC-0100"));
    assert!(msg.ends_with("Sample ID updated to 'EC-0100_ECCC0001'."));
    assert_eq!(s.buffer[0].kitid, "EC-0100");
}

#[test]
fn malformed_ids_dates_and_types_are_rejected() {
    let mut s = session();

    let (msg, level) = edit(&mut s, 0, "kitid", Some("EC-1"));
    assert_eq!(level, Level::Error);
    assert!(msg.contains("EC-####"));
    assert_eq!(s.buffer[0].kitid, "EC-0001");

    let (_, level) = edit(&mut s, 0, "samplerid", Some("XXXX0001"));
    assert_eq!(level, Level::Error);
    assert_eq!(s.buffer[0].samplerid, "ECCC0001");

    let (msg, level) = edit(&mut s, 0, "return_date", Some("2025-02-30"));
    assert_eq!(level, Level::Error);
    assert_eq!(
        msg,
        "Invalid date format for Return Date at Row 1. Expected format: YYYY-MM-DD."
    );

    let (_, level) = edit(&mut s, 0, "sample_type", Some("Field"));
    assert_eq!(level, Level::Error);
    assert_eq!(s.buffer[0].sample_type, Some(SampleType::Sample));

    let (_, level) = edit(&mut s, 0, "sample_type", Some("blank"));
    assert_eq!(level, Level::Success);
    assert_eq!(s.buffer[0].sample_type, Some(SampleType::Blank));
}

#[test]
fn unknown_cell_is_a_request_error() {
    let mut s = session();
    assert!(matches!(
        EditLogic::apply(&mut s, 0, "colour", Some("red".into())),
        Err(AppError::UnknownColumn(_))
    ));
    assert!(matches!(
        EditLogic::apply(&mut s, 0, "sampleid", Some("x".into())),
        Err(AppError::UnknownColumn(_))
    ));
    assert!(matches!(
        EditLogic::apply(&mut s, 7, "note", Some("x".into())),
        Err(AppError::InvalidRow(8))
    ));
}

#[test]
fn kit_id_cannot_be_cleared() {
    let mut s = session();
    for value in [None, Some(""), Some("   ")] {
        let (msg, level) = edit(&mut s, 0, "kitid", value);
        assert_eq!(msg, "Invalid Kit ID format at Row 1. Expected EC-####.");
        assert_eq!(level, Level::Error);
        assert_eq!(s.buffer[0].kitid, "EC-0001");
        assert_eq!(s.buffer[0].sampleid, "EC-0001_ECCC0001");
    }
}

#[test]
fn clearing_the_sampler_keeps_the_kit() {
    let mut s = session();
    let (msg, level) = edit(&mut s, 1, "samplerid", None);
    assert_eq!(
        msg,
        "Sampler ID at Row 2, value cleared. Sample ID updated to 'EC-0001_'."
    );
    assert_eq!(level, Level::Success);
    assert_eq!(s.buffer[1].kitid, "EC-0001");
}

#[test]
fn accepted_edit_drops_a_held_overwrite() {
    let mut s = session();
    s.pending = Some(plan_upload(&s.buffer, &HashSet::new()));

    // a rejected value changes nothing, so the held batch stays
    edit(&mut s, 0, "sample_start", Some("soon"));
    assert!(s.pending.is_some());

    edit(&mut s, 1, "note", Some("moved"));
    assert!(s.pending.is_none());
}
