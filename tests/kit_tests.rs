use sampletrack::core::kit::{KitDraft, KitEntry, NewKitLogic};
use sampletrack::core::reply::Modal;
use sampletrack::core::session::Session;
use sampletrack::models::sample_type::SampleType;
use sampletrack::ui::feedback::Level;

fn entry(index: u32, sampler: &str) -> KitEntry {
    KitEntry {
        index,
        sampler_id: sampler.into(),
        sample_type: None,
    }
}

#[test]
fn draft_starts_with_one_blank_entry() {
    let draft = KitDraft::default();
    assert_eq!(draft.entries, vec![KitEntry::blank(1)]);
}

#[test]
fn complete_last_entry_appends_a_blank_line_once() {
    let mut draft = KitDraft::default();

    draft.update(vec![entry(1, "ECCC000")]);
    assert_eq!(draft.entries.len(), 1);

    draft.update(vec![entry(1, "ECCC0001")]);
    assert_eq!(draft.entries.len(), 2);
    assert_eq!(draft.entries[1], KitEntry::blank(2));

    // same input again: index 2 already present
    let current = draft.entries.clone();
    draft.update(current);
    assert_eq!(draft.entries.len(), 2);

    draft.update(vec![entry(1, "ECCC0001"), entry(2, "ECCC0002")]);
    assert_eq!(draft.entries.len(), 3);
    assert_eq!(draft.entries[2].index, 3);
}

#[test]
fn entries_are_removed_by_index() {
    let mut draft = KitDraft::default();
    draft.update(vec![entry(1, "ECCC0001"), entry(2, "ECCC0002")]);
    draft.remove(2);
    assert!(draft.entries.iter().all(|e| e.index != 2));
    draft.remove(42);
    assert_eq!(draft.entries.len(), 2);
}

#[test]
fn invalid_kit_id_keeps_modal_open() {
    let mut session = Session::default();
    session.draft.update(vec![entry(1, "ECCC0001")]);

    let reply = NewKitLogic::apply(&mut session, "EC-12");
    let fb = reply.feedback.unwrap();
    assert_eq!(fb.text, "Invalid Kit ID format. Expected EC-####.");
    assert_eq!(fb.level, Level::Error);
    assert!(matches!(reply.modal, Modal::NewKit { .. }));
    assert!(session.buffer.is_empty());
}

#[test]
fn invalid_samplers_are_listed() {
    let mut session = Session::default();
    session.draft.update(vec![
        entry(1, "ECCC0001"),
        entry(2, "ECC0002"),
        entry(3, "bad"),
    ]);

    let reply = NewKitLogic::apply(&mut session, "EC-0001");
    assert_eq!(
        reply.feedback.unwrap().text,
        "Invalid Sample ID(s): ECC0002, bad. Expected ECCC####."
    );
    assert!(session.buffer.is_empty());
}

#[test]
fn at_least_one_sampler_is_required() {
    let mut session = Session::default();
    let reply = NewKitLogic::apply(&mut session, "EC-0001");
    assert!(reply.feedback.unwrap().is_error());
    assert!(session.buffer.is_empty());
}

#[test]
fn done_builds_one_row_per_sampler() {
    let mut session = Session::default();
    session.draft.update(vec![
        KitEntry {
            index: 1,
            sampler_id: "ECCC0001".into(),
            sample_type: Some(SampleType::Sample),
        },
        KitEntry {
            index: 2,
            sampler_id: "ECCC0002".into(),
            sample_type: Some(SampleType::Blank),
        },
    ]);

    let reply = NewKitLogic::apply(&mut session, "EC-0007");
    assert!(reply.feedback.is_none());
    assert_eq!(reply.modal, Modal::Closed);
    assert!(reply.show_upload);

    let ids: Vec<&str> = session.buffer.iter().map(|r| r.sampleid.as_str()).collect();
    assert_eq!(ids, ["EC-0007_ECCC0001", "EC-0007_ECCC0002"]);
    assert_eq!(session.buffer[1].sample_type, Some(SampleType::Blank));
    assert!(session.buffer.iter().all(|r| !r.is_persisted()));

    // draft is fresh for the next kit
    assert_eq!(session.draft.entries, vec![KitEntry::blank(1)]);
}
