use sampletrack::core::edit::EditLogic;
use sampletrack::core::session::SessionStore;
use sampletrack::errors::AppError;
use sampletrack::models::sample::SampleRecord;
use std::time::Duration;
use uuid::Uuid;

#[actix_web::test]
async fn two_sessions_never_share_rows() {
    let store = SessionStore::new(Duration::from_secs(600));
    let a = store.open().await;
    let b = store.open().await;
    assert_ne!(a, b);

    {
        let slot = store.get(&a).await.unwrap();
        let mut session = slot.lock().await;
        session.replace(vec![SampleRecord::new("EC-0001", "ECCC0001", None)]);
        EditLogic::apply(&mut session, 0, "note", Some("only in A".into())).unwrap();
    }

    let slot_b = store.get(&b).await.unwrap();
    assert!(slot_b.lock().await.buffer.is_empty());

    let slot_a = store.get(&a).await.unwrap();
    assert_eq!(
        slot_a.lock().await.buffer[0].note.as_deref(),
        Some("only in A")
    );
}

#[actix_web::test]
async fn closed_and_unknown_sessions_are_not_found() {
    let store = SessionStore::new(Duration::from_secs(600));
    let id = store.open().await;
    assert_eq!(store.len().await, 1);

    assert!(store.close(&id).await);
    assert!(!store.close(&id).await);
    assert!(matches!(
        store.get(&id).await,
        Err(AppError::SessionNotFound(_))
    ));
    assert!(store.get(&Uuid::new_v4()).await.is_err());
}

#[actix_web::test]
async fn idle_sessions_are_evicted_on_open() {
    let store = SessionStore::new(Duration::from_millis(20));
    let old = store.open().await;
    std::thread::sleep(Duration::from_millis(40));

    let fresh = store.open().await;
    assert!(store.get(&old).await.is_err());
    assert!(store.get(&fresh).await.is_ok());
    assert_eq!(store.len().await, 1);
}
