//! Repository Integration Tests
//!
//! Exercises CrmRepository against the in-memory store.

use crate::config::StorageKeys;
use crate::domain::{add_lead, delete_lead, AudioClip, Bucket, NewLead, TaskBoard, VoiceNote};
use crate::repository::{CrmRepository, KeyValueStore, LocalStore, MemoryStore};

fn setup_repo() -> CrmRepository<MemoryStore> {
    CrmRepository::new(MemoryStore::new(), StorageKeys::default())
}

fn lead_input(name: &str) -> crate::domain::ValidLead {
    NewLead {
        name: name.to_string(),
        phone: "98100 00000".to_string(),
        email: String::new(),
    }
    .validate()
    .expect("valid input")
}

#[test]
fn test_empty_store_loads_defaults() {
    let repo = setup_repo();

    assert!(repo.load_leads().is_empty());
    assert!(repo.load_voices().is_empty());
    assert_eq!(repo.load_board(), TaskBoard::default());
}

#[test]
fn test_leads_round_trip() {
    let repo = setup_repo();
    let leads = add_lead(&[], lead_input("Rohini Central Mall"), 1_000);
    let leads = add_lead(&leads, lead_input("Sawasdee Heights"), 2_000);

    repo.save_leads(&leads);
    assert_eq!(repo.load_leads(), leads);

    let leads = delete_lead(&leads, "l_1000");
    repo.save_leads(&leads);
    let loaded = repo.load_leads();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Sawasdee Heights");
}

#[test]
fn test_board_round_trip() {
    let repo = setup_repo();
    let mut board = repo.load_board();
    board.add_task("Send floor plans");
    board.move_task(Bucket::Todo, Bucket::Done, 0);

    repo.save_board(&board);
    let loaded = repo.load_board();
    assert_eq!(loaded, board);
    assert_eq!(loaded.done[0], "Send floor plans");
}

#[test]
fn test_voices_round_trip() {
    let repo = setup_repo();
    let clip = AudioClip::new("audio/webm", vec![1, 2, 3, 4]);
    let voices = vec![VoiceNote::from_clip(&clip, 3, 0, 5_000)];

    repo.save_voices(&voices);
    assert_eq!(repo.load_voices(), voices);
}

#[test]
fn test_corrupt_values_fall_back_to_defaults() {
    let repo = setup_repo();
    let keys = repo.keys().clone();
    let backend = repo.backend();
    backend.set_item(&keys.leads, "{not json").unwrap();
    backend.set_item(&keys.tasks, "[1,2,3]").unwrap();
    backend.set_item(&keys.voices, r#"[{"id":"v_1"}]"#).unwrap();

    assert!(repo.load_leads().is_empty());
    assert_eq!(repo.load_board(), TaskBoard::default());
    assert!(repo.load_voices().is_empty());
}

#[test]
fn test_failed_write_keeps_last_stored_value() {
    let repo = setup_repo();
    let leads = add_lead(&[], lead_input("Kept in memory"), 1);
    repo.save_leads(&leads);

    repo.backend().set_fail_writes(true);
    let updated = add_lead(&leads, lead_input("Lost on reload"), 2);
    repo.save_leads(&updated);

    assert_eq!(repo.load_leads(), leads);

    repo.backend().set_fail_writes(false);
    repo.save_leads(&updated);
    assert_eq!(repo.load_leads(), updated);
}

#[test]
fn test_writes_replace_whole_collection() {
    let store = LocalStore::new(MemoryStore::new());
    store.write("k", &vec!["a", "b"]);
    store.write("k", &vec!["c"]);

    assert_eq!(store.backend().raw("k").as_deref(), Some(r#"["c"]"#));
    assert_eq!(store.read("k", Vec::<String>::new()), vec!["c"]);
}

#[test]
fn test_store_works_through_reference() {
    let backend = MemoryStore::new();
    let repo = CrmRepository::new(&backend, StorageKeys::with_prefix("test"));
    repo.save_board(&TaskBoard::empty());

    assert_eq!(backend.raw("test:tasks").as_deref(), Some(r#"{"Todo":[],"Doing":[],"Done":[]}"#));
}
