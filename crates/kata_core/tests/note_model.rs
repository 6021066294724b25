use chrono::Local;
use kata_core::{NoteError, NoteService};

#[test]
fn add_note_assigns_positive_increasing_ids() {
    let mut service = NoteService::new();

    let first = service
        .add_note(Some("Первая заметка"), Some("Текст первой заметки"), None)
        .unwrap();
    let second = service.add_note(Some("Вторая"), Some("Текст"), None).unwrap();

    assert_eq!(first.id(), 1);
    assert_eq!(second.id(), 2);
    assert_eq!(first.title(), "Первая заметка");
    assert_eq!(first.text(), "Текст первой заметки");
    assert_eq!(first.creation_date(), Local::now().date_naive());
    assert_eq!(service.len(), 2);
}

#[test]
fn add_note_rejects_absent_title_or_text() {
    let mut service = NoteService::new();

    let err = service.add_note(None, None, None).unwrap_err();
    assert!(matches!(err, NoteError::InvalidArgument(_)));
    assert!(service.add_note(Some("title"), None, None).is_err());
    assert!(service.add_note(None, Some("text"), None).is_err());
    assert!(service.is_empty());
}

#[test]
fn ids_are_never_reused_after_delete() {
    let mut service = NoteService::new();
    let first = service.add_note(Some("a"), Some("a"), None).unwrap();
    let second = service.add_note(Some("b"), Some("b"), None).unwrap();

    assert!(service.delete_note(second.id()));
    assert!(service.delete_note(first.id()));

    let third = service.add_note(Some("c"), Some("c"), None).unwrap();
    assert_eq!(third.id(), 3);
}

#[test]
fn get_note_by_id_returns_none_for_missing_or_deleted() {
    let mut service = NoteService::new();
    let note = service
        .add_note(Some("title"), Some("text"), Some(&["java", "test"]))
        .unwrap();

    assert_eq!(service.get_note_by_id(note.id()), Some(&note));
    assert!(service.get_note_by_id(5).is_none());

    assert!(service.delete_note(note.id()));
    assert!(service.get_note_by_id(note.id()).is_none());
    assert!(!service.delete_note(note.id()));
}

#[test]
fn get_all_notes_returns_snapshot_in_id_order() {
    let mut service = NoteService::new();
    let first = service.add_note(Some("one"), Some("1"), None).unwrap();
    let second = service.add_note(Some("two"), Some("2"), None).unwrap();

    let snapshot = service.get_all_notes();
    assert_eq!(snapshot, vec![first.clone(), second]);

    service.update_note_text(first.id(), Some("changed"), Some("changed")).unwrap();
    assert_eq!(snapshot[0].title(), "one");
    assert_eq!(service.get_note_by_id(first.id()).unwrap().title(), "changed");
}

#[test]
fn update_note_text_replaces_title_and_text() {
    let mut service = NoteService::new();
    let note = service.add_note(Some("old"), Some("old body"), None).unwrap();

    let updated = service
        .update_note_text(note.id(), Some("new"), Some("new body"))
        .unwrap();
    assert!(updated);

    let stored = service.get_note_by_id(note.id()).unwrap();
    assert_eq!(stored.title(), "new");
    assert_eq!(stored.text(), "new body");
    assert_eq!(stored.creation_date(), note.creation_date());
}

#[test]
fn update_note_text_reports_missing_note_and_absent_values() {
    let mut service = NoteService::new();
    let note = service.add_note(Some("title"), Some("text"), None).unwrap();

    assert!(!service.update_note_text(42, Some("x"), Some("y")).unwrap());

    let err = service
        .update_note_text(note.id(), None, Some("y"))
        .unwrap_err();
    assert!(matches!(err, NoteError::InvalidArgument(_)));
}

#[test]
fn note_serializes_with_expected_wire_fields() {
    let mut service = NoteService::new();
    let note = service
        .add_note(Some("Note A"), Some("hello world"), Some(&["Zeta", "alpha"]))
        .unwrap();

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Note A");
    assert_eq!(json["text"], "hello world");
    assert_eq!(
        json["creation_date"],
        note.creation_date().format("%Y-%m-%d").to_string()
    );
    assert_eq!(json["tags"], serde_json::json!(["alpha", "zeta"]));
}
