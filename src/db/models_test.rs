//! Tests for domain models.

use serde_json::{Value, json};

use crate::db::Note;

#[test]
fn note_serializes_with_wire_field_names() {
    let note = Note {
        id: 1,
        title: "Groceries".to_string(),
        body: "milk, eggs".to_string(),
        created_at: "2025-01-01T00:00:00.000000Z".to_string(),
        updated_at: "2025-01-02T00:00:00.000000Z".to_string(),
    };

    let value = serde_json::to_value(&note).expect("Serialization should succeed");
    assert_eq!(
        value,
        json!({
            "id": 1,
            "title": "Groceries",
            "body": "milk, eggs",
            "created_at": "2025-01-01T00:00:00.000000Z",
            "updated_at": "2025-01-02T00:00:00.000000Z",
        })
    );
}

#[test]
fn note_roundtrips_through_json() {
    let note = Note {
        id: 42,
        title: "Title".to_string(),
        body: String::new(),
        created_at: "2025-06-01T12:00:00.000000Z".to_string(),
        updated_at: "2025-06-01T12:00:00.000000Z".to_string(),
    };

    let text = serde_json::to_string(&note).unwrap();
    let back: Note = serde_json::from_str(&text).unwrap();
    assert_eq!(back, note);

    let value: Value = serde_json::from_str(&text).unwrap();
    assert!(value["body"].is_string());
}
