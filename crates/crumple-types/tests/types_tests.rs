//! Integration tests for crumple-types.

use crumple_types::{AnchorId, CrumpleError};

#[test]
fn anchor_id_index() {
    let id = AnchorId(7);
    assert_eq!(id.index(), 7);
    assert_eq!(id.to_string(), "anchor#7");
}

#[test]
fn anchor_id_from_raw() {
    let a: AnchorId = 3u32.into();
    assert_eq!(a, AnchorId(3));
}

#[test]
fn anchor_id_covers_large_anchor_lists() {
    let id = AnchorId::from(70_000u32);
    assert_eq!(id.index(), 70_000);
    assert_eq!(id.to_string(), "anchor#70000");
}

#[test]
fn error_display() {
    let err = CrumpleError::InvalidConfig("smoothness must be positive".into());
    assert!(err.to_string().contains("smoothness must be positive"));

    let err = CrumpleError::VertexCountMismatch {
        expected: 8,
        actual: 9,
    };
    let msg = err.to_string();
    assert!(msg.contains('8'));
    assert!(msg.contains('9'));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: CrumpleError = io.into();
    assert!(matches!(err, CrumpleError::Io(_)));
}

#[test]
fn id_serialization() {
    let id = AnchorId(99);
    let json = serde_json::to_string(&id).unwrap();
    let recovered: AnchorId = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, id);
}
