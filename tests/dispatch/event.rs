//! Tests for `Event` construction, attachment data and control flags.

use bubbling_events::{Event, EventError, EventOptions};
use serde_json::{json, Map};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn new_event_has_defaults() {
    let event = Event::new("tap", EventOptions::default()).unwrap();

    assert_eq!(event.event_type(), "tap");
    assert!(!event.bubbles());
    assert!(event.target().is_none());
    assert!(event.current_target().is_none());
    assert!(event.path().is_empty());
    assert!(event.attachment().is_empty());
    assert!(!event.is_queue_stopped());
    assert!(!event.is_bubbling_stopped());
}

#[test]
fn bubbles_option_is_carried() {
    let event = Event::new("tap", EventOptions::bubbling()).unwrap();
    assert!(event.bubbles());
}

#[test]
fn empty_type_is_invalid_argument() {
    let err = Event::new("", EventOptions::default()).unwrap_err();
    assert!(matches!(err, EventError::InvalidArgument(_)));
}

#[test]
fn with_data_merges_attachment() {
    let mut data = Map::new();
    data.insert("x".to_string(), json!(3));
    data.insert("label".to_string(), json!("ok"));

    let event = Event::with_data("tap", data, EventOptions::default()).unwrap();

    assert_eq!(event.get("x"), Some(&json!(3)));
    assert_eq!(event.get("label"), Some(&json!("ok")));
}

#[test]
fn from_value_splits_type_from_extra_fields() {
    let event = Event::from_value(
        json!({ "type": "tap", "x": 1, "y": [1, 2] }),
        EventOptions::bubbling(),
    )
    .unwrap();

    assert_eq!(event.event_type(), "tap");
    assert!(event.bubbles());
    assert_eq!(event.get("x"), Some(&json!(1)));
    assert_eq!(event.get("y"), Some(&json!([1, 2])));
    assert!(event.get("type").is_none(), "type should not be attachment data");
}

#[test]
fn from_value_rejects_non_string_type() {
    let err = Event::from_value(json!({ "type": 42 }), EventOptions::default()).unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, EventError::InvalidArgument(_)));
    assert!(msg.contains("number"), "received kind missing: {msg}");
}

#[test]
fn from_value_rejects_missing_or_empty_type() {
    let missing = Event::from_value(json!({ "x": 1 }), EventOptions::default());
    assert!(matches!(missing, Err(EventError::InvalidArgument(_))));

    let empty = Event::from_value(json!({ "type": "" }), EventOptions::default());
    assert!(matches!(empty, Err(EventError::InvalidArgument(_))));
}

#[test]
fn from_value_rejects_non_object() {
    let err = Event::from_value(json!("tap"), EventOptions::default()).unwrap_err();
    assert!(matches!(err, EventError::InvalidArgument(_)));
}

// ============================================================================
// Attachment data
// ============================================================================

#[test]
fn attachment_is_mutable() {
    let mut event = Event::new("tap", EventOptions::default())
        .unwrap()
        .with("count", 1);

    assert_eq!(event.set("count", 2), Some(json!(1)));
    event.attachment_mut().insert("extra".to_string(), json!(true));

    assert_eq!(event.get("count"), Some(&json!(2)));
    assert_eq!(event.remove("extra"), Some(json!(true)));
    assert_eq!(event.attachment().len(), 1);
}

// ============================================================================
// Control flags
// ============================================================================

#[test]
fn stop_queue_and_stop_bubbling_set_independent_flags() {
    let mut event = Event::new("tap", EventOptions::bubbling()).unwrap();

    event.stop_queue();
    assert!(event.is_queue_stopped());
    assert!(!event.is_bubbling_stopped());

    event.stop_bubbling();
    assert!(event.is_bubbling_stopped());
}
