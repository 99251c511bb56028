use super::*;
use serde_json::json;
use std::str::FromStr;

#[test]
fn test_as_str_round_trips_through_from_str() {
    for kind in EventKind::ALL {
        assert_eq!(EventKind::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn test_from_str_rejects_unknown_and_wrong_case() {
    assert!(EventKind::from_str("bogus").is_err());
    assert!(EventKind::from_str("istyping").is_err());
    assert!(EventKind::from_str("").is_err());
}

#[test]
fn test_serde_uses_wire_tags() {
    assert_eq!(
        serde_json::to_value(EventKind::MessageStatus).unwrap(),
        json!("messageStatus")
    );
    let kind: EventKind = serde_json::from_value(json!("newUser")).unwrap();
    assert_eq!(kind, EventKind::NewUser);
}

#[test]
fn test_display_matches_wire_tag() {
    assert_eq!(EventKind::IsTyping.to_string(), "isTyping");
}

fn event(body: serde_json::Value) -> InboundEvent {
    let serde_json::Value::Object(map) = body else {
        panic!("test body must be an object");
    };
    InboundEvent::new(EventKind::Message, map)
}

#[test]
fn test_message_contact_extracts_both_fields() {
    let ev = event(json!({
        "event": "message",
        "messageContact": {"userContact": "+14155550100", "chatId": "chat-1"}
    }));
    let contact = ev.message_contact().unwrap();
    assert_eq!(contact.user_contact.as_deref(), Some("+14155550100"));
    assert_eq!(contact.chat_id.as_deref(), Some("chat-1"));
}

#[test]
fn test_message_contact_tolerates_missing_fields() {
    let ev = event(json!({"event": "message", "messageContact": {"chatId": "c"}}));
    let contact = ev.message_contact().unwrap();
    assert!(contact.user_contact.is_none());
    assert_eq!(contact.chat_id.as_deref(), Some("c"));

    let ev = event(json!({"event": "message"}));
    assert!(ev.message_contact().is_none());
}

#[test]
fn test_text_message() {
    let ev = event(json!({
        "event": "message",
        "RCSMessage": {"textMessage": "hello"}
    }));
    assert_eq!(ev.text_message(), Some("hello"));

    let ev = event(json!({"event": "message", "RCSMessage": {"fileMessage": {}}}));
    assert_eq!(ev.text_message(), None);
}

#[test]
fn test_into_body_keeps_everything() {
    let ev = event(json!({"event": "message", "extra": 1}));
    let body = ev.into_body();
    assert_eq!(body.get("extra"), Some(&json!(1)));
    assert_eq!(body.len(), 2);
}
