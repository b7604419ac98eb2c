//! End-to-end payload encoding through the public API.

use assert_matches::assert_matches;
use courier_message::{Alert, Message, MessageError, PAYLOAD_MAXIMUM_SIZE};
use courier_settings::CourierSettings;
use serde_json::{Value, json};

fn hex_token(seed: u8) -> String {
    (0..64).map(|i| char::from(b"0123456789abcdef"[(i + seed as usize) % 16])).collect()
}

#[test]
fn greeting_payload() {
    let mut message = Message::with_recipient("a".repeat(64)).unwrap();
    message.set_text("Hi");
    message.set_badge(5);
    message.set_default_sound();

    let payload = message.payload().unwrap();
    assert_eq!(payload, r#"{"aps":{"alert":"Hi","badge":5,"sound":"default"}}"#);
    assert_eq!(message.to_string(), payload);
}

#[test]
fn multi_recipient_message_encodes_once() {
    let mut message = Message::new();
    for seed in 0..3 {
        message.add_recipient(hex_token(seed)).unwrap();
    }
    message.set_alert(Alert::title_body("Deploy", "v1.2 is live"));
    message.set_custom_property("deployId", 991).unwrap();

    assert_eq!(message.recipient_count(), 3);
    assert_eq!(message.recipient(2).unwrap().as_str(), hex_token(2));
    insta::assert_snapshot!(
        message.payload().unwrap(),
        @r#"{"aps":{"alert":{"title":"Deploy","body":"v1.2 is live"}},"deployId":991}"#
    );
}

#[test]
fn custom_only_message_has_object_aps() {
    let mut message = Message::new();
    message.set_custom_property("sync", json!({"since": 0})).unwrap();
    let payload = message.payload().unwrap();
    assert!(payload.starts_with(r#"{"aps":{}"#));
    assert!(!payload.contains(r#""aps":[]"#));
}

#[test]
fn oversized_text_shrinks_to_prefix() {
    let original: String = "Ünïcödé text — ".repeat(200);
    let mut message = Message::with_recipient(hex_token(7)).unwrap();
    message.set_text(original.clone());
    message.set_badge(12);
    message.set_custom_property("thread", "ops").unwrap();

    let payload = message.payload().unwrap();
    assert!(payload.len() <= PAYLOAD_MAXIMUM_SIZE);

    let shortened = message.text().unwrap().to_string();
    assert!(shortened.len() < original.len());
    assert!(original.starts_with(&shortened));

    let parsed: Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed["aps"]["alert"], json!(shortened));
    assert_eq!(parsed["aps"]["badge"], 12);
    assert_eq!(parsed["thread"], "ops");

    // already fits: encoding again changes nothing
    assert_eq!(message.payload().unwrap(), payload);
    assert_eq!(message.text(), Some(shortened.as_str()));
}

#[test]
fn oversized_without_auto_adjust_reports_sizes() {
    let settings = CourierSettings::default();
    let mut message = Message::with_settings(&settings.message);
    message.set_auto_adjust_long_payload(false);
    message.set_text("x".repeat(PAYLOAD_MAXIMUM_SIZE));

    let err = message.payload().unwrap_err();
    assert_matches!(
        err,
        MessageError::PayloadTooLarge { size, max, adjustable: false }
            if size == PAYLOAD_MAXIMUM_SIZE + 20 && max == PAYLOAD_MAXIMUM_SIZE
    );
    assert_eq!(err.code(), "PAYLOAD_TOO_LARGE");
    assert_eq!(message.to_string(), "");
}

#[test]
fn fixed_fields_too_large_even_with_empty_text() {
    let mut message = Message::new();
    message.set_category("c".repeat(2100));
    message.set_text("");
    assert_matches!(
        message.payload(),
        Err(MessageError::PayloadTooLarge { adjustable: true, .. })
    );
}

#[test]
fn json_request_round_trip() {
    let request = json!({
        "recipients": [hex_token(3)],
        "alert": {"loc-key": "GAME_PLAY_REQUEST_FORMAT", "loc-args": ["Jenna", "Frank"]},
        "contentAvailable": true,
        "category": "GAME",
        "custom": {"gameId": "g-17"},
        "customIdentifier": 4711
    });
    let mut message = Message::from_json(&request).unwrap();
    assert_eq!(message.custom_identifier(), Some(&json!(4711)));

    let parsed: Value = serde_json::from_str(&message.payload().unwrap()).unwrap();
    assert_eq!(
        parsed,
        json!({
            "aps": {
                "alert": {"loc-key": "GAME_PLAY_REQUEST_FORMAT", "loc-args": ["Jenna", "Frank"]},
                "content-available": 1,
                "category": "GAME"
            },
            "gameId": "g-17"
        })
    );
}

#[test]
fn validation_errors_leave_message_unchanged() {
    let mut message = Message::with_recipient(hex_token(1)).unwrap();
    message.set_custom_property("keep", 1).unwrap();
    let before = message.clone();

    assert!(message.add_recipient("not-a-token").is_err());
    assert!(message.set_custom_property(" aps ", 2).is_err());
    assert!(message.apply_field("badge", &json!(3.5)).is_err());
    assert!(message.apply_field("badge", &json!("3")).is_err());
    assert!(message.custom_property("missing").is_err());
    assert!(message.recipient(5).is_err());

    assert_eq!(message, before);
}
