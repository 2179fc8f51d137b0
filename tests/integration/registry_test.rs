//! Registry behavior tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use social_api_model::json::{Field, Registry};
use social_api_model::shared::config::{ConfigError, DecodeConfig};
use social_api_model::shared::contact::ContactRequest;
use social_api_model::shared::error::DecodeError;
use social_api_model::shared::messaging::{Conversation, MessageAttachment};

use crate::{assert_err, assert_ok};

#[test]
fn test_builtin_resources() {
    let resources: Vec<&str> = Registry::global().resources().collect();
    assert_eq!(
        resources,
        [
            "Address",
            "ContactPaths",
            "ContactRequest",
            "Conversation",
            "ConversationMessage",
            "InvitationStats",
            "Location",
            "MessageAttachment",
            "PendingContactRequest",
            "PhotoUrls",
            "User",
        ]
    );
}

#[test]
fn test_binding_table_exposes_wire_keys() {
    let fields = Registry::global().fields("Conversation").unwrap_or_default();
    assert!(fields.contains(&Field::new("total_msg_count", "message_count")));
    assert!(fields.contains(&Field::new("is_read_only", "read_only")));
    assert_eq!(Registry::global().fields("Company"), None);
}

#[test]
fn test_install_after_first_use_fails() {
    let _ = Registry::global();
    assert_err!(
        Registry::install(DecodeConfig::default()),
        ConfigError::AlreadyInstalled
    );
}

#[test]
fn test_decode_each_isolates_failures() {
    let payload = br#"[
        {"id": "a1", "filename": "one.pdf"},
        {"filename": "two.pdf"},
        {"id": "a3", "size": "large"},
        {"id": "a4"}
    ]"#;
    let results = assert_ok!(Registry::global().decode_each::<MessageAttachment>(payload));
    assert_eq!(results.len(), 4);
    assert_matches!(&results[0], Ok(attachment) if attachment.file_name() == "one.pdf");
    assert_matches!(&results[1], Err(DecodeError::MissingMandatoryField { .. }));
    assert_matches!(&results[2], Err(DecodeError::MalformedField { field, .. }) if field == "size");
    assert_matches!(&results[3], Ok(_));
}

#[test]
fn test_decode_named_normalizes() {
    let normalized = assert_ok!(Registry::global().decode_named(
        "Conversation",
        br#"{"id": "c1", "subject": null, "message_count": 3, "updated_at": "garbage", "extra": 1}"#,
    ));
    assert_eq!(
        normalized,
        json!({
            "id": "c1",
            "subject": "",
            "message_count": 3,
            "unread_message_count": 0,
            "read_only": false,
            "participants": [],
        })
    );
}

#[test]
fn test_decode_named_unknown_resource() {
    assert_err!(
        Registry::global().decode_named("Company", b"{}"),
        DecodeError::Unregistered { .. }
    );
}

#[test]
fn test_private_registry_year_window() {
    let config = assert_ok!(DecodeConfig::builder().min_year(1800).build());
    let registry = assert_ok!(Registry::with_builtin_resources(config));
    let payload = br#"{"sender_id": "u1", "sender": {"id": "u1"}, "received_at": "1850-01-01"}"#;

    let wide: ContactRequest = assert_ok!(registry.decode(payload));
    assert_eq!(wide.received_at().year(), Some(1850));

    let narrow: ContactRequest = assert_ok!(Registry::global().decode(payload));
    assert!(narrow.received_at().is_unset());
}

#[test]
fn test_top_level_must_be_object() {
    assert_err!(
        Registry::global().decode::<Conversation>(b"\"c1\""),
        DecodeError::UnexpectedShape { found: "string", .. }
    );
    assert_err!(
        Registry::global().decode_str::<Conversation>("{"),
        DecodeError::Syntax { .. }
    );
}
