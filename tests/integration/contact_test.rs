//! Contact resource decoding tests

use pretty_assertions::assert_eq;
use serde_json::json;
use social_api_model::json::Registry;
use social_api_model::shared::calendar::SafeCalendar;
use social_api_model::shared::contact::{
    ContactPaths, ContactRequest, InvitationStats, PendingContactRequest,
};
use social_api_model::shared::profile::{Gender, User};

use crate::common::{bytes, contact_paths_payload, member};
use crate::{assert_malformed_field, assert_missing_field, assert_ok};

#[test]
fn test_empty_contact_paths() {
    let paths: ContactPaths =
        assert_ok!(Registry::global().decode(br#"{"paths": [], "distance": 0, "total": 0}"#));
    assert_eq!(paths, ContactPaths::new(vec![], 0, 0));
}

#[test]
fn test_contact_paths_skip_entries_without_users() {
    let paths: ContactPaths =
        assert_ok!(Registry::global().decode(&bytes(&contact_paths_payload())));
    assert_eq!(paths.paths().len(), 2);
    assert_eq!(paths.distance(), 2);
    let middle: Vec<&str> = paths.paths().iter().map(|path| path[1].id()).collect();
    assert_eq!(middle, ["u7", "u8"]);
    assert_eq!(paths.paths()[0][0].gender(), Gender::Male);
}

#[test]
fn test_contact_paths_require_a_list() {
    let result: Result<ContactPaths, _> =
        Registry::global().decode_value(&json!({"paths": {"users": []}}));
    let raw = assert_malformed_field!(result, "paths");
    assert_eq!(raw, json!({"users": []}));
}

#[test]
fn test_contact_request_with_timestamp() {
    let payload = json!({
        "sender_id": "u1",
        "sender": member("u1"),
        "message": "hi",
        "received_at": "2014-11-03T08:12:44Z",
    });
    let request: ContactRequest = assert_ok!(Registry::global().decode_value(&payload));
    let sender: User = assert_ok!(Registry::global().decode_value(&member("u1")));
    let received_at = assert_ok!(
        Registry::global().adapters().calendar().parse("2014-11-03T08:12:44Z").ok_or("unparsed")
    );
    assert_eq!(request, ContactRequest::new("u1", sender, "hi", received_at));
}

#[test]
fn test_contact_request_with_unparsable_timestamp() {
    let payload = json!({
        "sender_id": "u1",
        "sender": member("u1"),
        "message": "hi",
        "received_at": "03.11.2014 08:12",
    });
    let request: ContactRequest = assert_ok!(Registry::global().decode_value(&payload));
    assert_eq!(request.received_at(), SafeCalendar::UNSET);
    assert_eq!(request.sender_id(), "u1");
}

#[test]
fn test_timestamp_at_year_window_edge_is_stable() {
    for received_at in ["2099-12-31T23:30:00-01:00", "1900-01-01T00:30:00+01:00"] {
        let payload = json!({"sender_id": "u1", "sender": {"id": "u1"}, "received_at": received_at});
        let request: ContactRequest = assert_ok!(Registry::global().decode_value(&payload));
        assert!(request.received_at().is_unset(), "{} should be unset", received_at);
        let encoded = Registry::global().encode(&request);
        let again: ContactRequest = assert_ok!(Registry::global().decode_value(&encoded));
        assert_eq!(again, request);
    }
}

#[test]
fn test_contact_request_null_message_is_empty() {
    let payload = json!({"sender_id": "u1", "sender": {"id": "u1"}, "message": null});
    let request: ContactRequest = assert_ok!(Registry::global().decode_value(&payload));
    assert_eq!(request.message(), "");
    assert!(request.received_at().is_unset());
}

#[test]
fn test_invitation_stats_null_fallback() {
    let payload = json!({
        "total_addresses": 4,
        "invitations_sent": 1,
        "already_invited": ["a@x.com", "b@x.com"],
        "already_member": [],
        "invalid_addresses": null,
    });
    let stats: InvitationStats = assert_ok!(Registry::global().decode_value(&payload));
    assert_eq!(stats.already_invited(), ["a@x.com".to_string(), "b@x.com".to_string()]);
    assert!(stats.invalid_addresses().is_empty());
    assert_eq!(stats.total_addresses(), 4);
}

#[test]
fn test_pending_request_requires_recipient() {
    let result: Result<PendingContactRequest, _> =
        Registry::global().decode(br#"{"sender_id": "u1"}"#);
    assert_missing_field!(result, "PendingContactRequest", "recipient_id");
}
