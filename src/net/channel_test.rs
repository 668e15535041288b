use super::*;

fn key(channel: &str, token: Option<&str>) -> ChannelKey {
    ChannelKey::new(channel, token.map(str::to_owned))
}

// =============================================================
// ChannelKey
// =============================================================

#[test]
fn empty_token_normalizes_to_read_only() {
    let k = key("bob", Some(""));
    assert_eq!(k.token(), None);
    assert_eq!(k, key("bob", None));
}

// =============================================================
// plan_connection: single-connection invariant
// =============================================================

#[test]
fn unchanged_key_with_live_connection_is_kept() {
    let current = key("bob", Some("T1"));
    assert_eq!(
        plan_connection(Some((&current, ChannelState::Open)), &key("bob", Some("T1"))),
        ConnectPlan::KeepExisting
    );
    assert_eq!(
        plan_connection(Some((&current, ChannelState::Connecting)), &key("bob", Some("T1"))),
        ConnectPlan::KeepExisting
    );
}

#[test]
fn changed_channel_replaces_connection() {
    let current = key("bob", Some("T1"));
    assert_eq!(
        plan_connection(Some((&current, ChannelState::Open)), &key("alice", Some("T1"))),
        ConnectPlan::Replace
    );
}

#[test]
fn changed_token_replaces_connection() {
    let current = key("bob", None);
    assert_eq!(
        plan_connection(Some((&current, ChannelState::Open)), &key("bob", Some("T1"))),
        ConnectPlan::Replace
    );
}

#[test]
fn closed_connection_is_replaced_even_with_same_key() {
    let current = key("bob", Some("T1"));
    assert_eq!(
        plan_connection(Some((&current, ChannelState::Closed)), &key("bob", Some("T1"))),
        ConnectPlan::Replace
    );
}

#[test]
fn no_current_connection_always_opens() {
    assert_eq!(plan_connection(None, &key("bob", None)), ConnectPlan::Replace);
}

// =============================================================
// chat_socket_url
// =============================================================

#[test]
fn socket_url_embeds_channel_and_token() {
    let url = chat_socket_url(false, "example.com:8000", &key("bob", Some("T1")));
    assert_eq!(url, "ws://example.com:8000/ws/chat/bob/?token=T1");
}

#[test]
fn socket_url_keeps_empty_token_parameter_when_unauthenticated() {
    let url = chat_socket_url(true, "example.com", &key("bob", None));
    assert_eq!(url, "wss://example.com/ws/chat/bob/?token=");
}

// =============================================================
// classify_frame
// =============================================================

#[test]
fn error_frame_becomes_chat_error_event() {
    let event = classify_frame(r#"{"error":"You are banned."}"#).unwrap();
    assert_eq!(event, ChannelEvent::Error("You are banned.".to_owned()));
}

#[test]
fn message_frame_becomes_message_event_with_display_name_fallback() {
    let event = classify_frame(r#"{"username":"carol","message":"hi"}"#).unwrap();
    let ChannelEvent::Message(msg) = event else {
        panic!("expected message event");
    };
    assert_eq!(msg.username, "carol");
    assert_eq!(msg.display_name(), "carol");
    assert_eq!(msg.text, "hi");
}

#[test]
fn message_frame_carries_display_name_when_present() {
    let event =
        classify_frame(r#"{"username":"carol","display_name":"Carol!","message":"hi"}"#).unwrap();
    let ChannelEvent::Message(msg) = event else {
        panic!("expected message event");
    };
    assert_eq!(msg.display_name(), "Carol!");
}

#[test]
fn frames_matching_neither_shape_are_protocol_violations() {
    assert!(classify_frame("not json").is_none());
    assert!(classify_frame(r#"{"ping":1}"#).is_none());
    // A message without a body is not a valid message shape.
    assert!(classify_frame(r#"{"username":"carol"}"#).is_none());
}

// =============================================================
// outbound_payload: send preconditions
// =============================================================

#[test]
fn send_requires_open_connection() {
    assert_eq!(
        outbound_payload(ChannelState::Connecting, Some("T1"), "hello"),
        Err(ChatSendError::NotOpen)
    );
    assert_eq!(
        outbound_payload(ChannelState::Closed, Some("T1"), "hello"),
        Err(ChatSendError::NotOpen)
    );
}

#[test]
fn send_requires_non_blank_text() {
    assert_eq!(
        outbound_payload(ChannelState::Open, Some("T1"), "   "),
        Err(ChatSendError::EmptyMessage)
    );
}

#[test]
fn read_only_connection_refuses_to_send() {
    assert_eq!(
        outbound_payload(ChannelState::Open, None, "hello"),
        Err(ChatSendError::ReadOnly)
    );
    assert_eq!(
        outbound_payload(ChannelState::Open, Some(""), "hello"),
        Err(ChatSendError::ReadOnly)
    );
}

#[test]
fn not_open_refusal_carries_a_user_visible_reason() {
    // Surfaced verbatim in the chat panel when no connection exists yet.
    assert_eq!(
        ChatSendError::NotOpen.to_string(),
        "chat connection is not open"
    );
}

#[test]
fn satisfied_preconditions_serialize_the_message_frame() {
    let payload = outbound_payload(ChannelState::Open, Some("T1"), "hello").unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(value, serde_json::json!({ "message": "hello" }));
}
