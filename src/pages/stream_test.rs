use super::*;

// ============================================================================
// stream_embed_url
// ============================================================================

#[test]
fn embed_url_targets_the_stream_uid() {
    assert_eq!(
        stream_embed_url("abc123"),
        "https://iframe.cloudflarestream.com/abc123"
    );
}

// ============================================================================
// player_embed
// ============================================================================

#[test]
fn configured_channel_gets_the_player_even_while_offline() {
    let info = StreamInfo {
        stream_uid: Some("abc123".to_owned()),
        is_live: false,
        ..StreamInfo::default()
    };
    assert_eq!(
        player_embed(&info).as_deref(),
        Some("https://iframe.cloudflarestream.com/abc123")
    );
}

#[test]
fn placeholder_uid_gets_no_player() {
    let info = StreamInfo {
        stream_uid: Some("placeholder-bob".to_owned()),
        is_live: true,
        ..StreamInfo::default()
    };
    assert_eq!(player_embed(&info), None);
}

#[test]
fn unconfigured_channel_gets_no_player() {
    assert_eq!(player_embed(&StreamInfo::default()), None);
}

// ============================================================================
// can_ban_author
// ============================================================================

#[test]
fn owner_can_ban_another_viewer() {
    assert!(can_ban_author("alice", Some("alice"), "bob"));
}

#[test]
fn owner_cannot_ban_themself() {
    assert!(!can_ban_author("alice", Some("alice"), "alice"));
}

#[test]
fn non_owner_cannot_ban() {
    assert!(!can_ban_author("alice", Some("bob"), "carol"));
}

#[test]
fn anonymous_viewer_cannot_ban() {
    assert!(!can_ban_author("alice", None, "bob"));
}
