use super::*;

#[test]
fn default_roster_is_empty() {
    let roster = RosterState::default();
    assert!(roster.banned.is_empty());
    assert!(!roster.loading);
    assert!(roster.error.is_none());
}

#[test]
fn insert_adds_entry_once() {
    let mut roster = RosterState::default();
    roster.insert("carol");
    roster.insert("carol");
    assert_eq!(roster.banned.len(), 1);
    assert!(roster.contains("carol"));
}

#[test]
fn remove_deletes_matching_entry_only() {
    let mut roster = RosterState::default();
    roster.insert("carol");
    roster.insert("dave");
    roster.remove("carol");
    assert!(!roster.contains("carol"));
    assert!(roster.contains("dave"));
}

#[test]
fn reload_replaces_cache_and_clears_error() {
    let mut roster = RosterState {
        loading: true,
        error: Some("stale".to_owned()),
        ..RosterState::default()
    };
    roster.reload(vec![BannedEntry {
        banned_username: "mallory".to_owned(),
    }]);
    assert!(roster.contains("mallory"));
    assert!(!roster.loading);
    assert!(roster.error.is_none());
}
