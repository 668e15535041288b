use super::*;

// =============================================================
// Identity
// =============================================================

#[test]
fn display_name_prefers_nickname() {
    let id = Identity {
        username: "carol".to_owned(),
        nickname: Some("Carol the Great".to_owned()),
    };
    assert_eq!(id.display_name(), "Carol the Great");
}

#[test]
fn display_name_falls_back_to_username_when_nickname_absent() {
    let id = Identity {
        username: "carol".to_owned(),
        nickname: None,
    };
    assert_eq!(id.display_name(), "carol");
}

#[test]
fn display_name_falls_back_to_username_when_nickname_empty() {
    let id = Identity {
        username: "carol".to_owned(),
        nickname: Some(String::new()),
    };
    assert_eq!(id.display_name(), "carol");
}

// =============================================================
// SessionState lifecycle
// =============================================================

#[test]
fn default_session_is_anonymous_and_not_loading() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn bootstrapping_session_is_loading() {
    let state = SessionState::bootstrapping();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn establish_sets_token_and_identity_together() {
    let mut state = SessionState::bootstrapping();
    state.establish(
        "T1".to_owned(),
        Identity {
            username: "bob".to_owned(),
            nickname: Some("Bob".to_owned()),
        },
    );
    assert_eq!(state.token.as_deref(), Some("T1"));
    assert_eq!(state.username(), Some("bob"));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn clear_drops_token_and_identity_together() {
    let mut state = SessionState::default();
    state.establish(
        "T1".to_owned(),
        Identity {
            username: "bob".to_owned(),
            nickname: None,
        },
    );
    state.clear();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}
