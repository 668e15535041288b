use super::*;

fn owner() -> Identity {
    Identity {
        username: "bob".to_owned(),
        nickname: Some("Bob".to_owned()),
    }
}

// =============================================================
// authorize: owner gate
// =============================================================

#[test]
fn owner_identity_passes_the_gate() {
    assert_eq!(authorize(Some(&owner()), "bob"), Ok(()));
}

#[test]
fn non_owner_identity_is_rejected_locally() {
    let viewer = Identity {
        username: "carol".to_owned(),
        nickname: None,
    };
    assert_eq!(
        authorize(Some(&viewer), "bob"),
        Err(ModerationError::NotChannelOwner)
    );
}

#[test]
fn anonymous_caller_is_rejected_locally() {
    assert_eq!(authorize(None, "bob"), Err(ModerationError::NotChannelOwner));
}

// =============================================================
// validate_ban
// =============================================================

#[test]
fn owner_may_ban_another_user() {
    assert_eq!(validate_ban(Some(&owner()), "bob", "carol"), Ok(()));
}

#[test]
fn self_ban_is_rejected() {
    assert_eq!(
        validate_ban(Some(&owner()), "bob", "bob"),
        Err(ModerationError::SelfBan)
    );
}

#[test]
fn non_owner_ban_is_rejected_before_self_ban_check() {
    let viewer = Identity {
        username: "carol".to_owned(),
        nickname: None,
    };
    assert_eq!(
        validate_ban(Some(&viewer), "bob", "carol"),
        Err(ModerationError::NotChannelOwner)
    );
}

// =============================================================
// Error display
// =============================================================

#[test]
fn server_error_displays_its_reason_verbatim() {
    let err = ModerationError::Server("User is already banned.".to_owned());
    assert_eq!(err.to_string(), "User is already banned.");
}
