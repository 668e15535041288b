use super::*;

// ============================================================================
// validate_credentials
// ============================================================================

#[test]
fn accepts_a_filled_credential_pair() {
    let (user, pass) = validate_credentials("alice", "hunter2").unwrap();
    assert_eq!(user, "alice");
    assert_eq!(pass, "hunter2");
}

#[test]
fn trims_whitespace_around_the_username() {
    let (user, _) = validate_credentials("  alice  ", "hunter2").unwrap();
    assert_eq!(user, "alice");
}

#[test]
fn rejects_blank_username() {
    assert!(validate_credentials("   ", "hunter2").is_err());
}

#[test]
fn rejects_empty_password() {
    assert!(validate_credentials("alice", "").is_err());
}

#[test]
fn password_whitespace_is_preserved() {
    let (_, pass) = validate_credentials("alice", " spaced pass ").unwrap();
    assert_eq!(pass, " spaced pass ");
}
