use super::*;

// ============================================================================
// validate_signup
// ============================================================================

#[test]
fn accepts_matching_passwords() {
    let (user, pass) = validate_signup("bob", "secret", "secret").unwrap();
    assert_eq!(user, "bob");
    assert_eq!(pass, "secret");
}

#[test]
fn rejects_mismatched_passwords() {
    let err = validate_signup("bob", "secret", "secre").unwrap_err();
    assert_eq!(err, "Passwords do not match");
}

#[test]
fn rejects_blank_username() {
    assert!(validate_signup("  ", "secret", "secret").is_err());
}

#[test]
fn rejects_empty_password_before_checking_match() {
    let err = validate_signup("bob", "", "").unwrap_err();
    assert_eq!(err, "Password is required");
}

#[test]
fn trims_the_username() {
    let (user, _) = validate_signup(" bob ", "secret", "secret").unwrap();
    assert_eq!(user, "bob");
}
