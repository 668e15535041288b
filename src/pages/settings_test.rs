use super::*;

// ============================================================================
// validate_password_change
// ============================================================================

#[test]
fn accepts_matching_new_passwords() {
    let (old, new) = validate_password_change("old", "new", "new").unwrap();
    assert_eq!(old, "old");
    assert_eq!(new, "new");
}

#[test]
fn rejects_empty_current_password() {
    let err = validate_password_change("", "new", "new").unwrap_err();
    assert_eq!(err, "Current password is required");
}

#[test]
fn rejects_empty_new_password() {
    let err = validate_password_change("old", "", "").unwrap_err();
    assert_eq!(err, "New password is required");
}

#[test]
fn rejects_mismatched_confirmation() {
    let err = validate_password_change("old", "new", "other").unwrap_err();
    assert_eq!(err, "New passwords do not match");
}
