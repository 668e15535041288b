use super::*;

// =============================================================
// failure_reason
// =============================================================

#[test]
fn reason_comes_from_error_key_first() {
    let body = r#"{"error":"User is already banned.","banned_user":"ignored"}"#;
    assert_eq!(failure_reason(body, &["banned_user"]), "User is already banned.");
}

#[test]
fn reason_falls_back_to_named_field_string() {
    let body = r#"{"banned_user":"No such user."}"#;
    assert_eq!(failure_reason(body, &["banned_user"]), "No such user.");
}

#[test]
fn reason_accepts_field_array_of_strings() {
    let body = r#"{"nickname":["This nickname is too long."]}"#;
    assert_eq!(failure_reason(body, &["nickname"]), "This nickname is too long.");
}

#[test]
fn reason_checks_fields_in_order() {
    let body = r#"{"new_password":["Too short."]}"#;
    assert_eq!(
        failure_reason(body, &["old_password", "new_password"]),
        "Too short."
    );
}

#[test]
fn unusable_bodies_fall_back_to_generic_message() {
    assert_eq!(failure_reason("", &["error"]), GENERIC_FAILURE);
    assert_eq!(failure_reason("<html>502</html>", &[]), GENERIC_FAILURE);
    assert_eq!(failure_reason(r#"{"detail":42}"#, &["detail"]), GENERIC_FAILURE);
    assert_eq!(failure_reason(r#"{"field":[]}"#, &["field"]), GENERIC_FAILURE);
}

// =============================================================
// auth_header
// =============================================================

#[test]
fn auth_header_uses_token_scheme() {
    assert_eq!(auth_header("T1"), "Token T1");
}
