use super::*;

// =============================================================
// Field sets
// =============================================================

#[test]
fn login_fields_are_email_and_password() {
    let names: Vec<_> = FormKind::Login.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["email", "password"]);
}

#[test]
fn signup_fields_match_backend_keys() {
    let names: Vec<_> = FormKind::Signup.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["firstName", "lastName", "email", "password", "confirmPassword"]);
}

#[test]
fn every_field_is_required() {
    for kind in [FormKind::Signup, FormKind::Login] {
        assert!(kind.fields().iter().all(|f| f.required), "{kind} has an optional field");
    }
}

#[test]
fn field_lookup_unknown_is_none() {
    assert!(FormKind::Login.field("firstName").is_none());
    assert_eq!(FormKind::Signup.field("email").map(|f| f.input_type), Some(InputType::Email));
}

// =============================================================
// Fixed strings
// =============================================================

#[test]
fn paths_are_distinct() {
    assert_eq!(FormKind::Login.path(), "/login");
    assert_eq!(FormKind::Signup.path(), "/signup");
}

#[test]
fn failure_messages_are_form_specific() {
    assert_eq!(FormKind::Login.failure_message(), "Login failed. Incorrect password or Email.");
    assert_ne!(FormKind::Signup.failure_message(), FormKind::Login.failure_message());
}

#[test]
fn submit_label_tracks_in_flight() {
    assert_eq!(FormKind::Login.submit_label(false), "Login");
    assert_eq!(FormKind::Login.submit_label(true), "Logging In...");
    assert_eq!(FormKind::Signup.submit_label(true), "Signing Up...");
}
