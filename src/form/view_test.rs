use super::*;
use crate::form::state::SubmissionStatus;

#[test]
fn idle_login_view() {
    let view = FormView::render(FormKind::Login, &FormState::new(FormKind::Login));
    assert_eq!(view.heading, "Login");
    assert_eq!(view.submit_label, "Login");
    assert!(!view.submit_disabled);
    assert!(view.loading_text.is_none());
    assert!(view.message.is_none());
    assert_eq!(view.inputs.len(), 2);
}

#[test]
fn inputs_carry_type_placeholder_and_value() {
    let mut state = FormState::new(FormKind::Login);
    state.fields.set("email", "ada@example.com");
    let view = FormView::render(FormKind::Login, &state);

    let email = view.input("email").unwrap();
    assert_eq!(email.input_type, InputType::Email);
    assert_eq!(email.placeholder, "Email");
    assert_eq!(email.value, "ada@example.com");
    assert!(email.required);

    let password = view.input("password").unwrap();
    assert_eq!(password.input_type.as_str(), "password");
    assert_eq!(password.value, "");
}

#[test]
fn in_flight_disables_submit_and_shows_loading() {
    let mut state = FormState::new(FormKind::Signup);
    state.status = SubmissionStatus::InFlight;
    let view = FormView::render(FormKind::Signup, &state);
    assert!(view.submit_disabled);
    assert_eq!(view.loading_text, Some(LOADING_TEXT));
    assert_eq!(view.submit_label, "Signing Up...");
}

#[test]
fn completed_shows_message_and_reenables() {
    let mut state = FormState::new(FormKind::Login);
    state.status = SubmissionStatus::Completed;
    state.message = Some("Welcome".into());
    let view = FormView::render(FormKind::Login, &state);
    assert!(!view.submit_disabled);
    assert!(view.loading_text.is_none());
    assert_eq!(view.message.as_deref(), Some("Welcome"));
}

#[test]
fn empty_message_is_hidden() {
    let mut state = FormState::new(FormKind::Login);
    state.status = SubmissionStatus::Completed;
    state.message = Some(String::new());
    assert!(FormView::render(FormKind::Login, &state).message.is_none());
}
