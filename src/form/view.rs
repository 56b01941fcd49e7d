//! What a form looks like for a given state.
//!
//! A `FormView` is a plain value; whatever draws the page (DOM, terminal,
//! test assertion) reads it and nothing else.

use super::kind::{FormKind, InputType};
use super::state::FormState;

pub const LOADING_TEXT: &str = "Loading, please wait...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub name: &'static str,
    pub input_type: InputType,
    pub placeholder: &'static str,
    pub value: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub inputs: Vec<InputView>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    /// Shown only while a request is in flight.
    pub loading_text: Option<&'static str>,
    /// Plain text below the form; absent when there is nothing to show.
    pub message: Option<String>,
}

impl FormView {
    #[must_use]
    pub fn render(kind: FormKind, state: &FormState) -> Self {
        let in_flight = state.is_in_flight();
        let inputs = kind
            .fields()
            .iter()
            .map(|spec| InputView {
                name: spec.name,
                input_type: spec.input_type,
                placeholder: spec.placeholder,
                value: state.value(spec.name).unwrap_or_default().to_string(),
                required: spec.required,
            })
            .collect();

        Self {
            heading: kind.heading(),
            inputs,
            submit_label: kind.submit_label(in_flight),
            submit_disabled: in_flight,
            loading_text: in_flight.then_some(LOADING_TEXT),
            message: state.message().map(str::to_string),
        }
    }

    #[must_use]
    pub fn input(&self, name: &str) -> Option<&InputView> {
        self.inputs.iter().find(|i| i.name == name)
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
