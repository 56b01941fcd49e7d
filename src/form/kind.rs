//! The two credential forms and everything fixed about them.
//!
//! Field sets, endpoint paths, labels and failure strings are compile-time
//! constants. Nothing here changes at runtime.

use std::fmt;

/// HTML input type a field renders as. Only affects validation and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
}

impl InputType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key used both in the field map and in the JSON request body.
    pub name: &'static str,
    pub input_type: InputType,
    pub placeholder: &'static str,
    pub required: bool,
}

const fn field(name: &'static str, input_type: InputType, placeholder: &'static str) -> FieldSpec {
    FieldSpec { name, input_type, placeholder, required: true }
}

const SIGNUP_FIELDS: &[FieldSpec] = &[
    field("firstName", InputType::Text, "First Name"),
    field("lastName", InputType::Text, "Last Name"),
    field("email", InputType::Email, "Email"),
    field("password", InputType::Password, "Password"),
    field("confirmPassword", InputType::Password, "Confirm Password"),
];

const LOGIN_FIELDS: &[FieldSpec] = &[
    field("email", InputType::Email, "Email"),
    field("password", InputType::Password, "Password"),
];

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Incorrect password or Email.";
pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Signup,
    Login,
}

impl FormKind {
    /// Path appended to the API base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Signup => "/signup",
            Self::Login => "/login",
        }
    }

    #[must_use]
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Signup => SIGNUP_FIELDS,
            Self::Login => LOGIN_FIELDS,
        }
    }

    #[must_use]
    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Signup => "Signup",
            Self::Login => "Login",
        }
    }

    /// Submit button label; switches while a request is outstanding.
    #[must_use]
    pub fn submit_label(self, in_flight: bool) -> &'static str {
        match (self, in_flight) {
            (Self::Signup, false) => "Signup",
            (Self::Signup, true) => "Signing Up...",
            (Self::Login, false) => "Login",
            (Self::Login, true) => "Logging In...",
        }
    }

    /// The one message shown for any failed submission of this form.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Signup => SIGNUP_FAILED_MESSAGE,
            Self::Login => LOGIN_FAILED_MESSAGE,
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Signup => "signup",
            Self::Login => "login",
        })
    }
}

#[cfg(test)]
#[path = "kind_test.rs"]
mod tests;
