//! Pre-submit checks standing in for the browser's `required` and
//! `type="email"` constraints. A form that fails here never reaches the
//! network.
//!
//! Required fields match the browser exactly: empty is rejected. Email
//! syntax is RFC 5322 style (the `email_address` crate), not the WHATWG
//! "valid email address" production. Quoted local parts, non-ASCII local
//! parts and address-literal domains pass here though a browser rejects
//! them; consecutive dots in the local part fail here though a browser
//! accepts them. The server remains the authority either way.

use std::fmt;

use email_address::EmailAddress;

use super::kind::{FormKind, InputType};
use super::state::FieldMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    Missing(&'static str),
    InvalidEmail(&'static str),
}

impl ValidationIssue {
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::Missing(name) | Self::InvalidEmail(name) => name,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "{name} is required"),
            Self::InvalidEmail(name) => write!(f, "{name} is not a valid email address"),
        }
    }
}

/// Every issue found on one form, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

/// Check `fields` against the rules of `kind`.
///
/// # Errors
///
/// Returns every missing required field and every malformed email field.
pub fn validate(kind: FormKind, fields: &FieldMap) -> Result<(), ValidationError> {
    let mut issues = Vec::new();
    for spec in kind.fields() {
        let value = fields.get(spec.name).unwrap_or_default();
        if value.is_empty() {
            if spec.required {
                issues.push(ValidationIssue::Missing(spec.name));
            }
            continue;
        }
        if spec.input_type == InputType::Email && !EmailAddress::is_valid(value) {
            issues.push(ValidationIssue::InvalidEmail(spec.name));
        }
    }
    if issues.is_empty() { Ok(()) } else { Err(ValidationError { issues }) }
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
