//! Form state: field values plus the submission lifecycle.
//!
//! DESIGN
//! ======
//! `FieldMap` is copy-on-write. Observers receive `&FormState` and may keep a
//! clone; a later keystroke replaces one key via `Arc::make_mut`, which only
//! clones the underlying map when such a snapshot is still alive. A snapshot
//! therefore never changes after it was handed out.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use super::kind::FormKind;

/// Field name -> current value. Keys are fixed when the map is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldMap(Arc<BTreeMap<&'static str, String>>);

impl FieldMap {
    /// Every field of `kind`, each set to the empty string.
    #[must_use]
    pub fn for_kind(kind: FormKind) -> Self {
        let map = kind
            .fields()
            .iter()
            .map(|f| (f.name, String::new()))
            .collect();
        Self(Arc::new(map))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Replace one value. Returns `false` (and changes nothing) when `name`
    /// is not one of the fixed keys.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        if !self.0.contains_key(name) {
            return false;
        }
        if let Some(slot) = Arc::make_mut(&mut self.0).get_mut(name) {
            *slot = value.into();
        }
        true
    }

    /// Owned variant of [`FieldMap::set`] for chaining.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether two maps share storage (no copy has happened between them).
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: FieldMap,
    pub status: SubmissionStatus,
    /// Last message to show. `None` until the first submission settles and
    /// again while a new one is in flight.
    pub message: Option<String>,
}

impl FormState {
    #[must_use]
    pub fn new(kind: FormKind) -> Self {
        Self { fields: FieldMap::for_kind(kind), status: SubmissionStatus::Idle, message: None }
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.status == SubmissionStatus::InFlight
    }

    /// The message to display, skipping empty strings.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
