//! Field validation shared by the HTTP handlers and the client forms.
//!
//! Each flow exposes a `validate` function returning [`FieldErrors`]: at most
//! one message per field, where a later rule overwrites an earlier message on
//! the same field. The server re-runs the same rules the client ran, and
//! [`Audience`] picks the wording where the two surfaces differ.

pub mod login;
pub mod password;
pub mod profile;

use serde::{Deserialize, Deserializer};
use std::collections::{btree_map, BTreeMap};

/// Which surface a message is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Immediate feedback next to the form fields.
    Client,
    /// The authoritative response of the HTTP handlers.
    Server,
}

/// Failure categories surfaced by the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingField,
    FormatInvalid,
    LengthOutOfRange,
    CrossFieldMismatch,
    AuthorizationFailed,
    TransportFailure,
}

impl ErrorKind {
    /// Field-level kinds are correctable by the user and shown next to a field.
    #[must_use]
    pub const fn is_field_level(self) -> bool {
        matches!(
            self,
            Self::MissingField
                | Self::FormatInvalid
                | Self::LengthOutOfRange
                | Self::CrossFieldMismatch
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

/// Field name to validation message. Empty means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`, replacing any earlier one.
    pub fn set(&mut self, field: &'static str, kind: ErrorKind, message: &'static str) {
        self.errors.insert(field, FieldError { kind, message });
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    #[must_use]
    pub fn message(&self, field: &str) -> Option<&'static str> {
        self.errors.get(field).map(|error| error.message)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> btree_map::Iter<'_, &'static str, FieldError> {
        self.errors.iter()
    }

    /// Wire form: field name to message.
    #[must_use]
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(field, error)| ((*field).to_string(), error.message.to_string()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a &'static str, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, &'static str, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Length as the forms count it: one per character, not per byte.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Missing fields and `null` both read as the empty string.
pub(crate) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
