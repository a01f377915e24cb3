//! Password change: presence, minimum length, confirmation and "new differs
//! from current". Every field is checked; the cross-field rule on the new
//! password runs last and replaces whatever was reported there before.

use super::{char_len, nullable_string, ErrorKind, FieldErrors};
use crate::credentials::CredentialVerifier;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const FIELD_CURRENT: &str = "currentPassword";
pub const FIELD_NEXT: &str = "newPassword";
pub const FIELD_CONFIRM: &str = "confirmPassword";

pub const MIN_PASSWORD_LEN: usize = 6;

pub const MSG_CURRENT_REQUIRED: &str = "Current password is required.";
pub const MSG_NEXT_REQUIRED: &str = "New password is required.";
pub const MSG_NEXT_TOO_SHORT: &str = "New password must be at least 6 characters.";
pub const MSG_CONFIRM_REQUIRED: &str = "Password confirmation is required.";
pub const MSG_MISMATCH: &str = "Passwords do not match.";
pub const MSG_SAME_AS_CURRENT: &str = "New password must be different from current password.";
pub const MSG_SUCCESS: &str = "Password changed successfully!";

#[derive(ToSchema, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PasswordChangeInput {
    #[serde(rename = "currentPassword", alias = "current", default, deserialize_with = "nullable_string")]
    pub current: String,
    #[serde(rename = "newPassword", alias = "next", default, deserialize_with = "nullable_string")]
    pub next: String,
    #[serde(rename = "confirmPassword", alias = "confirmNext", default, deserialize_with = "nullable_string")]
    pub confirm_next: String,
}

impl std::fmt::Debug for PasswordChangeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordChangeInput")
            .field("current", &"***")
            .field("next", &"***")
            .field("confirm_next", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordChangeError {
    #[error("Validation failed")]
    Validation(FieldErrors),
    #[error("Current password is incorrect.")]
    IncorrectCurrent,
}

#[must_use]
pub fn validate(input: &PasswordChangeInput) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if input.current.is_empty() {
        errors.set(FIELD_CURRENT, ErrorKind::MissingField, MSG_CURRENT_REQUIRED);
    }

    if input.next.is_empty() {
        errors.set(FIELD_NEXT, ErrorKind::MissingField, MSG_NEXT_REQUIRED);
    } else if char_len(&input.next) < MIN_PASSWORD_LEN {
        errors.set(FIELD_NEXT, ErrorKind::LengthOutOfRange, MSG_NEXT_TOO_SHORT);
    }

    if input.confirm_next.is_empty() {
        errors.set(FIELD_CONFIRM, ErrorKind::MissingField, MSG_CONFIRM_REQUIRED);
    } else if !input.next.is_empty() && input.confirm_next != input.next {
        errors.set(FIELD_CONFIRM, ErrorKind::CrossFieldMismatch, MSG_MISMATCH);
    }

    if !input.current.is_empty() && !input.next.is_empty() && input.current == input.next {
        errors.set(FIELD_NEXT, ErrorKind::CrossFieldMismatch, MSG_SAME_AS_CURRENT);
    }

    errors
}

/// Server path: field rules, then the current password of `account`.
///
/// # Errors
/// Returns the field errors, or [`PasswordChangeError::IncorrectCurrent`].
pub fn change(
    input: &PasswordChangeInput,
    account: &str,
    credentials: &dyn CredentialVerifier,
) -> Result<(), PasswordChangeError> {
    let errors = validate(input);
    if !errors.is_valid() {
        return Err(PasswordChangeError::Validation(errors));
    }

    if credentials.verify(account, &input.current) {
        Ok(())
    } else {
        Err(PasswordChangeError::IncorrectCurrent)
    }
}
