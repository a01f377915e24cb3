//! Login: presence of an email and a minimum-length password.
//!
//! The server answers with the first failing rule as a single message, while
//! the client reports each field separately. Both are kept as they are.

use super::{char_len, nullable_string, ErrorKind, FieldErrors};
use crate::credentials::CredentialVerifier;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const FIELD_IDENTIFIER: &str = "email";
pub const FIELD_SECRET: &str = "password";

pub const MIN_SECRET_LEN: usize = 6;

pub const MSG_IDENTIFIER_REQUIRED: &str = "Email is required.";
pub const MSG_SECRET_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const MSG_SUCCESS: &str = "Login successful!";

#[derive(ToSchema, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct LoginInput {
    #[serde(rename = "email", alias = "identifier", default, deserialize_with = "nullable_string")]
    pub identifier: String,
    #[serde(rename = "password", alias = "secret", default, deserialize_with = "nullable_string")]
    pub secret: String,
}

impl std::fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginInput")
            .field("identifier", &self.identifier)
            .field("secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Email and password are required.")]
    MissingCredentials,
    #[error("Password must be at least 6 characters.")]
    SecretTooShort,
    #[error("Invalid credentials.")]
    InvalidCredentials,
}

impl LoginError {
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::MissingCredentials => ErrorKind::MissingField,
            Self::SecretTooShort => ErrorKind::LengthOutOfRange,
            Self::InvalidCredentials => ErrorKind::AuthorizationFailed,
        }
    }
}

/// Client rules: both checks run, both messages may be reported.
#[must_use]
pub fn validate(input: &LoginInput) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if input.identifier.is_empty() {
        errors.set(
            FIELD_IDENTIFIER,
            ErrorKind::MissingField,
            MSG_IDENTIFIER_REQUIRED,
        );
    }

    if char_len(&input.secret) < MIN_SECRET_LEN {
        errors.set(
            FIELD_SECRET,
            ErrorKind::LengthOutOfRange,
            MSG_SECRET_TOO_SHORT,
        );
    }

    errors
}

/// Server rules up to, but not including, the credential check.
///
/// # Errors
/// Returns the first failing rule.
pub fn precheck(input: &LoginInput) -> Result<(), LoginError> {
    if input.identifier.is_empty() || input.secret.is_empty() {
        return Err(LoginError::MissingCredentials);
    }

    if char_len(&input.secret) < MIN_SECRET_LEN {
        return Err(LoginError::SecretTooShort);
    }

    Ok(())
}

/// Full server path: [`precheck`] then the credential check.
///
/// # Errors
/// Returns the first failing rule, or [`LoginError::InvalidCredentials`].
pub fn authenticate(
    input: &LoginInput,
    credentials: &dyn CredentialVerifier,
) -> Result<(), LoginError> {
    precheck(input)?;

    if credentials.verify(&input.identifier, &input.secret) {
        Ok(())
    } else {
        Err(LoginError::InvalidCredentials)
    }
}
