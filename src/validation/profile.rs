//! Profile update: six independent field checks, all evaluated.

use super::{char_len, nullable_string, Audience, ErrorKind, FieldErrors};
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;

pub const FIELD_USERNAME: &str = "username";
pub const FIELD_FULL_NAME: &str = "fullName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_BIRTH_DATE: &str = "birthDate";
pub const FIELD_BIO: &str = "bio";

pub const MIN_USERNAME_LEN: usize = 6;
pub const MAX_BIO_LEN: usize = 160;

pub const MSG_USERNAME_TOO_SHORT: &str = "Username must be at least 6 characters.";
pub const MSG_FULL_NAME_REQUIRED: &str = "Full name is required.";
pub const MSG_EMAIL_INVALID_SERVER: &str = "Must be a valid email format.";
pub const MSG_EMAIL_INVALID_CLIENT: &str = "Invalid email format.";
pub const MSG_PHONE_INVALID: &str = "Phone must be 10-15 digits.";
pub const MSG_BIRTH_DATE_FUTURE: &str = "Birth date cannot be in the future.";
pub const MSG_BIO_TOO_LONG: &str = "Bio must be 160 characters or less.";
pub const MSG_SUCCESS: &str = "Profile updated successfully!";

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[serde(default, deserialize_with = "nullable_string")]
    pub username: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub full_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone: String,
    /// Date as entered, usually `YYYY-MM-DD`; empty when not provided.
    #[serde(default, deserialize_with = "nullable_string")]
    pub birth_date: String,
    /// Empty when not provided.
    #[serde(default, deserialize_with = "nullable_string")]
    pub bio: String,
}

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").ok());
static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9]{10,15}$").ok());

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];

#[must_use]
pub fn valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

#[must_use]
pub fn valid_phone(phone: &str) -> bool {
    PHONE_RE.as_ref().is_some_and(|re| re.is_match(phone))
}

/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `January 15, 1990` or an RFC 3339
/// timestamp reduced to its date.
#[must_use]
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// Check every field against `today`, the caller's current calendar date.
#[must_use]
pub fn validate(input: &ProfileInput, audience: Audience, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if char_len(&input.username) < MIN_USERNAME_LEN {
        errors.set(
            FIELD_USERNAME,
            ErrorKind::LengthOutOfRange,
            MSG_USERNAME_TOO_SHORT,
        );
    }

    if input.full_name.trim().is_empty() {
        errors.set(
            FIELD_FULL_NAME,
            ErrorKind::MissingField,
            MSG_FULL_NAME_REQUIRED,
        );
    }

    if !valid_email(&input.email) {
        let message = match audience {
            Audience::Client => MSG_EMAIL_INVALID_CLIENT,
            Audience::Server => MSG_EMAIL_INVALID_SERVER,
        };
        errors.set(FIELD_EMAIL, ErrorKind::FormatInvalid, message);
    }

    if !valid_phone(&input.phone) {
        errors.set(FIELD_PHONE, ErrorKind::FormatInvalid, MSG_PHONE_INVALID);
    }

    // a value that is not a date cannot be in the future
    if parse_birth_date(&input.birth_date).is_some_and(|date| date > today) {
        errors.set(
            FIELD_BIRTH_DATE,
            ErrorKind::FormatInvalid,
            MSG_BIRTH_DATE_FUTURE,
        );
    }

    if char_len(&input.bio) > MAX_BIO_LEN {
        errors.set(FIELD_BIO, ErrorKind::LengthOutOfRange, MSG_BIO_TOO_LONG);
    }

    errors
}
