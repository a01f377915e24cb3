//! # Account Forms
//!
//! Login, password change and profile update forms backed by mock JSON
//! endpoints.
//!
//! ## Validation
//!
//! The field rules live once in [`validation`] and are used by both sides:
//!
//! - **Server** ([`api`]): `POST /login`, `POST /password` and `PUT /profile`
//!   re-run the rules and answer with `{message, errors?, success?}`.
//! - **Client** ([`client`]): forms validate locally, send a single request
//!   when valid and surface the outcome as a notification.
//!
//! Where the two surfaces word a message differently, [`validation::Audience`]
//! selects the variant. The login endpoint keeps its single combined message
//! for missing fields while the login form reports each field separately.
//!
//! ## Credentials
//!
//! Credential checks go through [`credentials::CredentialVerifier`]. The
//! default [`credentials::MockCredentials`] accepts one fixed account; nothing
//! is persisted.

pub mod api;
pub mod cli;
pub mod client;
pub mod credentials;
pub mod validation;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
