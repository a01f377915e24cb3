//! Credential checks behind a trait so a real store can replace the mock one.

use secrecy::{ExposeSecret, SecretString};

pub const MOCK_IDENTIFIER: &str = "test@example.com";
pub const MOCK_SECRET: &str = "password123";

pub trait CredentialVerifier: Send + Sync + std::fmt::Debug {
    /// Returns `true` when `secret` belongs to `identifier`.
    fn verify(&self, identifier: &str, secret: &str) -> bool;
}

/// A single fixed account.
pub struct MockCredentials {
    identifier: String,
    secret: SecretString,
}

impl MockCredentials {
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: SecretString) -> Self {
        Self {
            identifier: identifier.into(),
            secret,
        }
    }
}

impl Default for MockCredentials {
    fn default() -> Self {
        Self::new(MOCK_IDENTIFIER, SecretString::from(MOCK_SECRET))
    }
}

impl CredentialVerifier for MockCredentials {
    fn verify(&self, identifier: &str, secret: &str) -> bool {
        identifier == self.identifier && secret == self.secret.expose_secret()
    }
}

impl std::fmt::Debug for MockCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockCredentials")
            .field("identifier", &self.identifier)
            .field("secret", &"***")
            .finish()
    }
}
