//! HTTP handlers for the account forms.
//!
//! Each form handler re-runs the shared validation rules, performs the mock
//! action and answers with a [`FormResponse`](crate::api::types::FormResponse).

pub mod health;
pub mod login;
pub mod password;
pub mod profile;

use crate::credentials::{CredentialVerifier, MockCredentials, MOCK_IDENTIFIER};
use std::sync::Arc;

/// Read-only state shared by the form handlers.
#[derive(Debug, Clone)]
pub struct FormsState {
    credentials: Arc<dyn CredentialVerifier>,
    account: String,
}

impl FormsState {
    /// `account` is the identifier whose password the password form changes.
    #[must_use]
    pub fn new(credentials: Arc<dyn CredentialVerifier>, account: impl Into<String>) -> Self {
        Self {
            credentials,
            account: account.into(),
        }
    }

    #[must_use]
    pub fn credentials(&self) -> &dyn CredentialVerifier {
        self.credentials.as_ref()
    }

    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }
}

impl Default for FormsState {
    fn default() -> Self {
        Self::new(Arc::new(MockCredentials::default()), MOCK_IDENTIFIER)
    }
}
