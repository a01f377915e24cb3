//! Client side of the account forms.
//!
//! A form holds field values and view state (such as whether a password is
//! shown). [`FormController`] drives one submission through
//! Idle → Validating → Sending → Succeeded/Rejected, running the same
//! validation rules as the server before any request is sent.

pub mod errors;
pub mod login;
pub mod password;
pub mod profile;
pub mod transport;

use crate::validation::FieldErrors;
use errors::AppError;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};
use transport::Transport;

pub use login::LoginForm;
pub use password::{PasswordField, PasswordForm};
pub use profile::ProfileForm;
pub use transport::{HttpTransport, Reply};

/// Shown when the server gives no message or cannot be reached.
pub const MSG_GENERIC_ERROR: &str = "An error occurred.";

/// A form that can be validated locally and sent to its endpoint.
pub trait Form {
    const METHOD: Method;
    const PATH: &'static str;
    /// Notification shown while the request is in flight.
    const PENDING: &'static str;
    /// Notification shown when the server accepts the submission.
    const SUCCESS: &'static str;

    fn validate(&self) -> FieldErrors;

    /// # Errors
    /// Returns an error if the payload cannot be encoded.
    fn payload(&self) -> Result<Value, AppError>;

    /// Called once the server accepted the submission.
    fn on_success(&mut self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Local validation failed; nothing was sent.
    ClientInvalid,
    /// The server answered with a non-2xx status.
    ServerInvalid {
        status: StatusCode,
        message: String,
        errors: BTreeMap<String, String>,
    },
    /// The server could not be reached or its answer could not be read.
    ServerError { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Sending,
    Succeeded,
    Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Loading,
    Success,
    Error,
}

/// Toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct FormController<F> {
    form: F,
    state: SubmissionState,
    errors: FieldErrors,
    notification: Option<Notification>,
}

impl<F: Form> FormController<F> {
    #[must_use]
    pub fn new(form: F) -> Self {
        Self {
            form,
            state: SubmissionState::Idle,
            errors: FieldErrors::new(),
            notification: None,
        }
    }

    #[must_use]
    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Field errors from the last local validation.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Validate locally and, when valid, send exactly one request.
    ///
    /// Takes `&mut self`, so a controller never has two submissions in flight.
    #[instrument(skip_all, fields(path = F::PATH))]
    pub async fn submit<T>(&mut self, transport: &T) -> &SubmissionState
    where
        T: Transport + ?Sized,
    {
        self.state = SubmissionState::Validating;
        self.notification = None;
        self.errors = self.form.validate();

        if !self.errors.is_valid() {
            for (field, error) in &self.errors {
                debug!(field = *field, kind = ?error.kind, "{}", error.message);
            }
            debug!("Rejected locally: {} field(s)", self.errors.len());
            self.state = SubmissionState::Rejected(Rejection::ClientInvalid);
            return &self.state;
        }

        let payload = match self.form.payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.fail(&e);
                return &self.state;
            }
        };

        self.state = SubmissionState::Sending;
        self.notification = Some(Notification::new(NotificationKind::Loading, F::PENDING));

        match transport.send(F::METHOD, F::PATH, &payload).await {
            Ok(reply) if reply.is_success() => {
                self.form.on_success();
                self.errors.clear();
                self.state = SubmissionState::Succeeded;
                self.notification = Some(Notification::new(NotificationKind::Success, F::SUCCESS));
            }

            Ok(Reply { status, body }) => {
                let message = body
                    .message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| MSG_GENERIC_ERROR.to_string());

                debug!("Rejected by server: {} {}", status, message);

                self.notification = Some(Notification::new(NotificationKind::Error, &message));
                self.state = SubmissionState::Rejected(Rejection::ServerInvalid {
                    status,
                    message,
                    errors: body.errors.unwrap_or_default(),
                });
            }

            Err(e) => self.fail(&e),
        }

        &self.state
    }

    fn fail(&mut self, error: &AppError) {
        warn!(kind = ?error.kind(), "Submission failed: {}", error);

        self.notification = Some(Notification::new(
            NotificationKind::Error,
            MSG_GENERIC_ERROR,
        ));
        self.state = SubmissionState::Rejected(Rejection::ServerError {
            message: MSG_GENERIC_ERROR.to_string(),
        });
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::StubTransport;
    use super::*;
    use crate::api::types::FormResponse;

    #[tokio::test]
    async fn client_invalid_sends_nothing() {
        let transport = StubTransport::replying(StatusCode::OK, FormResponse::default());
        let mut controller = FormController::new(LoginForm::new("", "123"));

        let state = controller.submit(&transport).await.clone();

        assert_eq!(state, SubmissionState::Rejected(Rejection::ClientInvalid));
        assert_eq!(controller.errors().len(), 2);
        assert!(controller.notification().is_none());
        assert!(transport.requests().is_empty());
        // the form keeps what the user typed
        assert_eq!(controller.form().password, "123");
    }

    #[tokio::test]
    async fn server_message_is_surfaced() {
        let transport = StubTransport::replying(
            StatusCode::UNAUTHORIZED,
            FormResponse::message("Invalid credentials."),
        );
        let mut controller =
            FormController::new(LoginForm::new("test@example.com", "wrongpassword"));

        let state = controller.submit(&transport).await.clone();

        assert_eq!(
            state,
            SubmissionState::Rejected(Rejection::ServerInvalid {
                status: StatusCode::UNAUTHORIZED,
                message: "Invalid credentials.".to_string(),
                errors: BTreeMap::new(),
            })
        );
        assert_eq!(
            controller.notification(),
            Some(&Notification::new(
                NotificationKind::Error,
                "Invalid credentials."
            ))
        );
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn missing_server_message_falls_back() {
        let transport =
            StubTransport::replying(StatusCode::INTERNAL_SERVER_ERROR, FormResponse::default());
        let mut controller =
            FormController::new(LoginForm::new("test@example.com", "password123"));

        controller.submit(&transport).await;

        assert_eq!(
            controller.notification().map(|n| n.message.as_str()),
            Some(MSG_GENERIC_ERROR)
        );
    }

    #[tokio::test]
    async fn transport_failure_is_server_error() {
        let transport =
            StubTransport::failing(AppError::Network("connection refused".to_string()));
        let mut controller =
            FormController::new(LoginForm::new("test@example.com", "password123"));

        let state = controller.submit(&transport).await.clone();

        assert_eq!(
            state,
            SubmissionState::Rejected(Rejection::ServerError {
                message: MSG_GENERIC_ERROR.to_string()
            })
        );
        assert_eq!(
            controller.notification().map(|n| n.kind),
            Some(NotificationKind::Error)
        );
        assert_eq!(controller.form().email, "test@example.com");
    }

    #[tokio::test]
    async fn local_rejection_clears_previous_notification() {
        let transport = StubTransport::replying(
            StatusCode::UNAUTHORIZED,
            FormResponse::message("Invalid credentials."),
        );
        let mut controller =
            FormController::new(LoginForm::new("test@example.com", "wrongpassword"));

        controller.submit(&transport).await;
        assert!(controller.notification().is_some());

        controller.form_mut().email = String::new();
        let state = controller.submit(&transport).await.clone();

        assert_eq!(state, SubmissionState::Rejected(Rejection::ClientInvalid));
        assert!(controller.notification().is_none());
        assert_eq!(controller.errors().len(), 1);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn resubmit_after_fixing_fields() {
        let transport =
            StubTransport::replying(StatusCode::OK, FormResponse::message("Login successful!"));
        let mut controller = FormController::new(LoginForm::new("", "password123"));

        controller.submit(&transport).await;
        assert_eq!(controller.errors().len(), 1);

        controller.form_mut().email = "test@example.com".to_string();
        let state = controller.submit(&transport).await.clone();

        assert_eq!(state, SubmissionState::Succeeded);
        assert!(controller.errors().is_valid());
        assert_eq!(transport.requests().len(), 1);
    }
}
