use super::{errors::AppError, Form};
use crate::validation::{
    password::{validate, PasswordChangeInput, MSG_SUCCESS},
    FieldErrors,
};
use reqwest::Method;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

#[derive(Clone, Default)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    // show current, new, confirm
    visible: [bool; 3],
}

impl PasswordForm {
    #[must_use]
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            current_password: current_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
            visible: [false; 3],
        }
    }

    const fn slot(field: PasswordField) -> usize {
        match field {
            PasswordField::Current => 0,
            PasswordField::New => 1,
            PasswordField::Confirm => 2,
        }
    }

    pub fn toggle_visibility(&mut self, field: PasswordField) {
        if let Some(visible) = self.visible.get_mut(Self::slot(field)) {
            *visible = !*visible;
        }
    }

    #[must_use]
    pub fn is_visible(&self, field: PasswordField) -> bool {
        self.visible
            .get(Self::slot(field))
            .copied()
            .unwrap_or(false)
    }

    #[must_use]
    pub fn input(&self) -> PasswordChangeInput {
        PasswordChangeInput {
            current: self.current_password.clone(),
            next: self.new_password.clone(),
            confirm_next: self.confirm_password.clone(),
        }
    }
}

impl std::fmt::Debug for PasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordForm")
            .field("current_password", &"***")
            .field("new_password", &"***")
            .field("confirm_password", &"***")
            .field("visible", &self.visible)
            .finish()
    }
}

impl Form for PasswordForm {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/password";
    const PENDING: &'static str = "Changing password...";
    const SUCCESS: &'static str = MSG_SUCCESS;

    fn validate(&self) -> FieldErrors {
        validate(&self.input())
    }

    fn payload(&self) -> Result<Value, AppError> {
        serde_json::to_value(self.input())
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
    }

    // secrets do not outlive a successful change
    fn on_success(&mut self) {
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::types::FormResponse,
        client::{
            test_support::StubTransport, FormController, Rejection, SubmissionState,
        },
        validation::password::{
            FIELD_CONFIRM, FIELD_CURRENT, FIELD_NEXT, MSG_MISMATCH, MSG_SAME_AS_CURRENT,
        },
    };
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn toggles_are_independent() {
        let mut form = PasswordForm::default();
        form.toggle_visibility(PasswordField::New);

        assert!(!form.is_visible(PasswordField::Current));
        assert!(form.is_visible(PasswordField::New));
        assert!(!form.is_visible(PasswordField::Confirm));
    }

    #[test]
    fn shows_every_error_at_once() {
        let errors = PasswordForm::default().validate();
        assert_eq!(errors.len(), 3);
        assert!(errors.get(FIELD_CURRENT).is_some());
        assert!(errors.get(FIELD_NEXT).is_some());
        assert!(errors.get(FIELD_CONFIRM).is_some());

        let errors = PasswordForm::new("password123", "newpassword", "different").validate();
        assert_eq!(errors.message(FIELD_CONFIRM), Some(MSG_MISMATCH));

        let errors = PasswordForm::new("password123", "password123", "password123").validate();
        assert_eq!(errors.message(FIELD_NEXT), Some(MSG_SAME_AS_CURRENT));
    }

    #[test]
    fn payload_uses_wire_names() -> Result<(), AppError> {
        let payload = PasswordForm::new("password123", "newpassword123", "newpassword123")
            .payload()?;
        assert_eq!(
            payload,
            json!({
                "currentPassword": "password123",
                "newPassword": "newpassword123",
                "confirmPassword": "newpassword123"
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn success_clears_fields() {
        let transport = StubTransport::replying(
            StatusCode::OK,
            FormResponse::message("Password changed successfully!").with_success(),
        );
        let mut controller = FormController::new(PasswordForm::new(
            "password123",
            "newpassword123",
            "newpassword123",
        ));

        assert_eq!(
            controller.submit(&transport).await,
            &SubmissionState::Succeeded
        );

        let form = controller.form();
        assert!(form.current_password.is_empty());
        assert!(form.new_password.is_empty());
        assert!(form.confirm_password.is_empty());
        assert!(controller.errors().is_valid());
    }

    #[tokio::test]
    async fn failures_keep_fields() {
        let transport = StubTransport::replying(
            StatusCode::UNAUTHORIZED,
            FormResponse::message("Current password is incorrect."),
        );
        let mut controller = FormController::new(PasswordForm::new(
            "wrongpassword",
            "newpassword123",
            "newpassword123",
        ));

        let state = controller.submit(&transport).await.clone();
        assert!(matches!(
            state,
            SubmissionState::Rejected(Rejection::ServerInvalid { ref message, .. })
                if message == "Current password is incorrect."
        ));
        assert_eq!(controller.form().current_password, "wrongpassword");

        // local rejection keeps values too
        let mut controller = FormController::new(PasswordForm::new("", "123", "different"));
        controller.submit(&transport).await;
        assert_eq!(controller.form().new_password, "123");
        assert_eq!(controller.errors().len(), 3);
    }
}
