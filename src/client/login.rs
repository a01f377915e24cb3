use super::{errors::AppError, Form};
use crate::validation::{
    login::{validate, LoginInput, MSG_SUCCESS},
    FieldErrors,
};
use reqwest::Method;
use serde_json::Value;

#[derive(Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    show_password: bool,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            show_password: false,
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    #[must_use]
    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    #[must_use]
    pub fn input(&self) -> LoginInput {
        LoginInput {
            identifier: self.email.clone(),
            secret: self.password.clone(),
        }
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"***")
            .field("show_password", &self.show_password)
            .finish()
    }
}

impl Form for LoginForm {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/login";
    const PENDING: &'static str = "Logging in...";
    const SUCCESS: &'static str = MSG_SUCCESS;

    fn validate(&self) -> FieldErrors {
        validate(&self.input())
    }

    fn payload(&self) -> Result<Value, AppError> {
        serde_json::to_value(self.input())
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
    }
}
