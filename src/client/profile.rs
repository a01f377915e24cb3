use super::{errors::AppError, Form};
use crate::validation::{
    profile::{validate, ProfileInput, MSG_SUCCESS},
    Audience, FieldErrors,
};
use chrono::Local;
use reqwest::Method;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub bio: String,
}

impl ProfileForm {
    #[must_use]
    pub fn input(&self) -> ProfileInput {
        ProfileInput {
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            birth_date: self.birth_date.clone(),
            bio: self.bio.clone(),
        }
    }
}

impl Form for ProfileForm {
    const METHOD: Method = Method::PUT;
    const PATH: &'static str = "/profile";
    const PENDING: &'static str = "Updating profile...";
    const SUCCESS: &'static str = MSG_SUCCESS;

    fn validate(&self) -> FieldErrors {
        validate(&self.input(), Audience::Client, Local::now().date_naive())
    }

    fn payload(&self) -> Result<Value, AppError> {
        serde_json::to_value(self.input())
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
    }
}
