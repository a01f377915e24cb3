use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const MSG_VALIDATION_FAILED: &str = "Validation failed";
pub const MSG_MISSING_PAYLOAD: &str = "Missing payload";

/// JSON body shared by every form endpoint; absent parts are omitted.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FormResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl FormResponse {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn validation_failed(errors: BTreeMap<String, String>) -> Self {
        Self {
            message: Some(MSG_VALIDATION_FAILED.to_string()),
            errors: Some(errors),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_success(mut self) -> Self {
        self.success = Some(true);
        self
    }
}
