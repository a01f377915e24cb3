use super::FormsState;
use crate::{
    api::types::{FormResponse, MSG_MISSING_PAYLOAD},
    validation::password::{change, PasswordChangeError, PasswordChangeInput, MSG_SUCCESS},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use tracing::{debug, info, instrument, warn};

#[utoipa::path(
    post,
    path= "/password",
    request_body = PasswordChangeInput,
    responses (
        (status = 200, description = "Password changed", body = FormResponse, content_type = "application/json"),
        (status = 400, description = "Validation failed, errors keyed by field", body = FormResponse),
        (status = 401, description = "Current password is incorrect", body = FormResponse),
    ),
    tag= "password"
)]
#[instrument(skip(state, payload))]
pub async fn change_password(
    state: Extension<FormsState>,
    payload: Option<Json<PasswordChangeInput>>,
) -> impl IntoResponse {
    let input: PasswordChangeInput = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(FormResponse::message(MSG_MISSING_PAYLOAD)),
            )
        }
    };

    debug!("input: {:?}", input);

    match change(&input, state.account(), state.credentials()) {
        Ok(()) => {
            // mock action, nothing is stored
            info!(
                account = state.account(),
                current = "***",
                new = "***",
                "Changing password"
            );

            (
                StatusCode::OK,
                Json(FormResponse::message(MSG_SUCCESS).with_success()),
            )
        }

        Err(PasswordChangeError::Validation(errors)) => {
            debug!("Validation failed: {} field(s)", errors.len());

            (
                StatusCode::BAD_REQUEST,
                Json(FormResponse::validation_failed(errors.messages())),
            )
        }

        Err(e @ PasswordChangeError::IncorrectCurrent) => {
            warn!("Password change rejected: {}", e);

            (
                StatusCode::UNAUTHORIZED,
                Json(FormResponse::message(e.to_string())),
            )
        }
    }
}
