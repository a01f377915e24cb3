use super::FormsState;
use crate::{
    api::types::{FormResponse, MSG_MISSING_PAYLOAD},
    validation::login::{authenticate, LoginError, LoginInput, MSG_SUCCESS},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use tracing::{debug, info, instrument, warn};

#[utoipa::path(
    post,
    path= "/login",
    request_body = LoginInput,
    responses (
        (status = 200, description = "Login successful", body = FormResponse, content_type = "application/json"),
        (status = 400, description = "Missing email or password, or password too short", body = FormResponse),
        (status = 401, description = "Invalid credentials", body = FormResponse),
    ),
    tag= "login"
)]
#[instrument(skip(state, payload))]
pub async fn login(
    state: Extension<FormsState>,
    payload: Option<Json<LoginInput>>,
) -> impl IntoResponse {
    let input: LoginInput = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(FormResponse::message(MSG_MISSING_PAYLOAD)),
            )
        }
    };

    debug!("input: {:?}", input);

    match authenticate(&input, state.credentials()) {
        Ok(()) => {
            info!("Login successful");

            (StatusCode::OK, Json(FormResponse::message(MSG_SUCCESS)))
        }

        Err(e) => {
            warn!("Login rejected: {}", e);

            (status_for(e), Json(FormResponse::message(e.to_string())))
        }
    }
}

/// Correctable input is a 400, a rejected pair a 401.
const fn status_for(error: LoginError) -> StatusCode {
    if error.kind().is_field_level() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::UNAUTHORIZED
    }
}
