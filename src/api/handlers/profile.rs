use crate::{
    api::types::{FormResponse, MSG_MISSING_PAYLOAD},
    validation::{
        profile::{validate, ProfileInput},
        Audience,
    },
};
use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Local;
use tracing::{debug, info, instrument};

#[utoipa::path(
    put,
    path= "/profile",
    request_body = ProfileInput,
    responses (
        (status = 200, description = "Profile updated", body = FormResponse, content_type = "application/json"),
        (status = 400, description = "Validation failed, errors keyed by field", body = FormResponse),
    ),
    tag= "profile"
)]
#[instrument(skip(payload))]
pub async fn update_profile(payload: Option<Json<ProfileInput>>) -> impl IntoResponse {
    let input: ProfileInput = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(FormResponse::message(MSG_MISSING_PAYLOAD)),
            )
        }
    };

    let errors = validate(&input, Audience::Server, Local::now().date_naive());
    if !errors.is_valid() {
        debug!("Validation failed: {} field(s)", errors.len());

        return (
            StatusCode::BAD_REQUEST,
            Json(FormResponse::validation_failed(errors.messages())),
        );
    }

    // mock action, nothing is stored
    info!(
        username = %input.username,
        full_name = %input.full_name,
        email = %input.email,
        phone = %input.phone,
        birth_date = %input.birth_date,
        bio = %input.bio,
        "Updating profile"
    );

    (StatusCode::OK, Json(FormResponse::default().with_success()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request},
        routing::put,
        Router,
    };
    use chrono::Duration;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn call_json(payload: Value) -> Result<(StatusCode, Value)> {
        let app = Router::new().route("/profile", put(update_profile));

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/profile")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))?,
            )
            .await?;

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    fn valid_profile() -> Value {
        json!({
            "username": "testuser",
            "fullName": "Test User",
            "email": "test@example.com",
            "phone": "1234567890",
            "birthDate": "1990-01-01",
            "bio": "Software developer"
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut profile = valid_profile();
        profile[field] = value;
        profile
    }

    async fn assert_rejected(payload: Value, field: &str, message: &str) -> Result<()> {
        let (status, body) = call_json(payload).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"message": "Validation failed", "errors": {field: message}})
        );
        Ok(())
    }

    #[tokio::test]
    async fn complete_profile() -> Result<()> {
        let (status, body) = call_json(valid_profile()).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));
        Ok(())
    }

    #[tokio::test]
    async fn field_rules() -> Result<()> {
        assert_rejected(
            with("username", json!("user")),
            "username",
            "Username must be at least 6 characters.",
        )
        .await?;
        assert_rejected(with("fullName", json!("")), "fullName", "Full name is required.").await?;
        assert_rejected(
            with("email", json!("invalid-email")),
            "email",
            "Must be a valid email format.",
        )
        .await?;
        assert_rejected(with("phone", json!("123")), "phone", "Phone must be 10-15 digits.")
            .await?;
        assert_rejected(
            with("phone", json!("1234567890123456")),
            "phone",
            "Phone must be 10-15 digits.",
        )
        .await?;
        assert_rejected(
            with("bio", json!("a".repeat(161))),
            "bio",
            "Bio must be 160 characters or less.",
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn future_birth_date() -> Result<()> {
        let future = (Local::now().date_naive() + Duration::days(2))
            .format("%Y-%m-%d")
            .to_string();
        assert_rejected(
            with("birthDate", json!(future)),
            "birthDate",
            "Birth date cannot be in the future.",
        )
        .await
    }

    #[tokio::test]
    async fn birth_date_that_is_not_a_date() -> Result<()> {
        for value in ["not-a-date", "1990/01/15", "January 15, 1990"] {
            let (status, body) = call_json(with("birthDate", json!(value))).await?;
            assert_eq!(status, StatusCode::OK, "{value}");
            assert_eq!(body, json!({"success": true}));
        }
        Ok(())
    }

    #[tokio::test]
    async fn optional_fields() -> Result<()> {
        let yesterday = (Local::now().date_naive() - Duration::days(1))
            .format("%Y-%m-%d")
            .to_string();

        for payload in [
            with("birthDate", json!(yesterday)),
            with("bio", json!("a".repeat(160))),
            with("bio", json!("")),
            with("birthDate", json!("")),
        ] {
            let (status, body) = call_json(payload).await?;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"success": true}));
        }

        let mut without_bio = valid_profile();
        if let Some(map) = without_bio.as_object_mut() {
            map.remove("bio");
        }
        let (status, _) = call_json(without_bio).await?;
        assert_eq!(status, StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn multiple_errors() -> Result<()> {
        let (status, body) = call_json(json!({
            "username": "usr",
            "fullName": "",
            "email": "invalid",
            "phone": "123"
        }))
        .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "message": "Validation failed",
                "errors": {
                    "username": "Username must be at least 6 characters.",
                    "fullName": "Full name is required.",
                    "email": "Must be a valid email format.",
                    "phone": "Phone must be 10-15 digits."
                }
            })
        );
        Ok(())
    }
}
