use super::handlers::{health, login, password, profile};
use utoipa::OpenApi;

// Info (title, version, description, contact, license) comes from Cargo.toml.
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        login::login,
        password::change_password,
        profile::update_profile,
    ),
    tags(
        (name = "login", description = "Email and password login against the mock account"),
        (name = "password", description = "Change the password of the mock account"),
        (name = "profile", description = "Validate and accept profile updates"),
        (name = "health", description = "Service status"),
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
