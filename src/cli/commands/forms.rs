//! Client subcommands: fill a form from flags and submit it.
//!
//! Every field defaults to the empty string so the form's own validation
//! decides what is missing.

use clap::{Arg, Command};

pub const LOGIN: &str = "login";
pub const PASSWORD: &str = "password";
pub const PROFILE: &str = "profile";

pub const ARG_URL: &str = "url";

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

pub const ARG_CURRENT_PASSWORD: &str = "current-password";
pub const ARG_NEW_PASSWORD: &str = "new-password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";

pub const ARG_USERNAME: &str = "username";
pub const ARG_FULL_NAME: &str = "full-name";
pub const ARG_PHONE: &str = "phone";
pub const ARG_BIRTH_DATE: &str = "birth-date";
pub const ARG_BIO: &str = "bio";

fn url_arg() -> Arg {
    Arg::new(ARG_URL)
        .short('u')
        .long("url")
        .help("Base URL of the forms server")
        .default_value("http://localhost:8080")
        .env("ACCOUNT_FORMS_URL")
}

fn field(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).help(help).default_value("")
}

#[must_use]
pub fn login() -> Command {
    Command::new(LOGIN)
        .about("Submit the login form")
        .arg(url_arg())
        .arg(field(ARG_EMAIL, "Email address"))
        .arg(field(ARG_PASSWORD, "Password").env("ACCOUNT_FORMS_PASSWORD"))
}

#[must_use]
pub fn password() -> Command {
    Command::new(PASSWORD)
        .about("Submit the password change form")
        .arg(url_arg())
        .arg(field(ARG_CURRENT_PASSWORD, "Current password").env("ACCOUNT_FORMS_CURRENT_PASSWORD"))
        .arg(field(ARG_NEW_PASSWORD, "New password").env("ACCOUNT_FORMS_NEW_PASSWORD"))
        .arg(field(ARG_CONFIRM_PASSWORD, "New password again"))
}

#[must_use]
pub fn profile() -> Command {
    Command::new(PROFILE)
        .about("Submit the profile update form")
        .arg(url_arg())
        .arg(field(ARG_USERNAME, "Username, at least 6 characters"))
        .arg(field(ARG_FULL_NAME, "Full name"))
        .arg(field(ARG_EMAIL, "Email address"))
        .arg(field(ARG_PHONE, "Phone number, 10 to 15 digits"))
        .arg(field(ARG_BIRTH_DATE, "Birth date, YYYY-MM-DD (optional)"))
        .arg(field(ARG_BIO, "Short bio, up to 160 characters (optional)"))
}
