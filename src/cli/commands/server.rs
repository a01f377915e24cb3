use crate::credentials::MOCK_IDENTIFIER;
use clap::{Arg, Command};

pub const NAME: &str = "server";
pub const ARG_PORT: &str = "port";
pub const ARG_FRONTEND_BASE_URL: &str = "frontend-base-url";
pub const ARG_ACCOUNT: &str = "account";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Serve the login, password and profile endpoints")
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("ACCOUNT_FORMS_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_FRONTEND_BASE_URL)
                .long("frontend-base-url")
                .help("Origin allowed to call the API from a browser, example: https://forms.tld")
                .env("ACCOUNT_FORMS_FRONTEND_BASE_URL"),
        )
        .arg(
            Arg::new(ARG_ACCOUNT)
                .long("account")
                .help("Account whose password the password form changes")
                .default_value(MOCK_IDENTIFIER)
                .env("ACCOUNT_FORMS_ACCOUNT"),
        )
}
