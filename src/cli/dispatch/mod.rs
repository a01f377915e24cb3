use crate::cli::{
    actions::{
        server,
        submit::{self, Submission},
        Action,
    },
    commands::{forms, server as server_cmd},
};
use crate::client::{LoginForm, PasswordForm, ProfileForm};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;

fn value(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn url(matches: &ArgMatches) -> Result<String> {
    matches
        .get_one::<String>(forms::ARG_URL)
        .cloned()
        .context("missing required argument: --url")
}

/// # Errors
/// Returns an error if the subcommand is unknown or required arguments are missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((server_cmd::NAME, sub_m)) => Ok(Action::Server(server::Args {
            port: sub_m
                .get_one::<u16>(server_cmd::ARG_PORT)
                .copied()
                .unwrap_or(8080),
            frontend_base_url: sub_m
                .get_one::<String>(server_cmd::ARG_FRONTEND_BASE_URL)
                .cloned(),
            account: sub_m
                .get_one::<String>(server_cmd::ARG_ACCOUNT)
                .cloned()
                .context("missing required argument: --account")?,
        })),

        Some((forms::LOGIN, sub_m)) => Ok(Action::Submit(submit::Args {
            url: url(sub_m)?,
            submission: Submission::Login(LoginForm::new(
                value(sub_m, forms::ARG_EMAIL),
                value(sub_m, forms::ARG_PASSWORD),
            )),
        })),

        Some((forms::PASSWORD, sub_m)) => Ok(Action::Submit(submit::Args {
            url: url(sub_m)?,
            submission: Submission::Password(PasswordForm::new(
                value(sub_m, forms::ARG_CURRENT_PASSWORD),
                value(sub_m, forms::ARG_NEW_PASSWORD),
                value(sub_m, forms::ARG_CONFIRM_PASSWORD),
            )),
        })),

        Some((forms::PROFILE, sub_m)) => Ok(Action::Submit(submit::Args {
            url: url(sub_m)?,
            submission: Submission::Profile(ProfileForm {
                username: value(sub_m, forms::ARG_USERNAME),
                full_name: value(sub_m, forms::ARG_FULL_NAME),
                email: value(sub_m, forms::ARG_EMAIL),
                phone: value(sub_m, forms::ARG_PHONE),
                birth_date: value(sub_m, forms::ARG_BIRTH_DATE),
                bio: value(sub_m, forms::ARG_BIO),
            }),
        })),

        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn server_action() {
        temp_env::with_vars(
            [
                ("ACCOUNT_FORMS_PORT", None::<&str>),
                ("ACCOUNT_FORMS_FRONTEND_BASE_URL", None),
                ("ACCOUNT_FORMS_ACCOUNT", None),
            ],
            || {
                let matches = commands::new().get_matches_from(vec![
                    "account-forms",
                    "server",
                    "-p",
                    "9090",
                    "--account",
                    "jane@example.com",
                ]);

                match handler(&matches) {
                    Ok(Action::Server(args)) => {
                        assert_eq!(args.port, 9090);
                        assert_eq!(args.account, "jane@example.com");
                        assert!(args.frontend_base_url.is_none());
                    }
                    other => panic!("unexpected action: {other:?}"),
                }
            },
        );
    }

    #[test]
    fn profile_action_keeps_unset_fields_empty() {
        temp_env::with_vars([("ACCOUNT_FORMS_URL", Some("http://forms.test:3000"))], || {
            let matches = commands::new().get_matches_from(vec![
                "account-forms",
                "profile",
                "--username",
                "janedoe",
                "--full-name",
                "Jane Doe",
            ]);

            match handler(&matches) {
                Ok(Action::Submit(args)) => {
                    assert_eq!(args.url, "http://forms.test:3000");
                    match args.submission {
                        Submission::Profile(form) => {
                            assert_eq!(form.username, "janedoe");
                            assert_eq!(form.full_name, "Jane Doe");
                            assert_eq!(form.birth_date, "");
                            assert_eq!(form.bio, "");
                        }
                        other => panic!("unexpected submission: {other:?}"),
                    }
                }
                other => panic!("unexpected action: {other:?}"),
            }
        });
    }

    #[test]
    fn password_action() {
        temp_env::with_vars(
            [
                ("ACCOUNT_FORMS_CURRENT_PASSWORD", None::<&str>),
                ("ACCOUNT_FORMS_NEW_PASSWORD", None),
            ],
            || {
                let matches = commands::new().get_matches_from(vec![
                    "account-forms",
                    "password",
                    "--current-password",
                    "password123",
                    "--new-password",
                    "newpassword456",
                    "--confirm-password",
                    "newpassword456",
                ]);

                match handler(&matches) {
                    Ok(Action::Submit(submit::Args {
                        submission: Submission::Password(form),
                        ..
                    })) => {
                        assert_eq!(form.current_password, "password123");
                        assert_eq!(form.new_password, "newpassword456");
                        assert_eq!(form.confirm_password, "newpassword456");
                    }
                    other => panic!("unexpected action: {other:?}"),
                }
            },
        );
    }
}
