use crate::client::{
    transport::Transport, Form, FormController, HttpTransport, LoginForm, PasswordForm,
    ProfileForm, Rejection, SubmissionState,
};
use anyhow::{bail, Result};

#[derive(Debug)]
pub enum Submission {
    Login(LoginForm),
    Password(PasswordForm),
    Profile(ProfileForm),
}

#[derive(Debug)]
pub struct Args {
    pub url: String,
    pub submission: Submission,
}

/// What the user sees after one submission.
#[derive(Debug, PartialEq, Eq)]
pub struct Report {
    pub accepted: bool,
    pub lines: Vec<String>,
}

/// Submit the form once and print the outcome.
/// # Errors
/// Returns an error if the URL is invalid or the submission was rejected.
pub async fn execute(args: Args) -> Result<()> {
    let transport = HttpTransport::new(&args.url)?;

    let report = submit(args.submission, &transport).await;

    for line in &report.lines {
        println!("{line}");
    }

    if !report.accepted {
        bail!("submission rejected");
    }

    Ok(())
}

pub async fn submit<T>(submission: Submission, transport: &T) -> Report
where
    T: Transport + ?Sized,
{
    match submission {
        Submission::Login(form) => run(form, transport).await,
        Submission::Password(form) => run(form, transport).await,
        Submission::Profile(form) => run(form, transport).await,
    }
}

async fn run<F, T>(form: F, transport: &T) -> Report
where
    F: Form,
    T: Transport + ?Sized,
{
    let mut controller = FormController::new(form);
    let state = controller.submit(transport).await.clone();

    let mut lines: Vec<String> = controller
        .notification()
        .map(|notification| notification.message.clone())
        .into_iter()
        .collect();

    match &state {
        SubmissionState::Rejected(Rejection::ClientInvalid) => {
            lines.extend(
                controller
                    .errors()
                    .iter()
                    .map(|(field, error)| format!("  {field}: {}", error.message)),
            );
        }
        SubmissionState::Rejected(Rejection::ServerInvalid { errors, .. }) => {
            lines.extend(
                errors
                    .iter()
                    .map(|(field, message)| format!("  {field}: {message}")),
            );
        }
        _ => {}
    }

    Report {
        accepted: state == SubmissionState::Succeeded,
        lines,
    }
}
