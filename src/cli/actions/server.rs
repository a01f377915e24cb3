use crate::{
    api::{self, FormsState},
    credentials::{MockCredentials, MOCK_SECRET},
};
use anyhow::Result;
use secrecy::SecretString;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub frontend_base_url: Option<String>,
    pub account: String,
}

/// Build the mock account and serve the form endpoints.
/// # Errors
/// Returns an error if the frontend origin is invalid or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    info!(
        port = args.port,
        account = %args.account,
        frontend_base_url = args.frontend_base_url.as_deref().unwrap_or("none"),
        "Startup configuration"
    );

    api::new(args.port, args.frontend_base_url.as_deref(), state(&args.account)).await
}

fn state(account: &str) -> FormsState {
    let credentials = MockCredentials::new(account, SecretString::from(MOCK_SECRET));
    FormsState::new(Arc::new(credentials), account)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_uses_the_configured_account() {
        let state = state("jane@example.com");

        assert_eq!(state.account(), "jane@example.com");
        assert!(state.credentials().verify("jane@example.com", MOCK_SECRET));
        assert!(!state.credentials().verify("test@example.com", MOCK_SECRET));
    }
}
