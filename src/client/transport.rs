//! Sends form payloads to the server. One request per call: no retries and no
//! timeout policy beyond the one configured on the HTTP client.

use super::errors::AppError;
use crate::{api::types::FormResponse, APP_USER_AGENT};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Default request timeout applied by [`HttpTransport`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Status and decoded body of a server answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: FormResponse,
}

impl Reply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `payload` as JSON to `path`.
    ///
    /// # Errors
    /// Returns an error when the server cannot be reached or its answer cannot
    /// be read. Non-2xx answers are a [`Reply`], not an error.
    async fn send(&self, method: Method, path: &str, payload: &Value) -> Result<Reply, AppError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// # Errors
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// # Errors
    /// See [`HttpTransport::new`].
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|err| AppError::Config(format!("Invalid base URL {base_url}: {err}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "Base URL must use http or https: {base_url}"
            )));
        }

        // keep any path prefix when joining endpoint paths
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// # Errors
    /// Returns an error if `path` cannot be joined onto the base URL.
    pub fn build_url(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| AppError::Config(format!("Invalid path {path}: {err}")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, payload))]
    async fn send(&self, method: Method, path: &str, payload: &Value) -> Result<Reply, AppError> {
        let url = self.build_url(path)?;

        let response = self.client.request(method, url).json(payload).send().await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        debug!("status: {}, body: {} bytes", status, bytes.len());

        let body = if bytes.is_empty() {
            FormResponse::default()
        } else {
            match serde_json::from_slice::<FormResponse>(&bytes) {
                Ok(body) => body,
                Err(err) if status.is_server_error() => {
                    return Err(AppError::Parse(format!("Failed to decode response: {err}")))
                }
                Err(_) => FormResponse::default(),
            }
        };

        Ok(Reply { status, body })
    }
}
