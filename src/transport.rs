use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use tracing::debug;

use crate::{ClientOptions, Config, Result, ResultBatch, StatementBatch, TursoError};

/// Sends a statement batch to the service described by a [`Config`].
///
/// Implementations must be thread-safe (Send + Sync) so one transport can
/// be shared by every clone of a [`crate::TursoClient`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one round trip and returns one result per statement.
    async fn execute(&self, batch: &StatementBatch, config: &Config) -> Result<ResultBatch>;
}

/// Transport backed by a `reqwest` HTTP client.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    options: ClientOptions,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("options", &self.options)
            .finish()
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    /// Creates a transport with a custom request timeout.
    pub fn with_options(options: ClientOptions) -> Self {
        Self {
            http: reqwest::Client::new(),
            options,
        }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, batch: &StatementBatch, config: &Config) -> Result<ResultBatch> {
        let started = Instant::now();
        debug!(
            url = %config.service_url,
            statements = batch.statements.len(),
            "sending turso request"
        );

        let response = self
            .http
            .post(&config.service_url)
            .header(
                header::AUTHORIZATION,
                bearer_authorization(&config.credential),
            )
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(Duration::from_millis(self.options.timeout_ms))
            .json(batch)
            .send()
            .await
            .map_err(TursoError::Transport)?;

        let status = response.status();
        // Body is read before the status check so error bodies are kept verbatim.
        let body = response.text().await.map_err(TursoError::Transport)?;

        debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "turso response received"
        );

        if status != StatusCode::OK {
            return Err(TursoError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<ResultBatch>(&body)
            .map_err(|source| TursoError::Decode { source, body })
    }
}

fn bearer_authorization(credential: &str) -> String {
    format!("Bearer {credential}")
}
