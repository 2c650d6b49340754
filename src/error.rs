/// Boxed error produced by caller-supplied row converters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum TursoError {
    /// No configuration has been installed with [`crate::TursoClient::init`].
    #[error("client not initialised, call init() first")]
    NotInitialized,
    /// Credential is not a three-segment token.
    #[error("invalid db key")]
    InvalidCredential,
    /// Service URL has the wrong scheme or domain.
    #[error("invalid db url")]
    InvalidUrl,
    /// Configuration looked valid but the `SELECT 1` probe failed.
    #[error("test failed: {source}")]
    SelfTest {
        /// Failure reported by the probe request.
        #[source]
        source: Box<TursoError>,
    },
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// Non-200 HTTP status code with raw response body.
    #[error("turso returned status {status}: {body}")]
    Http { status: u16, body: String },
    /// Response body was not a valid result batch.
    #[error("failed to decode response: {source} (body: {body})")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Raw response body.
        body: String,
    },
    /// Row converter rejected a row; the scan was aborted.
    #[error("scan error at row {row}: {source}")]
    Conversion {
        /// Zero-based index of the failing row.
        row: usize,
        #[source]
        source: BoxError,
    },
    /// Timezone name passed to the log helper is not a known IANA zone.
    #[error("unknown timezone '{0}'")]
    InvalidTimezone(String),
}

impl TursoError {
    /// Returns `true` for configuration-shape errors raised before any I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::NotInitialized | Self::InvalidCredential | Self::InvalidUrl
        )
    }
}
