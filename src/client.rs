use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::{
    error::BoxError,
    log::{format_message, format_timestamp, INSERT_LOG_SQL, LOGS_TABLE_DDL},
    scan, ClientOptions, Config, ConfigStore, HttpTransport, LogLevel, Params, Result,
    ResultBatch, Row, Statement, StatementBatch, Transport, Value,
};

/// Client for the Turso HTTP statement API.
///
/// Clones share the same configuration store and transport, so a
/// configuration installed through one clone is visible to all of them.
#[derive(Clone)]
pub struct TursoClient {
    store: Arc<ConfigStore>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for TursoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TursoClient")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl Default for TursoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TursoClient {
    /// Creates an uninitialized client using [`HttpTransport`].
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()))
    }

    /// Creates an uninitialized client with custom HTTP options.
    pub fn with_options(options: ClientOptions) -> Self {
        Self::with_transport(Arc::new(HttpTransport::with_options(options)))
    }

    /// Creates an uninitialized client over any [`Transport`].
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            store: Arc::new(ConfigStore::new()),
            transport,
        }
    }

    /// Validates `config`, installs it and runs a `SELECT 1` self-test.
    ///
    /// May be called again to reconfigure. A failed self-test leaves the
    /// client uninitialized.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simple_turso::{Config, TursoClient};
    ///
    /// # async fn run() -> simple_turso::Result<()> {
    /// let db = TursoClient::new();
    /// db.init(Config::new("libsql://my-db.turso.io", "header.payload.signature"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn init(&self, config: Config) -> Result<()> {
        self.store.init(self.transport.as_ref(), config).await
    }

    /// Returns a snapshot of the active configuration.
    pub async fn config(&self) -> Result<Config> {
        self.store.active().await
    }

    /// Sends `statements` in one request and returns every result in order.
    pub async fn execute<I>(&self, statements: I) -> Result<ResultBatch>
    where
        I: IntoIterator<Item = Statement>,
    {
        let batch: StatementBatch = statements.into_iter().collect();
        let config = self.store.active().await?;
        self.transport.execute(&batch, &config).await
    }

    /// Executes a statement whose result is not needed (DDL, INSERT, ...).
    pub async fn run<P: Into<Params>>(&self, sql: &str, params: P) -> Result<()> {
        self.execute([Statement::new(sql, params)]).await?;
        Ok(())
    }

    /// Executes a query and maps each row of its result through `convert`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simple_turso::TursoClient;
    ///
    /// # async fn run(db: TursoClient) -> simple_turso::Result<()> {
    /// let values = db
    ///     .query("SELECT 100 AS val", (), |row| row.get_f64("val").ok_or("missing val"))
    ///     .await?;
    /// assert_eq!(values, vec![100.0]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn query<T, E, F, P>(&self, sql: &str, params: P, convert: F) -> Result<Vec<T>>
    where
        P: Into<Params>,
        F: FnMut(&Row) -> std::result::Result<T, E>,
        E: Into<BoxError>,
    {
        let batch = self.execute([Statement::new(sql, params)]).await?;
        scan(batch, convert)
    }

    /// Writes one row into the `logs` table.
    ///
    /// `key_values` alternates keys and values, rendered as `key=value`
    /// after `message`; an unmatched trailing key is dropped. The timestamp
    /// is taken now in `timezone` (IANA name, `""` for UTC, or `"Local"`).
    /// An uninitialized client fails before the timezone is looked at.
    pub async fn log(
        &self,
        level: LogLevel,
        message: &str,
        application: &str,
        timezone: &str,
        key_values: &[&(dyn fmt::Display + Sync)],
    ) -> Result<()> {
        let config = self.store.active().await?;
        let timestamp = format_timestamp(Utc::now(), timezone)?;
        let full_message = format_message(message, key_values);
        debug!(%level, application, "writing log row");

        let insert = Statement::new(
            INSERT_LOG_SQL,
            [
                Value::from(timestamp),
                Value::from(application),
                Value::from(level.as_str()),
                Value::from(full_message),
            ],
        );
        self.transport
            .execute(&StatementBatch::single(insert), &config)
            .await?;
        Ok(())
    }

    /// Creates the `logs` table used by [`TursoClient::log`] if missing.
    pub async fn ensure_logs_table(&self) -> Result<()> {
        self.run(LOGS_TABLE_DDL, ()).await
    }
}
