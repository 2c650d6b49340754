//! `simple-turso` is a minimal async client for the Turso HTTP SQL API.
//!
//! One [`TursoClient`] holds one validated configuration and exposes:
//! - [`TursoClient::init`] — validate, normalize and self-test a [`Config`]
//! - [`TursoClient::run`] — execute a statement, discarding its result
//! - [`TursoClient::query`] — execute a query and map rows into caller types
//! - [`TursoClient::log`] — append a row to the `logs` table

mod client;
mod config;
mod error;
mod log;
mod options;
mod params;
mod row;
mod scan;
mod store;
mod transport;
mod types;
pub mod validate;

pub use client::TursoClient;
pub use config::Config;
pub use error::{BoxError, TursoError};
pub use log::{format_message, format_timestamp, LogLevel, LOGS_TABLE_DDL};
pub use options::ClientOptions;
pub use params::{Params, Statement, StatementBatch};
pub use row::Row;
pub use scan::scan;
pub use serde_json::Value;
pub use store::{ConfigStore, SELF_TEST_QUERY};
pub use transport::{HttpTransport, Transport};
pub use types::{ResultBatch, StatementResult, TabularResult};

pub type Result<T> = std::result::Result<T, TursoError>;
