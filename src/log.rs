//! Helpers for writing application log rows into the `logs` table.

use std::fmt;

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::{Result, TursoError};

/// Creates the table written by [`crate::TursoClient::log`].
pub const LOGS_TABLE_DDL: &str = "CREATE TABLE IF NOT EXISTS logs (\
timestamp TEXT, \
application TEXT, \
level TEXT, \
message TEXT\
)";

pub(crate) const INSERT_LOG_SQL: &str =
    "INSERT INTO logs (timestamp, application, level, message) VALUES (?, ?, ?, ?)";

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Severity tag stored in the `level` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins `message` and `key=value` pairs with `", "`.
///
/// `key_values` is read as alternating keys and values; an unmatched
/// trailing key is dropped.
pub fn format_message(message: &str, key_values: &[&(dyn fmt::Display + Sync)]) -> String {
    let mut parts = Vec::with_capacity(1 + key_values.len() / 2);
    parts.push(message.to_owned());
    parts.extend(
        key_values
            .chunks_exact(2)
            .map(|pair| format!("{}={}", pair[0], pair[1])),
    );
    parts.join(", ")
}

/// Formats `now` as `dd/mm/YYYY HH:MM:SS` in `timezone`.
///
/// `timezone` is an IANA name, `""` for UTC or `"Local"` for the system zone.
pub fn format_timestamp(now: DateTime<Utc>, timezone: &str) -> Result<String> {
    let formatted = match timezone {
        "" | "UTC" => now.format(TIMESTAMP_FORMAT).to_string(),
        "Local" => now.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
        name => {
            let tz: Tz = name
                .parse()
                .map_err(|_| TursoError::InvalidTimezone(name.to_owned()))?;
            now.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string()
        }
    };
    Ok(formatted)
}
