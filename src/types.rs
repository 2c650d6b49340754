use serde::Deserialize;

use crate::Value;

/// Column names plus positional row values for one statement.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TabularResult {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

/// Response entry for one submitted statement.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StatementResult {
    #[serde(default)]
    pub results: TabularResult,
}

/// One [`StatementResult`] per submitted statement, in submission order.
pub type ResultBatch = Vec<StatementResult>;
