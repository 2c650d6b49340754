use serde::Serialize;

use crate::Value;

/// Positional SQL parameters mapped to `?` placeholders.
///
/// Always serialized as a JSON array, empty when there are no parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(pub Vec<Value>);

impl Params {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<()> for Params {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl From<Option<Vec<Value>>> for Params {
    fn from(values: Option<Vec<Value>>) -> Self {
        Self(values.unwrap_or_default())
    }
}

impl<const N: usize> From<[Value; N]> for Params {
    fn from(values: [Value; N]) -> Self {
        Self(values.into())
    }
}

/// Single statement inside a batch request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Statement {
    /// SQL text.
    #[serde(rename = "q")]
    pub sql: String,
    /// Statement parameters.
    pub params: Params,
}

impl Statement {
    pub fn new<P: Into<Params>>(sql: impl Into<String>, params: P) -> Self {
        Self {
            sql: sql.into(),
            params: params.into(),
        }
    }
}

/// Ordered statements sent in one HTTP request.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StatementBatch {
    pub statements: Vec<Statement>,
}

impl StatementBatch {
    /// Batch holding exactly one statement.
    pub fn single(statement: Statement) -> Self {
        Self {
            statements: vec![statement],
        }
    }
}

impl FromIterator<Statement> for StatementBatch {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}
