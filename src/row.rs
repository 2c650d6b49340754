//! Column-name keyed view of one result row.

use std::collections::HashMap;

use crate::Value;

/// One result row keyed by column name.
///
/// Values stay as raw JSON; converting to caller types happens in the row
/// converter passed to [`crate::scan`] or [`crate::TursoClient::query`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, Value>,
}

impl Row {
    /// Pairs `columns` with `values` up to the shorter of the two.
    pub fn from_parts(columns: &[String], values: &[Value]) -> Self {
        let values = columns
            .iter()
            .zip(values)
            .map(|(column, value)| (column.clone(), value.clone()))
            .collect();
        Self { values }
    }

    /// Returns a value by exact column name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns an integer value by column name.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_i64()
    }

    /// Returns a numeric value by column name, widening integers.
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name)?.as_f64()
    }

    /// Returns a text value by column name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_str()
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name)?.as_bool()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
