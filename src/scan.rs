use crate::{error::BoxError, ResultBatch, Row, TursoError};

/// Maps the rows of the first result in `batch` through `convert`.
///
/// An empty batch yields an empty vector. Rows shorter or longer than the
/// column list are truncated to the common length. The first converter
/// error aborts the scan and discards rows converted so far.
pub fn scan<T, E, F>(batch: ResultBatch, mut convert: F) -> Result<Vec<T>, TursoError>
where
    F: FnMut(&Row) -> Result<T, E>,
    E: Into<BoxError>,
{
    let Some(first) = batch.into_iter().next() else {
        return Ok(Vec::new());
    };

    let data = first.results;
    let mut items = Vec::with_capacity(data.rows.len());

    for (index, values) in data.rows.iter().enumerate() {
        let row = Row::from_parts(&data.columns, values);
        let item = convert(&row).map_err(|err| TursoError::Conversion {
            row: index,
            source: err.into(),
        })?;
        items.push(item);
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{scan, ResultBatch, StatementResult, TabularResult, TursoError, Value};

    fn batch(columns: &[&str], rows: Vec<Vec<Value>>) -> ResultBatch {
        vec![StatementResult {
            results: TabularResult {
                columns: columns.iter().map(|c| (*c).to_owned()).collect(),
                rows,
            },
        }]
    }

    #[test]
    fn empty_batch_is_empty_vec() {
        let items = scan(Vec::new(), |row| row.get_f64("val").ok_or("missing"))
            .expect("must scan");
        assert!(items.is_empty());
    }

    #[test]
    fn zero_rows_is_empty_vec() {
        let items = scan(batch(&["val"], vec![]), |row| {
            row.get_f64("val").ok_or("missing")
        })
        .expect("must scan");
        assert!(items.is_empty());
    }

    #[test]
    fn single_numeric_column() {
        let items = scan(batch(&["val"], vec![vec![json!(100)]]), |row| {
            row.get_f64("val").ok_or("missing val")
        })
        .expect("must scan");
        assert_eq!(items, vec![100.0]);
    }

    #[test]
    fn preserves_row_order() {
        let rows = vec![vec![json!("a")], vec![json!("b")], vec![json!("c")]];
        let items = scan(batch(&["name"], rows), |row| {
            row.get_str("name").map(str::to_owned).ok_or("missing name")
        })
        .expect("must scan");
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn only_first_result_is_consumed() {
        let mut results = batch(&["n"], vec![vec![json!(1)]]);
        results.extend(batch(&["n"], vec![vec![json!(2)], vec![json!(3)]]));
        let items = scan(results, |row| row.get_i64("n").ok_or("missing n")).expect("must scan");
        assert_eq!(items, vec![1]);
    }

    #[test]
    fn converter_error_aborts_scan() {
        let rows = vec![vec![json!(1)], vec![json!("oops")], vec![json!(3)]];
        let mut calls = 0;
        let err = scan(batch(&["n"], rows), |row| {
            calls += 1;
            row.get_i64("n").ok_or("not an integer")
        })
        .expect_err("must fail");

        assert_eq!(calls, 2);
        match err {
            TursoError::Conversion { row, source } => {
                assert_eq!(row, 1);
                assert_eq!(source.to_string(), "not an integer");
            }
            other => panic!("expected conversion error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_rows_are_truncated_not_fatal() {
        let rows = vec![vec![json!(1)], vec![json!(2), json!("x"), json!("extra")]];
        let items = scan(batch(&["a", "b"], rows), |row| Ok::<_, TursoError>(row.len()))
            .expect("must scan");
        assert_eq!(items, vec![1, 2]);
    }
}
