use crate::record::row::{RelationRecord, RuleRecord};
use serde_json::Value;
use thiserror::Error;

/// Failure to turn a positional table row into a named record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("table must be a JSON array of rows, found {found}")]
    NotATable { found: &'static str },

    #[error("row {row}: expected an array of {expected} cells, found {found}")]
    NotARow {
        row: usize,
        expected: usize,
        found: &'static str,
    },

    #[error("row {row}: expected {expected} cells, found {found}")]
    Arity {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, field `{field}`: expected {expected}, found {found}")]
    Field {
        row: usize,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Decode a whole table (`rel.json` / `rul.json` body), keeping row order.
pub fn decode_table<T>(
    table: &Value,
    decode_row: fn(usize, &Value) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    let rows = table.as_array().ok_or(DecodeError::NotATable {
        found: describe(table),
    })?;

    rows.iter()
        .enumerate()
        .map(|(row, value)| decode_row(row, value))
        .collect()
}

/// Decode one `rel.json` row.
///
/// Example:
/// [1, 2, 3, 4, 5, "R1", "id1", "src1", "ok"]
pub fn decode_relation(row: usize, value: &Value) -> Result<RelationRecord, DecodeError> {
    let cells = Cells::new(row, value, RelationRecord::ARITY)?;

    Ok(RelationRecord {
        total_time: cells.time(0, "total_time")?,
        non_recursive_time: cells.time(1, "non-recursive_time")?,
        recursive_time: cells.time(2, "recursive_time")?,
        copy_time: cells.time(3, "copy_time")?,
        tuple_count: cells.count(4, "tuple_count")?,
        relation_name: cells.text(5, "relation_name")?,
        id: cells.text(6, "id")?,
        source: cells.text(7, "source")?,
        performance_note: cells.text(8, "performance_note")?,
    })
}

/// Decode one `rul.json` row.
///
/// Example:
/// [0.5, 0.5, 0, 0, 12, "path(x,y) :- edge(x,y).", "N.1.0", "path", 0, "24.0", "path.dl [3:1-3:20]"]
pub fn decode_rule(row: usize, value: &Value) -> Result<RuleRecord, DecodeError> {
    let cells = Cells::new(row, value, RuleRecord::ARITY)?;

    Ok(RuleRecord {
        total_time: cells.time(0, "total_time")?,
        non_recursive_time: cells.time(1, "non-recursive_time")?,
        recursive_time: cells.time(2, "recursive_time")?,
        copy_time: cells.time(3, "copy_time")?,
        tuple_count: cells.count(4, "tuple_count")?,
        rule_name: cells.text(5, "rule_name")?,
        id: cells.text(6, "id")?,
        relation_name: cells.text(7, "relation_name")?,
        version: cells.text(8, "version")?,
        performance_note: cells.text(9, "performance_note")?,
        source: cells.text(10, "source")?,
    })
}

/// Arity-checked view over one positional row.
struct Cells<'a> {
    row: usize,
    cells: &'a [Value],
}

impl<'a> Cells<'a> {
    fn new(row: usize, value: &'a Value, arity: usize) -> Result<Self, DecodeError> {
        let cells = value.as_array().ok_or(DecodeError::NotARow {
            row,
            expected: arity,
            found: describe(value),
        })?;

        if cells.len() != arity {
            return Err(DecodeError::Arity {
                row,
                expected: arity,
                found: cells.len(),
            });
        }

        Ok(Self {
            row,
            cells: cells.as_slice(),
        })
    }

    fn field_error(&self, idx: usize, field: &'static str, expected: &'static str) -> DecodeError {
        DecodeError::Field {
            row: self.row,
            field,
            expected,
            found: describe(&self.cells[idx]),
        }
    }

    fn time(&self, idx: usize, field: &'static str) -> Result<f64, DecodeError> {
        self.cells[idx]
            .as_f64()
            .ok_or_else(|| self.field_error(idx, field, "a number"))
    }

    fn count(&self, idx: usize, field: &'static str) -> Result<u64, DecodeError> {
        self.cells[idx]
            .as_u64()
            .ok_or_else(|| self.field_error(idx, field, "a non-negative integer"))
    }

    /// Text cells also accept numbers: the profiler writes performance notes
    /// and rule versions as plain JSON numbers.
    fn text(&self, idx: usize, field: &'static str) -> Result<String, DecodeError> {
        match &self.cells[idx] {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(self.field_error(idx, field, "a string")),
        }
    }
}

/// Short human description of a JSON value's kind, for error messages.
fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_u64() => "an integer",
        Value::Number(n) if n.is_i64() => "a negative integer",
        Value::Number(_) => "a fractional number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
