//! Rows to CSV encoder implementation

use crate::common::Dialect;
use crate::error::EncodeError;
use crate::row::Row;
use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::io::Write;

/// Field text that bulk loaders such as `COPY FROM` treat as end-of-data.
const END_OF_DATA_MARKER: &str = "\\.";

/// Encode a document of rows to CSV text.
///
/// The dialect and every row are validated before anything is written, so an
/// error never comes with a partially encoded document.
pub fn encode(rows: &[Row], dialect: &Dialect) -> Result<String, EncodeError> {
    check_dialect(dialect)?;
    for (index, row) in rows.iter().enumerate() {
        row.validate(index).inspect_err(|e| warn!("rejecting document: {}", e))?;
    }

    let mut encoder = Encoder::new(dialect);
    for row in rows {
        encoder.encode_row(row);
    }
    debug!(
        "encoded {} rows into {} bytes",
        rows.len(),
        encoder.output.len()
    );
    Ok(encoder.output)
}

/// Encode a JSON array whose elements are arrays or objects
pub fn encode_value(value: &Value, dialect: &Dialect) -> Result<String, EncodeError> {
    check_dialect(dialect)?;
    let Value::Array(items) = value else {
        return Err(EncodeError::InvalidInput {
            row: 0,
            reason: "document must be an array of rows".to_string(),
        });
    };
    let rows = items
        .iter()
        .enumerate()
        .map(|(index, item)| Row::from_value(item.clone(), index))
        .collect::<Result<Vec<_>, _>>()?;
    encode(&rows, dialect)
}

/// Encode serde records, one row per record.
///
/// Structs become mappings, so their fields are written in declaration order.
pub fn encode_records<T: Serialize>(
    records: &[T],
    dialect: &Dialect,
) -> Result<String, EncodeError> {
    check_dialect(dialect)?;
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| Row::from_value(serde_json::to_value(record)?, index))
        .collect::<Result<Vec<_>, _>>()?;
    encode(&rows, dialect)
}

/// Encode a document to UTF-8 bytes
pub fn encode_to_bytes(rows: &[Row], dialect: &Dialect) -> Result<Vec<u8>, EncodeError> {
    encode(rows, dialect).map(String::into_bytes)
}

/// Encode the whole document, then hand it to `writer` in a single write.
///
/// Nothing reaches the writer if encoding fails.
pub fn write_to<W: Write>(
    mut writer: W,
    rows: &[Row],
    dialect: &Dialect,
) -> Result<(), EncodeError> {
    let bytes = encode_to_bytes(rows, dialect)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Returns true when `field` must be wrapped in double quotes.
pub fn field_needs_quotes(field: &str, delimiter: char) -> bool {
    if field.is_empty() {
        return false;
    }
    if field == END_OF_DATA_MARKER {
        return true;
    }

    // '\n' also covers "\r\n"; a lone '\r' is left unquoted.
    field.contains(delimiter)
        || field.contains('\n')
        || field.contains('"')
        || field.contains(' ')
}

fn check_dialect(dialect: &Dialect) -> Result<(), EncodeError> {
    dialect
        .validate()
        .inspect_err(|e| warn!("rejecting dialect: {}", e))
}

struct Encoder<'a> {
    dialect: &'a Dialect,
    output: String,
}

impl<'a> Encoder<'a> {
    fn new(dialect: &'a Dialect) -> Self {
        Self {
            dialect,
            output: String::new(),
        }
    }

    /// Write one row followed by the line terminator
    fn encode_row(&mut self, row: &Row) {
        for (i, value) in row.fields().enumerate() {
            if i > 0 {
                self.output.push(self.dialect.delimiter);
            }
            let text = field_text(value);
            self.encode_field(&text);
        }
        self.output.push_str(self.dialect.line_terminator.as_str());
    }

    fn encode_field(&mut self, field: &str) {
        if field_needs_quotes(field, self.dialect.delimiter) {
            self.output.reserve(field.len() + 2);
            self.output.push('"');
            for c in field.chars() {
                if c == '"' {
                    self.output.push('"');
                }
                self.output.push(c);
            }
            self.output.push('"');
        } else {
            self.output.push_str(field);
        }
    }
}

/// Textual form of a scalar field
fn field_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Null => Cow::Borrowed(""),
        // Rejected by Row::validate before encoding starts
        Value::Array(_) | Value::Object(_) => Cow::Borrowed(""),
    }
}
