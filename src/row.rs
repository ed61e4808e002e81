//! Row representation and normalization of dynamic input

use crate::error::EncodeError;
use serde_json::{Map, Value};

/// One record of a CSV document.
///
/// A `Mapping` contributes its values in insertion order; its keys never
/// reach the output.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Sequence(Vec<Value>),
    Mapping(Map<String, Value>),
}

impl Row {
    /// Normalize a JSON value into a row. `index` is the row's position in
    /// the document and is only used for error reporting.
    pub fn from_value(value: Value, index: usize) -> Result<Self, EncodeError> {
        match value {
            Value::Array(values) => Ok(Row::Sequence(values)),
            Value::Object(map) => Ok(Row::Mapping(map)),
            other => Err(EncodeError::InvalidInput {
                row: index,
                reason: format!("expected an array or object, found {}", kind(&other)),
            }),
        }
    }

    /// Iterate over the row's field values in output order
    pub fn fields(&self) -> impl Iterator<Item = &Value> + '_ {
        let (seq, map) = match self {
            Row::Sequence(values) => (Some(values.iter()), None),
            Row::Mapping(map) => (None, Some(map.values())),
        };
        seq.into_iter().flatten().chain(map.into_iter().flatten())
    }

    pub fn len(&self) -> usize {
        match self {
            Row::Sequence(values) => values.len(),
            Row::Mapping(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every field must be a scalar; nested arrays and objects have no
    /// textual form in a CSV cell.
    pub(crate) fn validate(&self, index: usize) -> Result<(), EncodeError> {
        for (column, value) in self.fields().enumerate() {
            if matches!(value, Value::Array(_) | Value::Object(_)) {
                return Err(EncodeError::InvalidInput {
                    row: index,
                    reason: format!("field {} is {}, expected a scalar", column, kind(value)),
                });
            }
        }
        Ok(())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<T: Into<Value>> From<Vec<T>> for Row {
    fn from(values: Vec<T>) -> Self {
        Row::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Row {
    fn from(values: [T; N]) -> Self {
        Row::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<Map<String, Value>> for Row {
    fn from(map: Map<String, Value>) -> Self {
        Row::Mapping(map)
    }
}

impl<T: Into<Value>> FromIterator<T> for Row {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Row::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_array_value() {
        let row = Row::from_value(json!(["a", 1, true]), 0).unwrap();
        assert_eq!(row, Row::Sequence(vec![json!("a"), json!(1), json!(true)]));
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_mapping_keeps_insertion_order() {
        let row = Row::from_value(json!({"z": "first", "a": "second"}), 0).unwrap();
        let fields: Vec<_> = row.fields().cloned().collect();
        assert_eq!(fields, vec![json!("first"), json!("second")]);
    }

    #[test]
    fn test_scalar_row_is_rejected() {
        let err = Row::from_value(json!("abc"), 4).unwrap_err();
        match err {
            EncodeError::InvalidInput { row, reason } => {
                assert_eq!(row, 4);
                assert!(reason.contains("a string"));
            }
            _ => panic!("expected InvalidInput error"),
        }
    }

    #[test]
    fn test_null_row_is_rejected() {
        assert!(Row::from_value(Value::Null, 0).is_err());
    }

    #[test]
    fn test_nested_field_fails_validation() {
        let row = Row::from(vec![json!("a"), json!(["b"])]);
        let err = row.validate(2).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidInput { row: 2, .. }));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Row::from(["a", "b"]), Row::from(vec!["a", "b"]));
        let collected: Row = (1..=3).collect();
        assert_eq!(collected, Row::from([1, 2, 3]));
        assert!(Row::from(Vec::<Value>::new()).is_empty());
    }
}
