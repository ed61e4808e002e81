//! # csv_writer_rs
//!
//! A small, dialect-aware CSV writer.
//!
//! Rows are either sequences of scalar values or mappings whose values are
//! written in insertion order (keys are never written, there is no header
//! row). A [`Dialect`] picks the delimiter and line terminator. Fields are
//! quoted only when they contain the delimiter, a line break, a double quote
//! or a space, or when they are exactly `\.`.
//!
//! ## Example
//!
//! ```rust
//! use csv_writer_rs::{encode, encode_value, Dialect, Row};
//! use serde_json::json;
//!
//! let rows = vec![Row::from(["name", "city"]), Row::from(["Alice", "New York"])];
//! let csv = encode(&rows, &Dialect::default()).unwrap();
//! assert_eq!(csv, "name,city\nAlice,\"New York\"\n");
//!
//! let data = json!([{"id": 1, "tag": "a|b"}, [2, "c"]]);
//! let csv = encode_value(&data, &Dialect::new().with_delimiter('|').crlf()).unwrap();
//! assert_eq!(csv, "1|\"a|b\"\r\n2|c\r\n");
//! ```

mod common;
mod encoder;
mod error;
mod row;

// Re-export public API
pub use common::{Dialect, LineTerminator};
pub use encoder::{
    encode, encode_records, encode_to_bytes, encode_value, field_needs_quotes, write_to,
};
pub use error::EncodeError;
pub use row::Row;
