//! Error type for the encoder.

use thiserror::Error;

/// An error that can occur while encoding a CSV document.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The dialect's delimiter is `"`, `\n` or `\r`.
    #[error("Invalid delimiter {0:?} provided")]
    InvalidDelimiter(char),
    /// A row is neither a sequence nor a mapping, or holds a non-scalar field.
    #[error("Invalid input at row {row}: {reason}")]
    InvalidInput { row: usize, reason: String },
    /// A record could not be converted through serde.
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The output sink rejected the encoded document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EncodeError {
    /// True for errors caused by the dialect rather than the data.
    pub fn is_config(&self) -> bool {
        matches!(self, EncodeError::InvalidDelimiter(_))
    }

    /// True for errors caused by the shape or content of the rows.
    pub fn is_data(&self) -> bool {
        matches!(
            self,
            EncodeError::InvalidInput { .. } | EncodeError::Serialize(_)
        )
    }
}
