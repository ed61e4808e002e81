//! Dialect configuration shared by every encode entry point

use crate::error::EncodeError;
use serde::{Deserialize, Serialize};

/// Characters that can never act as a delimiter.
pub(crate) const INVALID_DELIMITERS: [char; 3] = ['"', '\n', '\r'];

/// Line terminator written after every row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    #[default]
    Lf,
    CrLf,
}

impl LineTerminator {
    /// Returns the terminator text
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

/// Formatting rules for a CSV document.
///
/// Defaults to a comma delimiter and `\n` line endings. A dialect loaded
/// through serde may carry any delimiter; it is checked by [`Dialect::validate`]
/// at the start of every encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialect {
    /// Field separator (default: `,`)
    pub delimiter: char,
    /// Row terminator (default: `\n`)
    pub line_terminator: LineTerminator,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: ',',
            line_terminator: LineTerminator::Lf,
        }
    }
}

impl Dialect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }

    /// Shorthand for `\r\n` line endings
    pub fn crlf(self) -> Self {
        self.with_line_terminator(LineTerminator::CrLf)
    }

    /// Rejects delimiters that would make the output ambiguous to decode.
    pub fn validate(&self) -> Result<(), EncodeError> {
        if INVALID_DELIMITERS.contains(&self.delimiter) {
            return Err(EncodeError::InvalidDelimiter(self.delimiter));
        }
        Ok(())
    }
}
