use std::io;

use thiserror::Error;

/// Unified error type for every Toolbench transformation.
///
/// Each variant corresponds to one failure class a tool can surface to the
/// user. Front ends render the message and never branch on the payload, so
/// the payload is always a human-readable description.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Malformed textual input (color string, JSON text, digit string layout).
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// A numeric value outside its required bounds.
    #[error("out of range: {0}")]
    OutOfRange(String),
    /// Tabular input that parses but is not in the expected shape.
    #[error("schema error: {0}")]
    SchemaError(String),
    /// A document root type the conversion does not handle.
    #[error("unsupported shape: {0}")]
    UnsupportedShape(String),
    /// A digit that is not legal in the declared radix.
    #[error("invalid digits: {0}")]
    InvalidDigits(String),
    /// Malformed percent-encoding or a decode to invalid UTF-8.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),
    /// File open/read/write failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ToolError {
    /// Short stable name of the error class, used for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::InvalidFormat(_) => "invalid_format",
            ToolError::OutOfRange(_) => "out_of_range",
            ToolError::SchemaError(_) => "schema_error",
            ToolError::UnsupportedShape(_) => "unsupported_shape",
            ToolError::InvalidDigits(_) => "invalid_digits",
            ToolError::InvalidEncoding(_) => "invalid_encoding",
            ToolError::Io(_) => "io",
        }
    }
}
