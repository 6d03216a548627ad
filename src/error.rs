//! Error types for the mosaic crate.
//!
//! Only two things can go wrong: the user asks for a grid size that is not a
//! positive integer, or types something into a size field that is not a number.
//! Both are reported to the front end and leave the grid as it was.

use serde_json::json;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MosaicError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MosaicError {
    /// Rows or columns passed to a resize are not positive, or their product is out of range.
    #[error("invalid grid dimensions {rows}x{cols}: rows and columns must be positive integers")]
    InvalidDimension { rows: i64, cols: i64 },

    /// A size field could not be parsed as an integer.
    #[error("could not parse {field} value {input:?} as an integer")]
    ParseFailure { field: &'static str, input: String },
}

impl MosaicError {
    /// Unique error code (e.g. "INVALID_DIMENSION").
    pub fn code(&self) -> &'static str {
        match self {
            MosaicError::InvalidDimension { .. } => "INVALID_DIMENSION",
            MosaicError::ParseFailure { .. } => "PARSE_FAILURE",
        }
    }

    /// Context string attached to error reports.
    pub fn context(&self) -> String {
        match self {
            MosaicError::InvalidDimension { rows, cols } => format!("rows={rows} cols={cols}"),
            MosaicError::ParseFailure { field, .. } => format!("field={field}"),
        }
    }

    /// Formats the error as a JSON message for the user-facing layer.
    ///
    /// Shape: `{"action":"Error","data":{"code":..,"message":..,"context":..}}`.
    pub fn report(&self) -> String {
        error_message(self.code(), &self.to_string(), Some(&self.context()))
    }
}

/// Formats an error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "PARSE_FAILURE").
/// - `message`: Human-readable error message.
/// - `context`: Optional context (e.g. the offending field).
pub fn error_message(code: &str, message: &str, context: Option<&str>) -> String {
    json!({
        "action": "Error",
        "data": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    })
    .to_string()
}
