//! Validation error types

use thiserror::Error;

/// Input rejected before any statement is sent to the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text value is blank
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Key is not a recognised column
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    /// Required key was not supplied
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Payload has the right keys but could not be read
    #[error("{reason}")]
    Invalid { reason: String },
}
