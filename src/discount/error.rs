//! Error types for discount calculation.

use thiserror::Error;

/// The purchase amount could not be read as a decimal number.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid purchase amount '{input}': {source}")]
    Malformed {
        input: String,
        source: rust_decimal::Error,
    },

    #[error("invalid purchase amount '{input}': too many digits to discount exactly")]
    TooPrecise { input: String },
}

impl ParseError {
    /// The raw text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseError::Malformed { input, .. } | ParseError::TooPrecise { input } => input,
        }
    }
}
