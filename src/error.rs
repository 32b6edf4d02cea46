use thiserror::Error;

/// Result of a heap access.
pub type Result<T, E = HeapError> = std::result::Result<T, E>;

/// Error raised by heap accessors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek` or `extract_extremal` was called on a heap with no elements.
    #[error("heap is empty")]
    Empty,
}

/// Error while reading a list of values from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that is not an integer.
    #[error("invalid number: {token:?}")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// Nothing to parse.
    #[error("no values given")]
    Empty,
}
