//! Error types for N-Queens boards

use thiserror::Error;

/// Main error type for board operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueensError {
    /// A supplied row value lies outside `[0, size)`.
    #[error("Invalid configuration: column {column} has row {row}, expected a row below {size}")]
    InvalidConfiguration {
        column: usize,
        row: usize,
        size: usize,
    },
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, QueensError>;
