//! Crate error type.

use thiserror::Error;

/// Crate result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The requested grid has no interior left once the edge ring is reserved.
    #[error("grid {columns}x{rows} has no interior; both dimensions must be at least {minimum}")]
    GridTooSmall {
        columns: usize,
        rows: usize,
        minimum: usize,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Edit-mode painting is only allowed while the tick clock is stopped.
    #[error("cannot edit cells while the simulation is running")]
    EditWhileRunning,

    #[error("cell ({column}, {row}) is outside the grid")]
    OutOfBounds { column: i64, row: i64 },
}

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
