// error.rs - Errors surfaced by the engine

use thiserror::Error;

/// Everything the engine can reject.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("engine thread has exited")]
    EngineGone,
}

pub type Result<T> = std::result::Result<T, EngineError>;
