//! Error types for Numbers core.

use numbers_engine::engine::CellRef;
use thiserror::Error;

/// Errors that can occur while editing or reading a sheet.
#[derive(Error, Debug)]
pub enum NumbersError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid cell reference: {0}")]
    InvalidAddress(String),

    #[error("Cell {0} is outside the sheet")]
    OutOfGrid(CellRef),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NumbersError>;
