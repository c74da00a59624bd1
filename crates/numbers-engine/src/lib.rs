//! numbers_engine - Formula evaluation for the Numbers sheet.

pub mod engine;
pub mod error;

pub use error::{EvalError, Result};
