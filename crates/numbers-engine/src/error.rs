//! Error types for formula evaluation.

use thiserror::Error;

/// Reasons a formula body fails to evaluate.
///
/// Callers of [`crate::engine::evaluate`] never see these: every variant is
/// displayed as the `#ERROR` marker. They are kept distinct for logging and
/// for callers of [`crate::engine::evaluate_formula`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("unexpected character '{ch}' at offset {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number literal '{literal}' at offset {pos}")]
    InvalidNumber { literal: String, pos: usize },

    #[error("unknown identifier '{name}' at offset {pos}")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("unexpected {found} at offset {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of formula")]
    UnexpectedEnd,

    #[error("formula is empty")]
    Empty,

    #[error("formula is longer than {max} characters")]
    TooLong { max: usize },

    #[error("formula nests deeper than {max} levels")]
    TooDeep { max: usize },
}

pub type Result<T> = std::result::Result<T, EvalError>;
