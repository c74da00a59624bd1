//! Formula engine API.
//!
//! - [`Cell`], [`Grid`], [`CellLookup`] - Cell storage and the read-only view used during evaluation
//! - [`CellRef`] - Address parsing (A1 notation ↔ column/row indices)
//! - [`substitute_references`] - Replace reference tokens with cell values
//! - [`parse_expression`], [`Expr`] - Sandboxed arithmetic parser
//! - [`evaluate`] - Raw input → display string, the per-edit entry point
//! - [`format_number`] - Format computed values for display

mod cell;
mod cell_ref;
mod eval;
mod format;
mod lexer;
mod parser;
mod preprocess;

pub use cell::{Cell, CellLookup, Grid};
pub use cell_ref::{COLS, CellRef, ROWS};
pub use eval::{ERROR_MARKER, FORMULA_PREFIX, evaluate, evaluate_formula};
pub use format::format_number;
pub use lexer::{Spanned, Token, tokenize};
pub use parser::{BinaryOp, Expr, MAX_FORMULA_LEN, MAX_NESTING_DEPTH, UnaryOp, parse_expression};
pub use preprocess::{references, substitute_references};
