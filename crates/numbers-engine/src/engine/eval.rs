//! Formula evaluation.
//!
//! [`evaluate`] is the contract the grid calls on every edit commit: literal
//! input is returned unchanged, `=`-prefixed input has its references
//! substituted and is computed once by the sandboxed arithmetic parser. Any
//! failure is reported as [`ERROR_MARKER`], never as an error.

use super::cell::CellLookup;
use super::format::format_number;
use super::parser::{BinaryOp, Expr, UnaryOp, parse_expression};
use super::preprocess::{references, substitute_references};
use crate::error::Result;

/// Marks input as a formula.
pub const FORMULA_PREFIX: char = '=';
/// Display value for any formula that fails to evaluate.
pub const ERROR_MARKER: &str = "#ERROR";

/// Compute the display string for raw cell input.
///
/// `cells` is the sheet as it was before this edit; a formula that references
/// its own cell therefore sees that cell's previous value.
pub fn evaluate(raw: &str, cells: &impl CellLookup) -> String {
    let Some(body) = raw.strip_prefix(FORMULA_PREFIX) else {
        return raw.to_string();
    };

    match evaluate_formula(body, cells) {
        Ok(n) => format_number(n),
        Err(e) => {
            tracing::debug!(formula = raw, error = %e, "formula evaluation failed");
            ERROR_MARKER.to_string()
        }
    }
}

/// Substitute references in a formula body (without the `=`) and compute it.
pub fn evaluate_formula(body: &str, cells: &impl CellLookup) -> Result<f64> {
    let substituted = substitute_references(body, cells);
    tracing::trace!(
        body,
        substituted = substituted.as_str(),
        references = references(body).len(),
        "substituted formula references"
    );
    let expr = parse_expression(&substituted)?;
    Ok(expr.eval())
}

impl Expr {
    /// Compute the expression with IEEE-754 semantics (x / 0 is infinite, not an error).
    pub fn eval(&self) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Unary { op, operand } => {
                let value = operand.eval();
                match op {
                    UnaryOp::Plus => value,
                    UnaryOp::Negate => -value,
                }
            }
            Expr::Binary { op, left, right } => {
                let (l, r) = (left.eval(), right.eval());
                match op {
                    BinaryOp::Add => l + r,
                    BinaryOp::Subtract => l - r,
                    BinaryOp::Multiply => l * r,
                    BinaryOp::Divide => l / r,
                    BinaryOp::Remainder => l % r,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Cell, CellRef, Grid, MAX_FORMULA_LEN};
    use crate::error::EvalError;
    use pretty_assertions::assert_eq;

    fn grid(entries: &[(&str, &str)]) -> Grid {
        let grid = Grid::new();
        for (addr, value) in entries {
            grid.insert(CellRef::from_str(addr).unwrap(), Cell::new_value(value));
        }
        grid
    }

    #[test]
    fn test_literal_passthrough() {
        let cells = grid(&[("A1", "5")]);
        for input in ["", "hello", "42", " =1+2", "A1", "#ERROR"] {
            assert_eq!(evaluate(input, &cells), input);
        }
    }

    #[test]
    fn test_arithmetic() {
        let cells = Grid::new();
        assert_eq!(evaluate("=1+2", &cells), "3");
        assert_eq!(evaluate("=(1+2)*4", &cells), "12");
        assert_eq!(evaluate("=7/2", &cells), "3.5");
        assert_eq!(evaluate("=7%4", &cells), "3");
        assert_eq!(evaluate("=-3 - -3", &cells), "0");
        assert_eq!(evaluate("=2*-3", &cells), "-6");
        assert_eq!(evaluate("=0.1+0.2", &cells), "0.30000000000000004");
    }

    #[test]
    fn test_references() {
        let cells = grid(&[("A1", "5"), ("B1", "10")]);
        assert_eq!(evaluate("=A1+B1", &cells), "15");
        assert_eq!(evaluate("=C1+1", &cells), "1");
        assert_eq!(evaluate("=A1*A1 - B1", &cells), "15");
    }

    #[test]
    fn test_textual_substitution() {
        let cells = grid(&[("A1", "2+3")]);
        assert_eq!(evaluate("=A1*2", &cells), "8");
        assert_eq!(evaluate("=(A1)*2", &cells), "10");
    }

    #[test]
    fn test_errors_collapse_to_marker() {
        let cells = grid(&[("A1", "hello"), ("B1", "#ERROR")]);
        for input in ["=1++", "=", "=A1+1", "=B1", "=alert(1)", "=1;2", "=(1"] {
            assert_eq!(evaluate(input, &cells), ERROR_MARKER, "input {input}");
        }
    }

    #[test]
    fn test_adjacent_repeated_signs_are_errors() {
        let cells = grid(&[("A1", "-5")]);
        assert_eq!(evaluate("=1++2", &cells), ERROR_MARKER);
        assert_eq!(evaluate("=1--2", &cells), ERROR_MARKER);
        // A negative value spliced after a minus forms `--`.
        assert_eq!(evaluate("=10-A1", &cells), ERROR_MARKER);
        assert_eq!(evaluate("=10 - A1", &cells), "15");
        assert_eq!(evaluate("=1 - -2", &cells), "3");
    }

    #[test]
    fn test_substituted_body_over_length_limit() {
        let long = vec!["1"; MAX_FORMULA_LEN / 2].join("+");
        let cells = grid(&[("A1", long.as_str())]);
        assert!(long.len() < MAX_FORMULA_LEN);
        assert_eq!(evaluate("=A1", &cells), "2048");
        assert_eq!(evaluate("=A1+A1", &cells), ERROR_MARKER);
        assert_eq!(
            evaluate_formula("A1+A1", &cells),
            Err(EvalError::TooLong {
                max: MAX_FORMULA_LEN
            })
        );
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let cells = Grid::new();
        assert_eq!(evaluate("=1/0", &cells), "Infinity");
        assert_eq!(evaluate("=-1/0", &cells), "-Infinity");
        assert_eq!(evaluate("=0/0", &cells), "NaN");
    }

    #[test]
    fn test_special_values_feed_back_in() {
        let cells = grid(&[("A1", "Infinity"), ("A2", "NaN")]);
        assert_eq!(evaluate("=A1", &cells), "Infinity");
        assert_eq!(evaluate("=A2+1", &cells), "NaN");
    }

    #[test]
    fn test_evaluate_formula_reports_cause() {
        let cells = Grid::new();
        assert_eq!(evaluate_formula("2*3", &cells), Ok(6.0));
        assert!(evaluate_formula("2*", &cells).is_err());
    }
}
