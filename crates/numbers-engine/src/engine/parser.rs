//! Recursive descent parser for arithmetic formula bodies.
//!
//! Grammar (all binary operators left-associative):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```

use super::lexer::{Spanned, Token, tokenize};
use crate::error::{EvalError, Result};

/// Longest formula body (after reference substitution) that will be parsed.
pub const MAX_FORMULA_LEN: usize = 4096;
/// Deepest nesting of parentheses and unary signs that will be parsed.
pub const MAX_NESTING_DEPTH: usize = 128;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Negate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

/// Parsed arithmetic expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// Parse a formula body (no leading `=`) into an expression tree.
pub fn parse_expression(input: &str) -> Result<Expr> {
    if input.len() > MAX_FORMULA_LEN {
        return Err(EvalError::TooLong {
            max: MAX_FORMULA_LEN,
        });
    }

    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr(0)?;

    // Make sure we consumed all input
    if let Some(extra) = parser.peek() {
        return Err(EvalError::UnexpectedToken {
            found: extra.token.to_string(),
            pos: extra.pos,
        });
    }

    Ok(expr)
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.pos).cloned();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn peek_binary(&self, ops: &[(Token, BinaryOp)]) -> Option<BinaryOp> {
        let current = &self.peek()?.token;
        ops.iter()
            .find(|(token, _)| token == current)
            .map(|(_, op)| *op)
    }

    fn parse_expr(&mut self, depth: usize) -> Result<Expr> {
        const OPS: [(Token, BinaryOp); 2] = [
            (Token::Plus, BinaryOp::Add),
            (Token::Minus, BinaryOp::Subtract),
        ];

        let mut left = self.parse_term(depth)?;
        while let Some(op) = self.peek_binary(&OPS) {
            self.pos += 1;
            let right = self.parse_term(depth)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_term(&mut self, depth: usize) -> Result<Expr> {
        const OPS: [(Token, BinaryOp); 3] = [
            (Token::Star, BinaryOp::Multiply),
            (Token::Slash, BinaryOp::Divide),
            (Token::Percent, BinaryOp::Remainder),
        ];

        let mut left = self.parse_unary(depth)?;
        while let Some(op) = self.peek_binary(&OPS) {
            self.pos += 1;
            let right = self.parse_unary(depth)?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_unary(&mut self, depth: usize) -> Result<Expr> {
        if depth > MAX_NESTING_DEPTH {
            return Err(EvalError::TooDeep {
                max: MAX_NESTING_DEPTH,
            });
        }

        let op = match self.peek().map(|s| &s.token) {
            Some(Token::Plus) => UnaryOp::Plus,
            Some(Token::Minus) => UnaryOp::Negate,
            _ => return self.parse_primary(depth),
        };
        self.pos += 1;
        let operand = self.parse_unary(depth + 1)?;
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_primary(&mut self, depth: usize) -> Result<Expr> {
        let Some(spanned) = self.next() else {
            return Err(EvalError::UnexpectedEnd);
        };

        match spanned.token {
            Token::Number(n) => Ok(Expr::Number(n)),
            Token::LeftParen => {
                let inner = self.parse_expr(depth + 1)?;
                match self.next() {
                    Some(Spanned {
                        token: Token::RightParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(EvalError::UnexpectedToken {
                        found: other.token.to_string(),
                        pos: other.pos,
                    }),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            other => Err(EvalError::UnexpectedToken {
                found: other.to_string(),
                pos: spanned.pos,
            }),
        }
    }
}
