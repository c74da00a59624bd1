//! Tokenizer for substituted formula bodies.
//!
//! Only numeric literals, `+ - * / %` and parentheses are recognized. Any other
//! character, and any identifier other than `Infinity` and `NaN`, is rejected
//! here so that nothing but arithmetic reaches the parser.

use std::fmt;

use crate::error::{EvalError, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::Slash => f.write_str("'/'"),
            Token::Percent => f.write_str("'%'"),
            Token::LeftParen => f.write_str("'('"),
            Token::RightParen => f.write_str("')'"),
        }
    }
}

/// A token and the byte offset it starts at.
#[derive(Clone, Debug, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub pos: usize,
}

/// Split `input` into tokens, skipping whitespace.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let single = match b {
            b'+' => Some(Token::Plus),
            b'-' => Some(Token::Minus),
            b'*' => Some(Token::Star),
            b'/' => Some(Token::Slash),
            b'%' => Some(Token::Percent),
            b'(' => Some(Token::LeftParen),
            b')' => Some(Token::RightParen),
            _ => None,
        };
        if let Some(token) = single {
            // `++` and `--` are increment/decrement, not two signs.
            if (b == b'+' || b == b'-') && bytes.get(i + 1) == Some(&b) {
                return Err(EvalError::UnexpectedChar {
                    ch: b as char,
                    pos: i + 1,
                });
            }
            tokens.push(Spanned { token, pos: i });
            i += 1;
            continue;
        }

        let starts_number = b.is_ascii_digit()
            || (b == b'.' && bytes.get(i + 1).is_some_and(|c| c.is_ascii_digit()));
        if starts_number {
            let end = scan_number(bytes, i);
            let literal = &input[i..end];
            let value = literal.parse::<f64>().map_err(|_| EvalError::InvalidNumber {
                literal: literal.to_string(),
                pos: i,
            })?;
            tokens.push(Spanned {
                token: Token::Number(value),
                pos: i,
            });
            i = end;
            continue;
        }

        if b.is_ascii_alphabetic() || b == b'_' || b == b'$' {
            let end = scan_identifier(bytes, i);
            let name = &input[i..end];
            let value = match name {
                "Infinity" => f64::INFINITY,
                "NaN" => f64::NAN,
                _ => {
                    return Err(EvalError::UnknownIdentifier {
                        name: name.to_string(),
                        pos: i,
                    });
                }
            };
            tokens.push(Spanned {
                token: Token::Number(value),
                pos: i,
            });
            i = end;
            continue;
        }

        // Non-ASCII input lands here too; report the whole character.
        let ch = input[i..].chars().next().unwrap_or('\u{FFFD}');
        return Err(EvalError::UnexpectedChar { ch, pos: i });
    }

    Ok(tokens)
}

/// End offset of the numeric literal starting at `start`.
/// Malformed exponents are consumed so the literal fails to parse as a whole.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    i
}

fn scan_identifier(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_' || bytes[i] == b'$')
    {
        i += 1;
    }
    i
}
