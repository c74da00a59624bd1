//! Parser for edit logs.
//!
//! An edit log is a sequence of commits, one per line:
//!
//! ```text
//! # comment
//! A1: 5
//! B1: =A1*2
//! ```
//!
//! Everything after `ADDRESS:` (minus one separating space) is the raw input,
//! exactly as it would have been typed into the cell.

use crate::error::{NumbersError, Result};
use numbers_engine::engine::CellRef;
use std::io::Read;

/// Read and parse an edit log from any reader (file, stdin).
pub fn read_edits<R: Read>(mut reader: R) -> Result<Vec<(CellRef, String)>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_edits(&content)
}

/// Parse edit log content into `(cell, raw input)` pairs, in order.
pub fn parse_edits(content: &str) -> Result<Vec<(CellRef, String)>> {
    let mut edits = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((address, raw)) = line.split_once(':') else {
            return Err(NumbersError::Parse {
                line: line_num + 1,
                message: "Expected 'ADDRESS: INPUT' format".to_string(),
            });
        };

        let address = address.trim();
        let cell_ref = CellRef::from_str(address)
            .filter(CellRef::in_grid)
            .ok_or_else(|| NumbersError::Parse {
                line: line_num + 1,
                message: format!("Invalid cell reference: {}", address),
            })?;

        let raw = raw.strip_prefix(' ').unwrap_or(raw);
        edits.push((cell_ref, raw.to_string()));
    }

    Ok(edits)
}
