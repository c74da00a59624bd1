//! Cell reference parsing and formatting.
//!
//! Converts between sheet addresses ("A1", "B7", "Z50") and zero-indexed
//! column/row coordinates. The sheet is a fixed grid of [`COLS`] single-letter
//! columns and [`ROWS`] rows; addresses are uppercase and case-sensitive.
//!
//! # Examples
//!
//! ```
//! use numbers_engine::engine::CellRef;
//!
//! let cell = CellRef::from_str("B3").unwrap();
//! assert_eq!(cell.col, 1); // 0-indexed
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Number of columns in the sheet (A..Z).
pub const COLS: usize = 26;
/// Number of rows in the sheet (1..50).
pub const ROWS: usize = 50;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

fn address_re() -> &'static Regex {
    static ADDRESS_RE: OnceLock<Regex> = OnceLock::new();
    ADDRESS_RE.get_or_init(|| {
        Regex::new(r"^(?<letter>[A-Z])(?<number>[1-9][0-9]*)$").expect("address regex must compile")
    })
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell address (e.g., "A1", "B7").
    ///
    /// Only the canonical form is accepted: one uppercase letter and a row
    /// number without leading zeros. Rows past the grid still parse; use
    /// [`CellRef::in_grid`] to check bounds.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        Self::parse_address(name)
    }

    fn parse_address(name: &str) -> Option<CellRef> {
        let caps = address_re().captures(name)?;
        let letter = caps["letter"].as_bytes()[0];
        let col = (letter - b'A') as usize;
        let row = caps["number"].parse::<usize>().ok()?.checked_sub(1)?;
        Some(CellRef::new(col, row))
    }

    /// Whether this reference addresses a cell of the fixed grid.
    pub fn in_grid(&self) -> bool {
        self.col < COLS && self.row < ROWS
    }

    /// Convert a column index to spreadsheet-style letters (0 -> A, 25 -> Z).
    /// Columns past the grid continue as AA, AB, ... and never parse back.
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }

    /// Iterate every grid cell in row-major order (A1, B1, ..., Z50).
    pub fn all() -> impl Iterator<Item = CellRef> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| CellRef::new(col, row)))
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_address(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}
