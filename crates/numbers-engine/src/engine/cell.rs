//! Cell data structures for the sheet grid.
//!
//! - [`Cell`] - A committed cell: its display value and the raw input it came from
//! - [`Grid`] - Sparse storage for cells (backed by `DashMap`)
//! - [`CellLookup`] - Read-only view used by the evaluator to resolve references

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::cell_ref::CellRef;

/// A cell in the sheet grid.
///
/// `value` is what the grid displays. `formula` is the raw text last
/// committed to the cell, kept so the formula bar can show it for editing.
/// The value of a formula cell is computed once at commit time and is not
/// recomputed when the cells it referenced change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl Cell {
    /// A cell holding a plain value with no recorded input.
    pub fn new_value(value: &str) -> Cell {
        Cell {
            value: value.to_string(),
            formula: None,
        }
    }

    /// A cell as stored after an edit commit: the computed value plus the raw input.
    pub fn committed(raw: &str, value: String) -> Cell {
        Cell {
            value,
            formula: Some(raw.to_string()),
        }
    }

    /// Text shown in the formula bar: the raw input, else the value, else nothing.
    /// Empty strings count as missing.
    pub fn input_text(&self) -> &str {
        match self.formula.as_deref() {
            Some(formula) if !formula.is_empty() => formula,
            _ => &self.value,
        }
    }
}

/// Sparse grid storage. Cells never written are absent and read as empty.
pub type Grid = DashMap<CellRef, Cell>;

/// Read-only access to cell values at the moment of an evaluation.
pub trait CellLookup {
    /// Current display value of `cell`, or None if the cell was never written.
    fn lookup_value(&self, cell: &CellRef) -> Option<String>;
}

impl CellLookup for Grid {
    fn lookup_value(&self, cell: &CellRef) -> Option<String> {
        self.get(cell).map(|entry| entry.value.clone())
    }
}

impl CellLookup for HashMap<CellRef, Cell> {
    fn lookup_value(&self, cell: &CellRef) -> Option<String> {
        self.get(cell).map(|c| c.value.clone())
    }
}
