//! Formula preprocessing: cell reference substitution.
//!
//! Before a formula body is parsed, every reference token (`[A-Z][0-9]+`) is
//! replaced by the referenced cell's current value. The substitution is
//! textual and happens once, against the grid as it is at that moment:
//!
//! - `A1 + B1` with A1 = `5`, B1 = `10` becomes `5 + 10`
//! - a missing or empty cell becomes `0`
//! - a token that is not an in-grid address (`A0`, `A01`, `A99`) becomes `0`
//!
//! Tokens are matched left to right without word boundaries (`AB12` only
//! matches `B12`), and replacement text is never rescanned.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::cell::CellLookup;
use super::cell_ref::CellRef;

/// Value substituted for references that resolve to nothing.
const EMPTY_REFERENCE_VALUE: &str = "0";

fn cell_ref_re() -> &'static Regex {
    static CELL_RE: OnceLock<Regex> = OnceLock::new();
    CELL_RE.get_or_init(|| {
        Regex::new(r"([A-Z])([0-9]+)").expect("reference token regex must compile")
    })
}

/// Replace each reference token in `formula` with the referenced value.
pub fn substitute_references(formula: &str, cells: &impl CellLookup) -> String {
    cell_ref_re()
        .replace_all(formula, |caps: &Captures| resolve_token(&caps[0], cells))
        .into_owned()
}

fn resolve_token(token: &str, cells: &impl CellLookup) -> String {
    CellRef::from_str(token)
        .filter(CellRef::in_grid)
        .and_then(|cell_ref| cells.lookup_value(&cell_ref))
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| EMPTY_REFERENCE_VALUE.to_string())
}

/// In-grid references mentioned by `formula`, in order of appearance.
pub fn references(formula: &str) -> Vec<CellRef> {
    cell_ref_re()
        .find_iter(formula)
        .filter_map(|m| CellRef::from_str(m.as_str()))
        .filter(CellRef::in_grid)
        .collect()
}
