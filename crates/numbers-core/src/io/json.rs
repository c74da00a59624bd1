//! JSON dump of the sheet state, keyed by address.

use crate::error::Result;
use crate::sheet::Sheet;
use numbers_engine::engine::Cell;
use std::collections::BTreeMap;
use std::io::Write;

/// Build a JSON object `{ "A1": { "value": ..., "formula": ... }, ... }`.
pub fn sheet_to_json(sheet: &Sheet) -> Result<serde_json::Value> {
    let cells: BTreeMap<String, Cell> = sheet
        .populated_cells()
        .into_iter()
        .map(|(cell_ref, cell)| (cell_ref.to_string(), cell))
        .collect();
    Ok(serde_json::to_value(cells)?)
}

/// Write the JSON dump, pretty-printed, followed by a newline.
pub fn write_json<W: Write>(w: &mut W, sheet: &Sheet) -> Result<()> {
    let value = sheet_to_json(sheet)?;
    serde_json::to_writer_pretty(&mut *w, &value)?;
    writeln!(w)?;
    Ok(())
}
