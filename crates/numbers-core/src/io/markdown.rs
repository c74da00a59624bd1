//! Markdown rendering of the sheet's displayed values.

use crate::sheet::Sheet;
use numbers_engine::engine::CellRef;
use std::io::Write;

/// Write the populated part of the sheet as a Markdown table.
pub fn write_markdown<W: Write>(w: &mut W, sheet: &Sheet) -> std::io::Result<()> {
    writeln!(w, "# Sheet")?;
    writeln!(w)?;

    let Some((min_row, min_col, max_row, max_col)) = find_grid_bounds(sheet) else {
        writeln!(w, "*Empty spreadsheet*")?;
        return Ok(());
    };

    // Header row with column letters
    write!(w, "|   |")?;
    for col in min_col..=max_col {
        write!(w, " {} |", CellRef::col_to_letters(col))?;
    }
    writeln!(w)?;

    write!(w, "|---|")?;
    for _ in min_col..=max_col {
        write!(w, "---|")?;
    }
    writeln!(w)?;

    for row in min_row..=max_row {
        write!(w, "| {} |", row + 1)?; // 1-based row numbers
        for col in min_col..=max_col {
            let display = sheet.get_cell_display(&CellRef::new(col, row));
            write!(w, " {} |", escape_markdown(&display))?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Render the sheet to a Markdown string.
pub fn render_markdown(sheet: &Sheet) -> std::io::Result<String> {
    let mut out = Vec::new();
    write_markdown(&mut out, sheet)?;
    String::from_utf8(out).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Bounding box (min_row, min_col, max_row, max_col) of written cells.
fn find_grid_bounds(sheet: &Sheet) -> Option<(usize, usize, usize, usize)> {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for entry in sheet.grid.iter() {
        let cell_ref = entry.key();
        bounds = Some(match bounds {
            None => (cell_ref.row, cell_ref.col, cell_ref.row, cell_ref.col),
            Some((min_row, min_col, max_row, max_col)) => (
                min_row.min(cell_ref.row),
                min_col.min(cell_ref.col),
                max_row.max(cell_ref.row),
                max_col.max(cell_ref.col),
            ),
        });
    }
    bounds
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}
