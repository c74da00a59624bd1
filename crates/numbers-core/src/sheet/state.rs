use numbers_engine::engine::{Cell, CellRef, Grid};

/// UI-agnostic state for one sheet.
///
/// Created empty, filled by edit commits, dropped with the session. Cells
/// that were never written are absent from the grid and read as empty.
pub struct Sheet {
    /// The sparse cell grid, keyed by address.
    pub grid: Grid,
}

impl Sheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Sheet { grid: Grid::new() }
    }

    /// Number of cells written at least once.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// A copy of the stored cell, if it was ever written.
    pub fn get_cell(&self, cell_ref: &CellRef) -> Option<Cell> {
        self.grid.get(cell_ref).map(|entry| entry.clone())
    }

    /// Value shown in the grid for a cell.
    pub fn get_cell_display(&self, cell_ref: &CellRef) -> String {
        self.grid
            .get(cell_ref)
            .map(|entry| entry.value.clone())
            .unwrap_or_default()
    }

    /// Text shown in the formula bar for a cell.
    pub fn get_cell_input(&self, cell_ref: &CellRef) -> String {
        self.grid
            .get(cell_ref)
            .map(|entry| entry.input_text().to_string())
            .unwrap_or_default()
    }

    /// All written cells in row-major order.
    pub fn populated_cells(&self) -> Vec<(CellRef, Cell)> {
        let mut cells: Vec<(CellRef, Cell)> = self
            .grid
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        cells.sort_by(|(a, _), (b, _)| a.row.cmp(&b.row).then(a.col.cmp(&b.col)));
        cells
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}
