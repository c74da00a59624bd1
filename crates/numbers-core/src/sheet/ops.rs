use super::Sheet;
use crate::error::{NumbersError, Result};
use numbers_engine::engine::{Cell, CellRef, evaluate};

impl Sheet {
    /// Commit raw input to a cell and return the value it now displays.
    ///
    /// The input is evaluated against the grid as it stands before the commit,
    /// so a self reference reads the cell's previous value. Only this cell is
    /// written: cells whose formulas referenced it keep their old values until
    /// they are edited themselves.
    pub fn set_cell_from_input(&mut self, cell_ref: CellRef, raw: &str) -> Result<String> {
        if !cell_ref.in_grid() {
            return Err(NumbersError::OutOfGrid(cell_ref));
        }

        let value = evaluate(raw, &self.grid);
        tracing::debug!(cell = %cell_ref, input = raw, value = value.as_str(), "committed edit");
        self.grid
            .insert(cell_ref, Cell::committed(raw, value.clone()));
        Ok(value)
    }

    /// Commit raw input to the cell named by `address` (e.g. "B7").
    pub fn set_cell_by_address(&mut self, address: &str, raw: &str) -> Result<String> {
        let cell_ref = CellRef::from_str(address)
            .ok_or_else(|| NumbersError::InvalidAddress(address.to_string()))?;
        self.set_cell_from_input(cell_ref, raw)
    }

    /// Apply a sequence of edits in order, each as its own commit.
    pub fn apply_edits<I>(&mut self, edits: I) -> Result<()>
    where
        I: IntoIterator<Item = (CellRef, String)>,
    {
        for (cell_ref, raw) in edits {
            self.set_cell_from_input(cell_ref, &raw)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cell(addr: &str) -> CellRef {
        CellRef::from_str(addr).unwrap()
    }

    #[test]
    fn test_literal_commit_stores_value_and_formula() {
        let mut sheet = Sheet::new();
        assert_eq!(sheet.set_cell_by_address("A1", "hello").unwrap(), "hello");
        assert_eq!(
            sheet.get_cell(&cell("A1")),
            Some(Cell::committed("hello", "hello".to_string()))
        );
    }

    #[test]
    fn test_formula_commit_keeps_raw_input() {
        let mut sheet = Sheet::new();
        sheet.set_cell_by_address("A1", "5").unwrap();
        sheet.set_cell_by_address("B1", "10").unwrap();
        assert_eq!(sheet.set_cell_by_address("C1", "=A1+B1").unwrap(), "15");
        assert_eq!(sheet.get_cell_display(&cell("C1")), "15");
        assert_eq!(sheet.get_cell_input(&cell("C1")), "=A1+B1");
    }

    #[test]
    fn test_error_keeps_raw_input_for_correction() {
        let mut sheet = Sheet::new();
        sheet.set_cell_by_address("A1", "=1++").unwrap();
        assert_eq!(sheet.get_cell_display(&cell("A1")), "#ERROR");
        assert_eq!(sheet.get_cell_input(&cell("A1")), "=1++");

        sheet.set_cell_by_address("A1", "=1+1").unwrap();
        assert_eq!(sheet.get_cell_display(&cell("A1")), "2");
    }

    #[test]
    fn test_referenced_value_is_not_recomputed() {
        let mut sheet = Sheet::new();
        sheet.set_cell_by_address("B1", "2").unwrap();
        sheet.set_cell_by_address("A1", "=B1").unwrap();
        assert_eq!(sheet.get_cell_display(&cell("A1")), "2");

        sheet.set_cell_by_address("B1", "9").unwrap();
        assert_eq!(sheet.get_cell_display(&cell("A1")), "2");

        // Re-editing A1 picks up the new value.
        sheet.set_cell_by_address("A1", "=B1").unwrap();
        assert_eq!(sheet.get_cell_display(&cell("A1")), "9");
    }

    #[test]
    fn test_self_reference_reads_previous_value() {
        let mut sheet = Sheet::new();
        assert_eq!(sheet.set_cell_by_address("A1", "=A1+1").unwrap(), "1");
        assert_eq!(sheet.set_cell_by_address("A1", "=A1+1").unwrap(), "2");
        assert_eq!(sheet.set_cell_by_address("A1", "=A1*10").unwrap(), "20");
    }

    #[test]
    fn test_empty_commit_clears_display() {
        let mut sheet = Sheet::new();
        sheet.set_cell_by_address("A1", "7").unwrap();
        sheet.set_cell_by_address("A1", "").unwrap();
        assert_eq!(sheet.get_cell_display(&cell("A1")), "");
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.set_cell_by_address("B1", "=A1+1").unwrap(), "1");
    }

    #[test]
    fn test_rejects_bad_addresses() {
        let mut sheet = Sheet::new();
        assert!(matches!(
            sheet.set_cell_by_address("a1", "1"),
            Err(NumbersError::InvalidAddress(ref a)) if a == "a1"
        ));
        assert!(matches!(
            sheet.set_cell_by_address("A51", "1"),
            Err(NumbersError::OutOfGrid(_))
        ));
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_apply_edits_in_order() {
        let mut sheet = Sheet::new();
        sheet
            .apply_edits(vec![
                (cell("A1"), "3".to_string()),
                (cell("A2"), "=A1*2".to_string()),
                (cell("A1"), "4".to_string()),
            ])
            .unwrap();
        assert_eq!(sheet.get_cell_display(&cell("A1")), "4");
        assert_eq!(sheet.get_cell_display(&cell("A2")), "6");
    }

    #[test]
    fn test_populated_cells_row_major() {
        let mut sheet = Sheet::new();
        sheet.set_cell_by_address("B2", "x").unwrap();
        sheet.set_cell_by_address("C1", "y").unwrap();
        sheet.set_cell_by_address("A2", "z").unwrap();
        let order: Vec<String> = sheet
            .populated_cells()
            .iter()
            .map(|(r, _)| r.to_string())
            .collect();
        assert_eq!(order, vec!["C1", "A2", "B2"]);
    }
}
