use super::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub cols: i32,
    pub rows: i32,
}

impl GridBounds {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols: i32::try_from(cols).unwrap_or(i32::MAX),
            rows: i32::try_from(rows).unwrap_or(i32::MAX),
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.cols).contains(&cell.col) && (0..self.rows).contains(&cell.row)
    }

    pub fn cell_count(&self) -> usize {
        self.cols.max(0) as usize * self.rows.max(0) as usize
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.cols / 2, self.rows / 2)
    }

    /// Row-major walk over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(col, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let bounds = GridBounds::new(27, 20);
        assert!(bounds.contains(Cell::new(0, 0)));
        assert!(bounds.contains(Cell::new(26, 19)));
        assert!(!bounds.contains(Cell::new(27, 0)));
        assert!(!bounds.contains(Cell::new(0, 20)));
        assert!(!bounds.contains(Cell::new(-1, 5)));
        assert!(!bounds.contains(Cell::new(5, -1)));
    }

    #[test]
    fn test_center_rounds_down() {
        assert_eq!(GridBounds::new(27, 27).center(), Cell::new(13, 13));
        assert_eq!(GridBounds::new(10, 6).center(), Cell::new(5, 3));
    }

    #[test]
    fn test_cells_covers_grid() {
        let bounds = GridBounds::new(3, 2);
        let cells: Vec<Cell> = bounds.cells().collect();
        assert_eq!(cells.len(), bounds.cell_count());
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(2, 1));
    }
}
