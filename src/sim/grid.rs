//! Square grid coordinate space
//!
//! Cells are addressed by 1-indexed `(row, column)`. Coordinates are signed so
//! that a head which has just left the board is still representable.

use serde::{Deserialize, Serialize};

/// A cell address on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub column: i32,
}

impl Cell {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Shift by a (row, column) delta
    pub fn offset(&self, d_row: i32, d_column: i32) -> Self {
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }
}

/// An N×N board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Cells per edge
    pub size: i32,
    /// Edge length of one cell, percent of the board edge
    pub cell_size_percent: f32,
}

impl Grid {
    /// Derive N from how much of the board edge a single cell covers
    pub fn from_cell_size(cell_size_percent: f32) -> Self {
        let size = (100.0 / cell_size_percent).floor() as i32;
        Self {
            size: size.max(1),
            cell_size_percent,
        }
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (1..=self.size).contains(&cell.row) && (1..=self.size).contains(&cell.column)
    }

    /// Visual offset of a cell's top-left corner as (x%, y%)
    pub fn cell_to_screen_offset(&self, cell: Cell) -> (f32, f32) {
        let x = (cell.column - 1) as f32 * self.cell_size_percent;
        let y = (cell.row - 1) as f32 * self.cell_size_percent;
        (x, y)
    }

    /// Total number of in-bounds cells
    pub fn cell_count(&self) -> usize {
        (self.size * self.size) as usize
    }

    /// Every in-bounds cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..=self.size)
            .flat_map(move |row| (1..=self.size).map(move |column| Cell::new(row, column)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_from_cell_percent() {
        assert_eq!(Grid::from_cell_size(4.0).size, 25);
        assert_eq!(Grid::from_cell_size(10.0).size, 10);
        assert_eq!(Grid::from_cell_size(30.0).size, 3);
    }

    #[test]
    fn test_bounds_are_one_indexed() {
        let grid = Grid::from_cell_size(4.0);

        assert!(grid.in_bounds(Cell::new(1, 1)));
        assert!(grid.in_bounds(Cell::new(25, 25)));
        assert!(!grid.in_bounds(Cell::new(0, 5)));
        assert!(!grid.in_bounds(Cell::new(5, 0)));
        assert!(!grid.in_bounds(Cell::new(26, 5)));
        assert!(!grid.in_bounds(Cell::new(5, 26)));
    }

    #[test]
    fn test_screen_offset() {
        let grid = Grid::from_cell_size(4.0);

        assert_eq!(grid.cell_to_screen_offset(Cell::new(1, 1)), (0.0, 0.0));
        // x follows the column, y follows the row
        assert_eq!(grid.cell_to_screen_offset(Cell::new(10, 3)), (8.0, 36.0));
        assert_eq!(grid.cell_to_screen_offset(Cell::new(25, 25)), (96.0, 96.0));
    }

    #[test]
    fn test_cells_cover_board_once() {
        let grid = Grid::from_cell_size(25.0);
        let cells: Vec<Cell> = grid.cells().collect();

        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0], Cell::new(1, 1));
        assert_eq!(cells[15], Cell::new(4, 4));
        assert!(cells.iter().all(|c| grid.in_bounds(*c)));
    }
}
