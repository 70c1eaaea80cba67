use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::player::Player;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Blue,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Blue => Some(Player::Blue),
        }
    }
}

/// A grid position. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    InvalidColumn,
    ColumnUnavailable,
}

/// Ownership grid plus the set of cells removed from play by captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    blocked: HashSet<Coord>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            blocked: HashSet::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.get(coord.row, coord.col)
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row * self.cols + coord.col] = cell;
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Step from `coord` by a signed offset, returning `None` when it leaves the grid.
    pub fn offset(&self, coord: Coord, d_row: isize, d_col: isize) -> Option<Coord> {
        let row = coord.row.checked_add_signed(d_row)?;
        let col = coord.col.checked_add_signed(d_col)?;
        let next = Coord { row, col };
        self.contains(next).then_some(next)
    }

    pub fn is_blocked(&self, coord: Coord) -> bool {
        self.blocked.contains(&coord)
    }

    pub fn blocked(&self) -> &HashSet<Coord> {
        &self.blocked
    }

    /// Blocked cells in row-major order.
    pub fn blocked_sorted(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.blocked.iter().copied().collect();
        cells.sort();
        cells
    }

    /// Permanently remove a cell from play. Blocking never shrinks.
    pub(crate) fn block(&mut self, coord: Coord) {
        self.blocked.insert(coord);
    }

    /// Whether a piece could land on this cell
    pub fn is_open(&self, coord: Coord) -> bool {
        self.cell(coord) == Cell::Empty && !self.is_blocked(coord)
    }

    /// Lowest empty, unblocked row in a column. Blocked cells don't hold up
    /// pieces, they are just skipped.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.is_open(Coord { row, col }))
    }

    /// Check if a column can still take a piece
    pub fn is_column_playable(&self, col: usize) -> bool {
        self.landing_row(col).is_some()
    }

    pub fn playable_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| self.is_column_playable(col))
            .collect()
    }

    /// True while any column has a legal landing cell
    pub fn has_legal_move(&self) -> bool {
        (0..self.cols).any(|col| self.is_column_playable(col))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, DropError> {
        if col >= self.cols {
            return Err(DropError::InvalidColumn);
        }
        let row = self.landing_row(col).ok_or(DropError::ColumnUnavailable)?;
        self.set(Coord { row, col }, cell);
        Ok(row)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 7);
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(board.blocked().is_empty());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.drop_piece(3, Cell::Blue).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Blue);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();
        for _ in 0..board.rows() {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(!board.is_column_playable(0));
        assert_eq!(
            board.drop_piece(0, Cell::Blue),
            Err(DropError::ColumnUnavailable)
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(board.drop_piece(7, Cell::Red), Err(DropError::InvalidColumn));
        assert_eq!(board.landing_row(99), None);
    }

    #[test]
    fn test_lands_above_blocked_empty_cell() {
        let mut board = Board::default();
        board.block(Coord::new(5, 2));
        board.block(Coord::new(4, 2));

        let row = board.drop_piece(2, Cell::Red).unwrap();
        assert_eq!(row, 3);
        assert_eq!(board.get(5, 2), Cell::Empty);
    }

    #[test]
    fn test_lands_below_blocked_cell() {
        let mut board = Board::default();
        board.block(Coord::new(3, 1));

        assert_eq!(board.landing_row(1), Some(5));
        for _ in 0..2 {
            board.drop_piece(1, Cell::Blue).unwrap();
        }
        // Row 3 is skipped once rows 5 and 4 fill up
        assert_eq!(board.landing_row(1), Some(2));
    }

    #[test]
    fn test_fully_blocked_column_is_unplayable() {
        let mut board = Board::default();
        for row in 0..board.rows() {
            board.block(Coord::new(row, 6));
        }
        assert!(!board.is_column_playable(6));
        assert_eq!(board.playable_columns(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_no_legal_move_when_everything_is_taken() {
        let mut board = Board::new(4, 4);
        for col in 0..4 {
            for _ in 0..2 {
                board.drop_piece(col, Cell::Red).unwrap();
            }
            board.block(Coord::new(0, col));
            board.block(Coord::new(1, col));
        }
        assert!(!board.has_legal_move());
    }

    #[test]
    fn test_gravity_without_blocking() {
        let mut board = Board::default();
        let moves = [3, 3, 2, 4, 3, 0, 6, 6, 2, 3, 1, 5, 5, 5];
        for (i, &col) in moves.iter().enumerate() {
            let cell = if i % 2 == 0 { Cell::Red } else { Cell::Blue };
            board.drop_piece(col, cell).unwrap();
        }

        for col in 0..board.cols() {
            let mut seen_empty = false;
            for row in (0..board.rows()).rev() {
                match board.get(row, col) {
                    Cell::Empty => seen_empty = true,
                    _ => assert!(!seen_empty, "floating piece at ({row}, {col})"),
                }
            }
        }
    }

    #[test]
    fn test_offset_stays_in_bounds() {
        let board = Board::default();
        assert_eq!(board.offset(Coord::new(0, 0), -1, 0), None);
        assert_eq!(board.offset(Coord::new(5, 6), 0, 1), None);
        assert_eq!(board.offset(Coord::new(2, 2), 1, -1), Some(Coord::new(3, 1)));
    }

    #[test]
    fn test_blocked_sorted_is_row_major() {
        let mut board = Board::default();
        board.block(Coord::new(5, 1));
        board.block(Coord::new(0, 4));
        board.block(Coord::new(5, 0));
        assert_eq!(
            board.blocked_sorted(),
            vec![Coord::new(0, 4), Coord::new(5, 0), Coord::new(5, 1)]
        );
    }
}
