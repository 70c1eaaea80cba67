use super::board::{Board, Coord};
use super::player::Player;

/// Minimum run length that triggers a capture.
pub const RUN_LENGTH: usize = 4;

/// The four axes a run can lie on, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (row, col) step for the positive sense of this axis
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Four or more connected, unblocked cells of one player along one axis,
/// ordered from the negative end to the positive end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningRun {
    pub player: Player,
    pub direction: Direction,
    pub cells: Vec<Coord>,
}

impl WinningRun {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Check whether the piece at `anchor` completes a run. The first axis that
/// reaches `RUN_LENGTH` is returned; later axes are not examined.
pub fn find_winning_run(board: &Board, anchor: Coord) -> Option<WinningRun> {
    if !board.contains(anchor) || board.is_blocked(anchor) {
        return None;
    }
    let player = board.cell(anchor).owner()?;

    Direction::ALL.iter().find_map(|&direction| {
        let cells = line_through(board, anchor, direction, player);
        (cells.len() >= RUN_LENGTH).then_some(WinningRun {
            player,
            direction,
            cells,
        })
    })
}

/// Collect the maximal run through `anchor` along one axis.
fn line_through(board: &Board, anchor: Coord, direction: Direction, player: Player) -> Vec<Coord> {
    let (d_row, d_col) = direction.delta();
    let extends = |coord: Coord| board.cell(coord).owner() == Some(player) && !board.is_blocked(coord);

    let mut backward = Vec::new();
    let mut cursor = anchor;
    while let Some(next) = board.offset(cursor, -d_row, -d_col).filter(|&c| extends(c)) {
        backward.push(next);
        cursor = next;
    }

    let mut line: Vec<Coord> = backward.into_iter().rev().collect();
    line.push(anchor);

    let mut cursor = anchor;
    while let Some(next) = board.offset(cursor, d_row, d_col).filter(|&c| extends(c)) {
        line.push(next);
        cursor = next;
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;

    fn drop_all(board: &mut Board, moves: &[(usize, Cell)]) -> usize {
        let mut last = 0;
        for &(col, cell) in moves {
            last = board.drop_piece(col, cell).unwrap();
        }
        last
    }

    #[test]
    fn test_horizontal_run() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        let run = find_winning_run(&board, Coord::new(5, 2)).unwrap();
        assert_eq!(run.direction, Direction::Horizontal);
        assert_eq!(run.player, Player::Red);
        assert_eq!(
            run.cells,
            vec![
                Coord::new(5, 0),
                Coord::new(5, 1),
                Coord::new(5, 2),
                Coord::new(5, 3)
            ]
        );
    }

    #[test]
    fn test_vertical_run() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Blue).unwrap();
        }
        let run = find_winning_run(&board, Coord::new(2, 3)).unwrap();
        assert_eq!(run.direction, Direction::Vertical);
        let rows: Vec<usize> = run.cells.iter().map(|c| c.row).collect();
        assert_eq!(rows, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_diagonal_down_left_run() {
        // "/" shape: the anchor at (2, 3) runs down-left to (5, 0)
        let mut board = Board::default();
        let row = drop_all(
            &mut board,
            &[
                (0, Cell::Red),
                (1, Cell::Blue),
                (1, Cell::Red),
                (2, Cell::Blue),
                (2, Cell::Blue),
                (2, Cell::Red),
                (3, Cell::Blue),
                (3, Cell::Blue),
                (3, Cell::Blue),
                (3, Cell::Red),
            ],
        );
        let run = find_winning_run(&board, Coord::new(row, 3)).unwrap();
        assert_eq!(run.direction, Direction::DiagonalDownLeft);
        assert_eq!(run.cells.first(), Some(&Coord::new(2, 3)));
        assert_eq!(run.cells.last(), Some(&Coord::new(5, 0)));
    }

    #[test]
    fn test_diagonal_down_right_run() {
        // "\" shape: (2, 3) down-right to (5, 6)
        let mut board = Board::default();
        let row = drop_all(
            &mut board,
            &[
                (6, Cell::Red),
                (5, Cell::Blue),
                (5, Cell::Red),
                (4, Cell::Blue),
                (4, Cell::Blue),
                (4, Cell::Red),
                (3, Cell::Blue),
                (3, Cell::Blue),
                (3, Cell::Blue),
                (3, Cell::Red),
            ],
        );
        let run = find_winning_run(&board, Coord::new(row, 3)).unwrap();
        assert_eq!(run.direction, Direction::DiagonalDownRight);
        assert_eq!(run.len(), 4);
    }

    #[test]
    fn test_no_run_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(find_winning_run(&board, Coord::new(5, 1)).is_none());
    }

    #[test]
    fn test_blocked_cell_breaks_run() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        board.block(Coord::new(5, 0));
        assert!(find_winning_run(&board, Coord::new(5, 3)).is_none());
    }

    #[test]
    fn test_blocked_anchor_never_wins() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        board.block(Coord::new(5, 3));
        assert!(find_winning_run(&board, Coord::new(5, 3)).is_none());
    }

    #[test]
    fn test_horizontal_checked_before_vertical() {
        // (5, 3) sits on a 4-long row and a 4-long column; the row wins
        // because horizontal is scanned first.
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Red).unwrap();
        }
        for col in [0, 1, 2] {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        let run = find_winning_run(&board, Coord::new(5, 3)).unwrap();
        assert_eq!(run.direction, Direction::Horizontal);
        assert_eq!(run.len(), 4);

        let run = find_winning_run(&board, Coord::new(2, 3)).unwrap();
        assert_eq!(run.direction, Direction::Vertical);
    }

    #[test]
    fn test_run_longer_than_four() {
        let mut board = Board::default();
        for col in 0..5 {
            board.drop_piece(col, Cell::Blue).unwrap();
        }
        let run = find_winning_run(&board, Coord::new(5, 4)).unwrap();
        assert_eq!(run.len(), 5);
        assert_eq!(run.cells[0], Coord::new(5, 0));
    }

    #[test]
    fn test_empty_anchor() {
        let board = Board::default();
        assert!(find_winning_run(&board, Coord::new(5, 0)).is_none());
    }
}
