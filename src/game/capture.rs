use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::board::{Board, Coord};
use super::player::Player;
use super::win::WinningRun;

/// Bounding rectangle of a captured area, inclusive on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedRegion {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl CapturedRegion {
    /// Smallest rectangle containing every coordinate, or `None` for an empty set.
    pub fn bounding<'a>(coords: impl IntoIterator<Item = &'a Coord>) -> Option<Self> {
        coords.into_iter().fold(None, |acc, c| {
            Some(match acc {
                None => CapturedRegion {
                    min_row: c.row,
                    max_row: c.row,
                    min_col: c.col,
                    max_col: c.col,
                },
                Some(r) => CapturedRegion {
                    min_row: r.min_row.min(c.row),
                    max_row: r.max_row.max(c.row),
                    min_col: r.min_col.min(c.col),
                    max_col: r.max_col.max(c.col),
                },
            })
        })
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn area(&self) -> usize {
        self.height() * self.width()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        (self.min_row..=self.max_row).contains(&coord.row)
            && (self.min_col..=self.max_col).contains(&coord.col)
    }

    /// Every cell of the rectangle in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (self.min_row..=self.max_row)
            .flat_map(move |row| (self.min_col..=self.max_col).map(move |col| Coord { row, col }))
    }
}

/// The cells a capture flooded and the rectangle it blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub region: CapturedRegion,
    pub flooded: Vec<Coord>,
}

/// Flood out from a winning run over 8-neighbors of the same owner, then block
/// the whole bounding rectangle of the flooded cells. Returns `None` and leaves
/// the board untouched when every run cell is already blocked.
pub fn capture(board: &mut Board, run: &WinningRun, player: Player) -> Option<Capture> {
    let flooded = flood(board, &run.cells, player);
    let region = CapturedRegion::bounding(&flooded)?;

    for coord in region.cells() {
        board.block(coord);
    }

    Some(Capture { region, flooded })
}

/// Breadth-first search from the unblocked seeds through same-owner cells.
pub fn flood(board: &Board, seeds: &[Coord], player: Player) -> Vec<Coord> {
    let mut visited: HashSet<Coord> = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    for &seed in seeds {
        if board.contains(seed) && !board.is_blocked(seed) && visited.insert(seed) {
            order.push(seed);
            queue.push_back(seed);
        }
    }

    while let Some(coord) = queue.pop_front() {
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let Some(next) = board.offset(coord, d_row, d_col) else {
                    continue;
                };
                if visited.contains(&next)
                    || board.is_blocked(next)
                    || board.cell(next).owner() != Some(player)
                {
                    continue;
                }
                visited.insert(next);
                order.push(next);
                queue.push_back(next);
            }
        }
    }

    order
}
