use crate::game::{Board, Coord, GameOutcome, GameState, Player, RUN_LENGTH};

use super::agent::Agent;

/// Trait for evaluating a position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, state: &GameState, player: Player) -> f64;
}

/// Weight of one point of score margin. Dwarfs every positional term.
const SCORE_WEIGHT: f64 = 1_000.0;
const OUTCOME_VALUE: f64 = 1_000_000.0;

/// Default heuristic: score margin first, then 4-cell window threats over
/// cells that are still in play.
pub struct CaptureHeuristic;

impl CaptureHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> f64 {
        if own == 3 && empty == 1 {
            50.0
        } else if own == 2 && empty == 2 {
            10.0
        } else if opp == 3 && empty == 1 {
            -80.0
        } else if opp == 2 && empty == 2 {
            -10.0
        } else {
            0.0
        }
    }

    /// Sum window scores over every in-bounds, fully unblocked window.
    fn windows(board: &Board, player: Player) -> f64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0.0;

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let start = Coord::new(row, col);
                for (d_row, d_col) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                    let mut own = 0;
                    let mut opp = 0;
                    let mut empty = 0;
                    let mut cursor = Some(start);
                    for _ in 0..RUN_LENGTH {
                        let Some(coord) = cursor.filter(|&c| !board.is_blocked(c)) else {
                            break;
                        };
                        match board.cell(coord) {
                            c if c == own_cell => own += 1,
                            c if c == opp_cell => opp += 1,
                            _ => empty += 1,
                        }
                        cursor = board.offset(coord, d_row, d_col);
                    }
                    if own + opp + empty == RUN_LENGTH {
                        score += Self::score_window(own, opp, empty);
                    }
                }
            }
        }

        score
    }
}

impl Heuristic for CaptureHeuristic {
    fn evaluate(&self, state: &GameState, player: Player) -> f64 {
        let board = state.board();
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = state.scores().margin(player) as f64 * SCORE_WEIGHT;

        // Center column bonus
        let center = board.cols() / 2;
        for row in 0..board.rows() {
            let coord = Coord::new(row, center);
            if board.is_blocked(coord) {
                continue;
            }
            let cell = board.cell(coord);
            if cell == own_cell {
                score += 3.0;
            } else if cell == opp_cell {
                score -= 3.0;
            }
        }

        score + Self::windows(board, player)
    }
}

/// Column ordering: center-first for better alpha-beta pruning.
fn move_order(cols: usize) -> Vec<usize> {
    let center = cols / 2;
    let mut order: Vec<usize> = (0..cols).collect();
    order.sort_by_key(|&col| (col.abs_diff(center), col));
    order
}

/// Negamax agent with alpha-beta pruning. Fully deterministic: ties go to
/// the column searched first.
pub struct NegamaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl NegamaxAgent {
    pub fn new(depth: usize) -> Self {
        NegamaxAgent {
            depth: depth.max(1),
            heuristic: Box::new(CaptureHeuristic),
        }
    }

    fn best_move(&self, state: &GameState) -> Option<usize> {
        let legal = state.legal_actions();
        let mut best_action = *legal.first()?;
        let mut best_score = f64::NEG_INFINITY;
        let mut alpha = f64::NEG_INFINITY;

        for col in move_order(state.board().cols()) {
            if !legal.contains(&col) {
                continue;
            }
            let Ok(next) = state.apply_move(col) else {
                continue;
            };
            // Negamax: opponent's score is negated
            let score = -self.negamax(&next, self.depth - 1, f64::NEG_INFINITY, -alpha);
            if score > best_score {
                best_score = score;
                best_action = col;
            }
            if score > alpha {
                alpha = score;
            }
        }

        Some(best_action)
    }

    fn negamax(&self, state: &GameState, depth: usize, mut alpha: f64, beta: f64) -> f64 {
        let to_move = state.current_player();

        if let Some(outcome) = state.outcome() {
            // Prefer winning by more and losing by less
            let margin = state.scores().margin(to_move) as f64 * SCORE_WEIGHT;
            return match outcome {
                GameOutcome::Winner(p) if p == to_move => OUTCOME_VALUE + margin,
                GameOutcome::Winner(_) => -OUTCOME_VALUE + margin,
                GameOutcome::Tie => 0.0,
            };
        }

        if depth == 0 {
            return self.heuristic.evaluate(state, to_move);
        }

        let legal = state.legal_actions();
        let mut best = f64::NEG_INFINITY;

        for col in move_order(state.board().cols()) {
            if !legal.contains(&col) {
                continue;
            }
            let Ok(next) = state.apply_move(col) else {
                continue;
            };
            let score = -self.negamax(&next, depth - 1, -beta, -alpha);
            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

impl Agent for NegamaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        self.best_move(state)
    }

    fn name(&self) -> &str {
        "Negamax"
    }
}
