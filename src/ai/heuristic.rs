use crate::game::{GameState, Player};
use crate::search::Heuristic;

/// Center-weighted material count.
///
/// Every occupied cell contributes its positional weight, positively for
/// `player` and negatively for the opponent. A decided position scores
/// `+inf`/`-inf` so a real win or loss outranks any heuristic value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalHeuristic;

impl PositionalHeuristic {
    /// Weight of cell (row, col): one plus its Manhattan closeness to the
    /// board center. Symmetric under horizontal and vertical reflection.
    pub fn weight(rows: usize, cols: usize, row: usize, col: usize) -> f64 {
        let closeness = |index: usize, len: usize| {
            let center = (len as f64 - 1.0) / 2.0;
            center - (index as f64 - center).abs()
        };
        1.0 + closeness(row, rows) + closeness(col, cols)
    }

    /// The full weight table for a `rows x cols` board.
    pub fn weight_table(rows: usize, cols: usize) -> Vec<Vec<f64>> {
        (0..rows)
            .map(|row| (0..cols).map(|col| Self::weight(rows, cols, row, col)).collect())
            .collect()
    }
}

impl Heuristic<GameState> for PositionalHeuristic {
    fn evaluate(&self, state: &GameState, player: Player) -> f64 {
        if let Some(winner) = state.winner() {
            return if winner == player {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }

        let rows = state.board().rows();
        let cols = state.board().cols();
        let mut score = 0.0;
        for row in 0..rows {
            for col in 0..cols {
                match state.owner(row, col) {
                    Some(owner) if owner == player => score += Self::weight(rows, cols, row, col),
                    Some(_) => score -= Self::weight(rows, cols, row, col),
                    None => {}
                }
            }
        }
        score
    }
}
