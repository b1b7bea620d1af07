use std::fmt;

use super::{Board, Cell, Player};
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// One immutable position: the board, the player to move and, once the game
/// has ended, its outcome.
///
/// `current_player` is flipped by `apply_move`, so on a freshly produced
/// successor it already names the opponent of the mover.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create the initial 6x7 game state
    pub fn initial() -> Self {
        GameState {
            board: Board::default(),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Create an empty game on a `rows x cols` board, Red to move.
    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(GameState {
            board: Board::new(rows, cols)?,
            current_player: Player::Red,
            outcome: None,
        })
    }

    /// Build a position from an arbitrary board. The outcome is derived from
    /// the pieces already on it.
    pub fn from_board(board: Board, to_move: Player) -> Result<Self, BoardError> {
        let outcome = match board.line_owners() {
            (true, true) => return Err(BoardError::MultipleWinners),
            (true, false) => Some(GameOutcome::Winner(Player::Red)),
            (false, true) => Some(GameOutcome::Winner(Player::Blue)),
            (false, false) if board.is_full() => Some(GameOutcome::Draw),
            (false, false) => None,
        };

        Ok(GameState {
            board,
            current_player: to_move,
            outcome,
        })
    }

    /// Build a position from text rows, top row first (`R`, `B`, `.`).
    pub fn from_rows<S: AsRef<str>>(rows: &[S], to_move: Player) -> Result<Self, BoardError> {
        Self::from_board(Board::from_rows(rows)?, to_move)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// The winner, if the game ended with four in a row.
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    /// Get list of legal columns (not full), in ascending order
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        // Clone the board and apply move
        let mut new_board = self.board.clone();
        let row = new_board.drop_piece(column, self.current_player.to_cell())?;

        // Check for win
        let outcome = if new_board.check_win(row, column) {
            Some(GameOutcome::Winner(self.current_player))
        } else if new_board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(GameState {
            board: new_board,
            current_player: self.current_player.other(),
            outcome,
        })
    }

    /// True utility for `player`: +1 for a win, -1 for a loss, 0 otherwise.
    pub fn utility(&self, player: Player) -> f64 {
        match self.winner() {
            Some(winner) if winner == player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    /// Owner of the cell at (row, col), if any.
    pub fn owner(&self, row: usize, col: usize) -> Option<Player> {
        match self.board.get(row, col) {
            Cell::Red => Some(Player::Red),
            Cell::Blue => Some(Player::Blue),
            Cell::Empty => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.outcome {
            Some(GameOutcome::Winner(player)) => write!(f, "{} wins", player.name()),
            Some(GameOutcome::Draw) => write!(f, "Draw"),
            None => write!(f, "{} to move", self.current_player.name()),
        }
    }
}
