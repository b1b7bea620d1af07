use std::fmt::Debug;

use crate::error::MoveError;
use crate::game::{GameState, Player};

/// A position in a two-player, zero-sum, perfect-information game.
///
/// Implementations must be immutable values: `apply_action` returns a new
/// position and never changes `self`.
pub trait Game: Sized {
    type Action: Copy + PartialEq + Debug;
    type Player: Copy + PartialEq + Debug;
    type Error: std::error::Error + 'static;

    /// The player whose turn it is.
    fn current_player(&self) -> Self::Player;

    /// All legal actions; empty iff no legal move remains.
    fn possible_actions(&self) -> Vec<Self::Action>;

    /// The position reached by playing `action`.
    fn apply_action(&self, action: Self::Action) -> Result<Self, Self::Error>;

    fn is_terminal(&self) -> bool;

    fn winner(&self) -> Option<Self::Player>;

    /// `(action, successor)` pairs in `possible_actions` order.
    fn successors(&self) -> Result<Vec<(Self::Action, Self)>, Self::Error> {
        self.possible_actions()
            .into_iter()
            .map(|action| Ok((action, self.apply_action(action)?)))
            .collect()
    }

    /// +1 if `player` won, -1 if the opponent won, 0 otherwise.
    fn utility(&self, player: Self::Player) -> f64 {
        match self.winner() {
            Some(winner) if winner == player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }
}

/// Static evaluation of a position from `player`'s point of view.
pub trait Heuristic<G: Game> {
    fn evaluate(&self, state: &G, player: G::Player) -> f64;
}

impl<G, F> Heuristic<G> for F
where
    G: Game,
    F: Fn(&G, G::Player) -> f64,
{
    fn evaluate(&self, state: &G, player: G::Player) -> f64 {
        self(state, player)
    }
}

impl Game for GameState {
    type Action = usize;
    type Player = Player;
    type Error = MoveError;

    fn current_player(&self) -> Player {
        GameState::current_player(self)
    }

    fn possible_actions(&self) -> Vec<usize> {
        self.legal_actions()
    }

    fn apply_action(&self, action: usize) -> Result<Self, MoveError> {
        self.apply_move(action)
    }

    fn is_terminal(&self) -> bool {
        GameState::is_terminal(self)
    }

    fn winner(&self) -> Option<Player> {
        GameState::winner(self)
    }

    fn utility(&self, player: Player) -> f64 {
        GameState::utility(self, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successors_follow_possible_actions_order() {
        let state = GameState::from_rows(&["R...", "B...", "R...", "B..."], Player::Blue).unwrap();
        let successors = Game::successors(&state).unwrap();
        let actions: Vec<usize> = successors.iter().map(|(a, _)| *a).collect();
        assert_eq!(actions, Game::possible_actions(&state));
        for (action, next) in &successors {
            assert_eq!(next, &state.apply_move(*action).unwrap());
        }
    }

    #[test]
    fn successors_are_idempotent() {
        let state = GameState::initial().apply_move(3).unwrap();
        let first = Game::successors(&state).unwrap();
        let second = Game::successors(&state).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn successors_of_terminal_state_are_empty() {
        let state = GameState::from_rows(&["....", "....", "BBB.", "RRRR"], Player::Blue).unwrap();
        assert!(Game::successors(&state).unwrap().is_empty());
    }

    #[test]
    fn closures_are_heuristics() {
        let count_pieces = |state: &GameState, _player: Player| state.board().piece_count() as f64;
        let state = GameState::initial().apply_move(0).unwrap();
        assert_eq!(count_pieces.evaluate(&state, Player::Red), 1.0);
    }
}
