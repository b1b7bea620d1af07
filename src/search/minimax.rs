//! Plain minimax over true utility.

use log::debug;

use super::{cutoff, select_root_action, Decision, Depth, Game};
use crate::error::SearchError;

struct Minimax<G: Game> {
    player: G::Player,
    nodes: u64,
}

impl<G: Game> Minimax<G> {
    fn max_value(&mut self, state: &G, depth: Depth) -> Result<f64, G::Error> {
        self.nodes += 1;
        if cutoff(state, depth) {
            return Ok(state.utility(self.player));
        }

        let mut value = f64::NEG_INFINITY;
        for (_, next) in state.successors()? {
            value = value.max(self.min_value(&next, depth.decrement())?);
        }
        Ok(value)
    }

    fn min_value(&mut self, state: &G, depth: Depth) -> Result<f64, G::Error> {
        self.nodes += 1;
        if cutoff(state, depth) {
            return Ok(state.utility(self.player));
        }

        let mut value = f64::INFINITY;
        for (_, next) in state.successors()? {
            value = value.min(self.max_value(&next, depth.decrement())?);
        }
        Ok(value)
    }
}

/// Best action for the player to move, searching to true terminal states or
/// until `max_depth` plies below the root's successors.
///
/// A depth cutoff scores the position by its utility (0 unless decided).
pub fn minimax_search<G: Game>(
    state: &G,
    max_depth: impl Into<Depth>,
) -> Result<G::Action, SearchError<G::Error>> {
    minimax_decision(state, max_depth).map(|decision| decision.action)
}

/// Like [`minimax_search`], also reporting the root value and node count.
pub fn minimax_decision<G: Game>(
    state: &G,
    max_depth: impl Into<Depth>,
) -> Result<Decision<G::Action>, SearchError<G::Error>> {
    let depth = max_depth.into();
    let mut engine = Minimax::<G> {
        player: state.current_player(),
        nodes: 0,
    };

    let (action, value) = select_root_action(state, |next| engine.min_value(next, depth))?;

    debug!(
        "minimax depth {depth}: chose {action:?} (value {value}, {} nodes)",
        engine.nodes
    );
    Ok(Decision {
        action,
        value,
        nodes: engine.nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Player};

    #[test]
    fn takes_the_completing_column() {
        // Red has an open three on the bottom row; columns 0 and 4 both win.
        let state = GameState::from_rows(
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                "......B",
                ".RRR.BB",
            ],
            Player::Red,
        )
        .unwrap();
        for depth in 1u32..=3 {
            let decision = minimax_decision(&state, depth).unwrap();
            assert_eq!(decision.action, 0, "depth {depth}");
            assert_eq!(decision.value, 1.0, "depth {depth}");
        }
    }

    #[test]
    fn avoids_the_only_losing_reply() {
        // Blue must take column 3 or lose; found by searching to the end.
        let mut state = GameState::with_dimensions(4, 4).unwrap();
        for col in [1, 1, 2, 2, 0] {
            state = state.apply_move(col).unwrap();
        }
        assert_eq!(state.current_player(), Player::Blue);

        let decision = minimax_decision(&state, Depth::Unbounded).unwrap();
        assert_eq!(decision.action, 3);
        assert_eq!(decision.value, 0.0);
    }

    #[test]
    fn finds_the_unique_drawing_move() {
        let mut state = GameState::with_dimensions(4, 4).unwrap();
        for col in [1, 0, 2, 3, 1, 2] {
            state = state.apply_move(col).unwrap();
        }
        assert_eq!(minimax_search(&state, Depth::Unbounded).unwrap(), 1);
    }

    #[test]
    fn lost_position_keeps_the_first_action() {
        // Every Red move loses; ties resolve to the earliest column.
        let mut state = GameState::with_dimensions(4, 5).unwrap();
        for col in [2, 2, 1, 3, 2, 1, 0, 3] {
            state = state.apply_move(col).unwrap();
        }
        let decision = minimax_decision(&state, Depth::Unbounded).unwrap();
        assert_eq!(decision.action, 0);
        assert_eq!(decision.value, -1.0);
    }

    #[test]
    fn depth_zero_scores_successors_directly() {
        let state = GameState::initial();
        let decision = minimax_decision(&state, 0u32).unwrap();
        // One node per root successor, all undecided.
        assert_eq!(decision.nodes, 7);
        assert_eq!(decision.value, 0.0);
        assert_eq!(decision.action, 0);
    }

    #[test]
    fn single_successor_is_returned() {
        let state = GameState::from_rows(&["RR.B", "BBRR", "RRBB", "BBRR"], Player::Red).unwrap();
        assert_eq!(state.legal_actions(), vec![2]);

        let decision = minimax_decision(&state, Depth::Unbounded).unwrap();
        assert_eq!(decision.action, 2);
        // Filling the last cell draws.
        assert_eq!(decision.value, 0.0);
    }

    #[test]
    fn terminal_root_is_an_error() {
        let state = GameState::from_rows(&["....", "....", "BBB.", "RRRR"], Player::Blue).unwrap();
        assert!(matches!(
            minimax_search(&state, 3u32),
            Err(SearchError::NoLegalActions)
        ));
    }
}
