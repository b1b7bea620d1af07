use log::info;
use serde::{Deserialize, Serialize};

use crate::ai::Agent;
use crate::error::PlayError;
use crate::game::{GameOutcome, GameState, Player};

/// One move of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub column: usize,
}

/// Result of playing a match between two agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub red: String,
    pub blue: String,
    pub moves: Vec<MoveRecord>,
    /// `None` for a draw.
    pub winner: Option<Player>,
    /// Final board, top row first.
    pub final_rows: Vec<String>,
}

impl MatchRecord {
    /// Human-readable result line.
    pub fn summary(&self) -> String {
        match self.winner {
            Some(Player::Red) => format!("{} (Red) wins in {} moves", self.red, self.moves.len()),
            Some(Player::Blue) => format!("{} (Blue) wins in {} moves", self.blue, self.moves.len()),
            None => format!("Draw after {} moves", self.moves.len()),
        }
    }
}

/// Play `red` against `blue` from `start` until the game ends.
pub fn play_match(
    red: &mut dyn Agent,
    blue: &mut dyn Agent,
    start: GameState,
) -> Result<MatchRecord, PlayError> {
    play_match_observed(red, blue, start, |_| {})
}

/// Like [`play_match`], calling `observe` with every position reached,
/// starting with `start`.
pub fn play_match_observed<F>(
    red: &mut dyn Agent,
    blue: &mut dyn Agent,
    start: GameState,
    mut observe: F,
) -> Result<MatchRecord, PlayError>
where
    F: FnMut(&GameState),
{
    let mut state = start;
    let mut moves = Vec::new();
    observe(&state);

    while !state.is_terminal() {
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Blue => &mut *blue,
        };

        let column = agent.select_action(&state)?;
        state = state
            .apply_move(column)
            .map_err(|_| PlayError::IllegalAction {
                agent: agent.name().to_string(),
                action: column,
                legal: state.legal_actions(),
            })?;
        moves.push(MoveRecord { player, column });
        observe(&state);
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(player)) => Some(player),
        _ => None,
    };
    let record = MatchRecord {
        red: red.name().to_string(),
        blue: blue.name().to_string(),
        moves,
        winner,
        final_rows: state.board().to_rows(),
    };
    info!("{}", record.summary());
    Ok(record)
}
