use crate::error::AgentError;
use crate::game::GameState;

/// A player that chooses a column for the side to move.
pub trait Agent {
    /// Select an action (column) for `state.current_player()`.
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
