use super::agent::Agent;
use super::heuristic::PositionalHeuristic;
use crate::error::AgentError;
use crate::game::GameState;
use crate::search::{alpha_beta_search, minimax_search, Depth, Heuristic};

/// Plays the move chosen by plain minimax.
pub struct MinimaxAgent {
    depth: Depth,
}

impl MinimaxAgent {
    pub fn new(depth: impl Into<Depth>) -> Self {
        MinimaxAgent {
            depth: depth.into(),
        }
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        Ok(minimax_search(state, self.depth)?)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Plays the move chosen by depth-limited alpha-beta search.
pub struct AlphaBetaAgent {
    depth: u32,
    heuristic: Box<dyn Heuristic<GameState>>,
}

impl AlphaBetaAgent {
    pub fn new(depth: u32) -> Self {
        AlphaBetaAgent {
            depth,
            heuristic: Box::new(PositionalHeuristic),
        }
    }

    pub fn with_heuristic(depth: u32, heuristic: Box<dyn Heuristic<GameState>>) -> Self {
        AlphaBetaAgent { depth, heuristic }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Agent for AlphaBetaAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        Ok(alpha_beta_search(state, self.depth, self.heuristic.as_ref())?)
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }
}
