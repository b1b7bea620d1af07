mod agent;
mod heuristic;
mod random;
mod searcher;

pub use agent::Agent;
pub use heuristic::PositionalHeuristic;
pub use random::RandomAgent;
pub use searcher::{AlphaBetaAgent, MinimaxAgent};
