//! Adversarial game-tree search.
//!
//! Two engines share one root procedure: enumerate the root's successors,
//! score each one with the engine's minimizing evaluator, and keep the first
//! action whose score strictly improves on the best seen so far.
//!
//! - [`minimax`] scores with true utility, optionally cut off by depth.
//! - [`alphabeta`] is always depth-limited, scores cutoffs with a
//!   [`Heuristic`] and prunes with an `(alpha, beta)` window.
//!
//! Both engines evaluate every node from the perspective of the player to
//! move at the root, which is carried explicitly through the recursion.

pub mod alphabeta;
mod contract;
pub mod minimax;

use std::fmt;

pub use alphabeta::{alpha_beta_decision, alpha_beta_search};
pub use contract::{Game, Heuristic};
pub use minimax::{minimax_decision, minimax_search};

use crate::error::SearchError;

/// Remaining search depth, in plies below the root's successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    Limited(u32),
    /// Search to true terminal states only.
    #[default]
    Unbounded,
}

impl Depth {
    pub fn is_exhausted(self) -> bool {
        matches!(self, Depth::Limited(0))
    }

    /// Depth available one ply further down.
    pub fn decrement(self) -> Depth {
        match self {
            Depth::Limited(n) => Depth::Limited(n.saturating_sub(1)),
            Depth::Unbounded => Depth::Unbounded,
        }
    }
}

impl From<u32> for Depth {
    fn from(depth: u32) -> Self {
        Depth::Limited(depth)
    }
}

impl From<Option<u32>> for Depth {
    fn from(depth: Option<u32>) -> Self {
        depth.map_or(Depth::Unbounded, Depth::Limited)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depth::Limited(n) => write!(f, "{n}"),
            Depth::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// The outcome of one root search.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    /// Action leading to the best-scoring successor.
    pub action: A,
    /// Backed-up value of that successor for the root player.
    pub value: f64,
    /// Number of max/min evaluator calls made.
    pub nodes: u64,
}

/// Cutoff test shared by both engines: depth exhausted or game over.
fn cutoff<G: Game>(state: &G, depth: Depth) -> bool {
    debug_assert!(
        !state.is_terminal() || state.winner().is_some() || state.possible_actions().is_empty(),
        "terminal state has no winner but still has legal actions"
    );
    depth.is_exhausted() || state.is_terminal()
}

/// Pick the root action whose successor scores strictly highest. Ties keep
/// the earliest-enumerated action.
fn select_root_action<G, F>(
    state: &G,
    mut score: F,
) -> Result<(G::Action, f64), SearchError<G::Error>>
where
    G: Game,
    F: FnMut(&G) -> Result<f64, G::Error>,
{
    let successors = state.successors().map_err(SearchError::Adapter)?;
    let (first_action, _) = successors.first().ok_or(SearchError::NoLegalActions)?;

    let mut best_action = *first_action;
    let mut best_score = f64::NEG_INFINITY;
    for (action, next) in &successors {
        let value = score(next).map_err(SearchError::Adapter)?;
        if value > best_score {
            best_score = value;
            best_action = *action;
        }
    }

    Ok((best_action, best_score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_depth_counts_down_to_exhaustion() {
        let depth = Depth::Limited(2);
        assert!(!depth.is_exhausted());
        assert!(!depth.decrement().is_exhausted());
        assert!(depth.decrement().decrement().is_exhausted());
        assert_eq!(Depth::Limited(0).decrement(), Depth::Limited(0));
    }

    #[test]
    fn unbounded_depth_never_exhausts() {
        let depth = Depth::Unbounded;
        assert!(!depth.is_exhausted());
        assert_eq!(depth.decrement(), Depth::Unbounded);
        assert_eq!(Depth::default(), Depth::Unbounded);
    }

    #[test]
    fn depth_conversions() {
        assert_eq!(Depth::from(3u32), Depth::Limited(3));
        assert_eq!(Depth::from(None), Depth::Unbounded);
        assert_eq!(Depth::from(Some(5u32)), Depth::Limited(5));
        assert_eq!(Depth::Limited(4).to_string(), "4");
        assert_eq!(Depth::Unbounded.to_string(), "unbounded");
    }
}
