//! Depth-limited minimax with alpha-beta pruning.
//!
//! `alpha` is the score the maximizer is already guaranteed along the path
//! to a node, `beta` the score the minimizer is already guaranteed. A node
//! whose value falls outside `[alpha, beta]` cannot change its parent's
//! choice, so its remaining successors are skipped.

use log::debug;

use super::{cutoff, select_root_action, Decision, Depth, Game, Heuristic};
use crate::error::SearchError;

struct AlphaBeta<'h, G: Game, H: ?Sized> {
    player: G::Player,
    heuristic: &'h H,
    nodes: u64,
}

impl<G, H> AlphaBeta<'_, G, H>
where
    G: Game,
    H: Heuristic<G> + ?Sized,
{
    fn max_value(
        &mut self,
        state: &G,
        depth: Depth,
        mut alpha: f64,
        beta: f64,
    ) -> Result<f64, G::Error> {
        self.nodes += 1;
        if cutoff(state, depth) {
            return Ok(self.heuristic.evaluate(state, self.player));
        }

        let mut value = f64::NEG_INFINITY;
        for (_, next) in state.successors()? {
            value = value.max(self.min_value(&next, depth.decrement(), alpha, beta)?);
            if value >= beta {
                return Ok(value);
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    }

    fn min_value(
        &mut self,
        state: &G,
        depth: Depth,
        alpha: f64,
        mut beta: f64,
    ) -> Result<f64, G::Error> {
        self.nodes += 1;
        if cutoff(state, depth) {
            return Ok(self.heuristic.evaluate(state, self.player));
        }

        let mut value = f64::INFINITY;
        for (_, next) in state.successors()? {
            value = value.min(self.max_value(&next, depth.decrement(), alpha, beta)?);
            if value <= alpha {
                return Ok(value);
            }
            beta = beta.min(value);
        }
        Ok(value)
    }
}

/// Best action for the player to move, searching `max_depth` plies below the
/// root's successors and scoring cutoffs with `heuristic`.
pub fn alpha_beta_search<G, H>(
    state: &G,
    max_depth: u32,
    heuristic: &H,
) -> Result<G::Action, SearchError<G::Error>>
where
    G: Game,
    H: Heuristic<G> + ?Sized,
{
    alpha_beta_decision(state, max_depth, heuristic).map(|decision| decision.action)
}

/// Like [`alpha_beta_search`], also reporting the root value and node count.
pub fn alpha_beta_decision<G, H>(
    state: &G,
    max_depth: u32,
    heuristic: &H,
) -> Result<Decision<G::Action>, SearchError<G::Error>>
where
    G: Game,
    H: Heuristic<G> + ?Sized,
{
    let depth = Depth::Limited(max_depth);
    let mut engine = AlphaBeta::<G, H> {
        player: state.current_player(),
        heuristic,
        nodes: 0,
    };

    // Each root successor gets a fresh full window, so its score is exact.
    let (action, value) = select_root_action(state, |next| {
        engine.min_value(next, depth, f64::NEG_INFINITY, f64::INFINITY)
    })?;

    debug!(
        "alpha-beta depth {depth}: chose {action:?} (value {value}, {} nodes)",
        engine.nodes
    );
    Ok(Decision {
        action,
        value,
        nodes: engine.nodes,
    })
}
