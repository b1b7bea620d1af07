//! # Connect Four Search
//!
//! Adversarial game-tree search for Connect Four: unbounded minimax compared
//! against depth-limited minimax with alpha-beta pruning and a static
//! evaluation function.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, immutable game state
//! - [`search`] — `Game`/`Heuristic` contracts, minimax and alpha-beta engines
//! - [`ai`] — Agents wrapping the engines, center-weighted heuristic
//! - [`play`] — Match driver between two agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod play;
pub mod search;
