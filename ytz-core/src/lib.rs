//! ytz-core: Yahtzee turn rules, scoring, state representations and move generation.
//!
//! Callers own dice randomness and move selection: hold a state, ask [`legal_moves`] for the
//! options, pick one, feed it to [`apply_move`], set the freshly rolled dice on the returned
//! state, repeat until [`is_terminal`].

pub mod action;
pub mod category;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod legal;
pub mod scoring;
pub mod state;
pub mod state_key;

pub use action::{KeepList, Move, NUM_MOVE_INDICES};
pub use category::{Category, NUM_CATS};
pub use config::{ConfigError, RulesConfig};
pub use dice::Dice;
pub use engine::{apply_move, apply_move_index, apply_move_with, MoveOutcome};
pub use error::CoreError;
pub use legal::{joker_active, legal_moves, reroll_moves, score_moves};
pub use scoring::{score, scores_for_dice};
pub use state::{is_terminal, CompactState, FullState, TurnState, MAX_REROLLS};
pub use state_key::{state_key, StateKey};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod state_tests;
