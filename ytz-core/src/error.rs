//! Validation errors shared by dice, states, moves and the engine.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A die face outside 1..=6 was supplied as a value.
    #[error("invalid die value {value} (expected 1..=6)")]
    InvalidValue { value: u8 },
    /// A query or setter argument fell outside its allowed range.
    #[error("{what} out of range: {value} (max {max})")]
    OutOfRange {
        what: &'static str,
        value: u32,
        max: u32,
    },
    /// A raw move index that decodes to no move.
    #[error("invalid move index {index}")]
    InvalidMove { index: u16 },
}
