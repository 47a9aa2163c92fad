//! Caller-side helpers that sit between a front-end and the engine.
//!
//! - `SetupForm`: team count and names before a game starts
//! - `MiniGameSelection`: mandatory team pick before a mini-game result
//!
//! Unlike the engine, these reject bad input with `SessionError` so a
//! front-end can show the problem to the user.

pub mod setup;
pub mod selection;

use thiserror::Error;

use crate::core::TeamId;

pub use setup::SetupForm;
pub use selection::MiniGameSelection;

/// Rejected user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no team selected for the mini-game result")]
    NoTeamSelected,

    #[error("{0} is not on the roster")]
    UnknownTeam(TeamId),

    #[error("team count must be a number, got {0:?}")]
    InvalidTeamCount(String),

    #[error("no name slot {index}; the form has {count} teams")]
    NameSlotOutOfRange { index: usize, count: usize },
}
