//! # macro-micro
//!
//! Game-state engine for a turn-based, multi-team stage race.
//!
//! Teams advance or retreat one stage at a time along a fixed linear board.
//! The first team to reach the final stage wins and the board freezes until
//! reset. Mini-game results feed in from outside: a loss costs a stage, a win
//! holds position.
//!
//! ## Design Principles
//!
//! 1. **Total Operations**: Once a game is playing, no request fails.
//!    Unknown teams, boundary overshoot, and moves after a win are no-ops.
//!
//! 2. **Caller-Owned State**: Each `GameEngine` is one session. No globals.
//!
//! 3. **Cheap Snapshots**: State uses `im` persistent vectors, so handing a
//!    snapshot to a renderer after every move is O(1).
//!
//! ## Modules
//!
//! - `core`: Stages, board, teams, configuration, requests, state
//! - `rules`: The `GameEngine`
//! - `session`: Setup form and mini-game selection for front-ends

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Stage, StageId,
    Team, TeamId, IconPalette,
    GameConfig, ConfigError,
    Direction, MiniGameOutcome, MoveCause, MoveRecord,
    GameState, Phase,
};

pub use crate::rules::GameEngine;

pub use crate::session::{MiniGameSelection, SessionError, SetupForm};
