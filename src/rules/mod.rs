//! Game rules.
//!
//! `GameEngine` owns a session's roster and positions and is the only code
//! that changes them:
//! - Clamped forward/backward moves
//! - Mini-game results mapped onto moves
//! - Win detection and the freeze that follows

pub mod engine;

pub use engine::GameEngine;
