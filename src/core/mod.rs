//! Core types: stages, teams, configuration, requests, state.
//!
//! These are plain data. All game rules live in `rules`.

pub mod stage;
pub mod team;
pub mod config;
pub mod action;
pub mod state;

pub use stage::{Board, Stage, StageId};
pub use team::{default_team_name, IconPalette, Team, TeamId};
pub use config::{ConfigError, GameConfig};
pub use action::{Direction, MiniGameOutcome, MoveCause, MoveRecord};
pub use state::{GameState, Phase};
