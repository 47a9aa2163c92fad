//! Requests the engine accepts and the record it keeps of applied moves.
//!
//! Directions and mini-game outcomes are closed enums, so a request can
//! never carry an invalid value.

use serde::{Deserialize, Serialize};

use super::stage::StageId;
use super::team::TeamId;

/// Which way a team moves along the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// One stage toward the final stage.
    Forward,
    /// One stage toward the first stage.
    Backward,
}

/// Result of a mini-game played outside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MiniGameOutcome {
    /// The team holds its position.
    Win,
    /// The team falls back one stage.
    Lose,
}

impl MiniGameOutcome {
    /// The move this outcome translates to, if any.
    ///
    /// ```
    /// use macro_micro::core::{Direction, MiniGameOutcome};
    ///
    /// assert_eq!(MiniGameOutcome::Win.penalty(), None);
    /// assert_eq!(MiniGameOutcome::Lose.penalty(), Some(Direction::Backward));
    /// ```
    #[must_use]
    pub const fn penalty(self) -> Option<Direction> {
        match self {
            MiniGameOutcome::Win => None,
            MiniGameOutcome::Lose => Some(Direction::Backward),
        }
    }
}

/// What triggered a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCause {
    /// Direct forward/backward request.
    Manual,
    /// Penalty from a lost mini-game.
    MiniGame,
}

/// A move the engine accepted.
///
/// Boundary moves are still accepted and recorded with `from == to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub team: TeamId,
    pub direction: Direction,
    pub from: StageId,
    pub to: StageId,
    pub cause: MoveCause,
}

impl MoveRecord {
    /// Whether the move was absorbed by a board boundary.
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        self.from == self.to
    }
}
