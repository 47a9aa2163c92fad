//! Mini-game result entry.
//!
//! A result can only be submitted for a team picked from the current roster.
//! Submitting clears the selection whether or not the engine moved anyone.

use super::SessionError;
use crate::core::{GameState, MiniGameOutcome, TeamId};
use crate::rules::GameEngine;

/// Pending mini-game result: which team played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MiniGameSelection {
    selected: Option<TeamId>,
}

impl MiniGameSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> Option<TeamId> {
        self.selected
    }

    /// Select a team. Fails if the team is not on the engine's roster.
    pub fn select(&mut self, engine: &GameEngine, team: TeamId) -> Result<(), SessionError> {
        if engine.state().team(team).is_none() {
            return Err(SessionError::UnknownTeam(team));
        }
        self.selected = Some(team);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Apply `outcome` to the selected team and clear the selection.
    ///
    /// A frozen game accepts the submission but nothing moves.
    pub fn submit<'e>(
        &mut self,
        engine: &'e mut GameEngine,
        outcome: MiniGameOutcome,
    ) -> Result<&'e GameState, SessionError> {
        let team = self.selected.take().ok_or(SessionError::NoTeamSelected)?;
        Ok(engine.resolve_mini_game(team, outcome))
    }
}
