//! Setup form: team count and names collected before a game starts.

use std::num::IntErrorKind;

use log::debug;

use super::SessionError;
use crate::core::{default_team_name, ConfigError, GameConfig, GameState};
use crate::rules::GameEngine;

/// Editable setup input.
///
/// The name list always has exactly `team_count` entries. Growing the count
/// keeps names already typed and fills new slots with defaults; shrinking
/// drops trailing names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupForm {
    min_teams: usize,
    max_teams: usize,
    names: Vec<String>,
}

impl SetupForm {
    /// Form at the minimum team count with default names.
    ///
    /// Fails if the config's team bounds are invalid.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut form = Self {
            min_teams: config.min_teams,
            max_teams: config.max_teams,
            names: Vec::new(),
        };
        form.set_team_count(config.min_teams);
        Ok(form)
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Change the team count, clamped to the configured bounds.
    ///
    /// Returns the count actually applied.
    pub fn set_team_count(&mut self, count: usize) -> usize {
        let count = count.clamp(self.min_teams, self.max_teams);
        let filled = self.names.len();
        self.names.truncate(count);
        self.names.extend((filled..count).map(default_team_name));
        count
    }

    /// Parse free-form count input. Empty input resets to the minimum.
    ///
    /// Any integer is accepted and clamped to the bounds, including negative
    /// and overflowing values. Only non-numeric input is rejected.
    pub fn parse_team_count(&mut self, input: &str) -> Result<usize, SessionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(self.set_team_count(self.min_teams));
        }

        let count = match trimmed.parse::<i64>() {
            Ok(n) if n <= 0 => self.min_teams,
            Ok(n) => usize::try_from(n).unwrap_or(self.max_teams),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => self.max_teams,
                IntErrorKind::NegOverflow => self.min_teams,
                _ => return Err(SessionError::InvalidTeamCount(input.to_string())),
            },
        };
        Ok(self.set_team_count(count))
    }

    /// Edit one team's name. Blank names are kept as typed and replaced
    /// with the default when the game starts.
    pub fn set_team_name(&mut self, index: usize, name: impl Into<String>) -> Result<(), SessionError> {
        let count = self.names.len();
        let slot = self
            .names
            .get_mut(index)
            .ok_or(SessionError::NameSlotOutOfRange { index, count })?;
        *slot = name.into();
        Ok(())
    }

    /// Start a game on `engine` from this form.
    ///
    /// # Panics
    ///
    /// If the engine is not in setup.
    pub fn start<'e>(&self, engine: &'e mut GameEngine) -> &'e GameState {
        debug!("starting game from setup form with {} teams", self.names.len());
        engine.initialize(self.names.len(), &self.names)
    }
}
