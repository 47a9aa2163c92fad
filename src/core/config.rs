//! Game configuration.
//!
//! A game is configured once, before setup, by providing:
//! - `Board`: the ordered stage sequence
//! - `IconPalette`: icons teams cycle through
//! - Team-count bounds accepted at setup
//!
//! Everything is plain serde data, so a configuration can also be loaded
//! from JSON with [`GameConfig::from_json_str`].

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::stage::{Board, StageId};
use super::team::IconPalette;

/// Invalid game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board needs at least 2 stages, got {0}")]
    TooFewStages(usize),

    #[error("board supports at most 256 stages, got {0}")]
    TooManyStages(usize),

    #[error("stage at position {expected} has id {found}; ids must be dense and ordered")]
    StageOutOfOrder { expected: usize, found: StageId },

    #[error("icon palette must contain at least one icon")]
    EmptyPalette,

    #[error("invalid team bounds {min}..={max}: need 2 <= min <= max <= 255")]
    InvalidTeamBounds { min: usize, max: usize },

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete game configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Stage sequence teams race across.
    pub board: Board,

    /// Icons assigned to teams by creation index.
    pub palette: IconPalette,

    /// Fewest teams a game can start with (default: 2).
    pub min_teams: usize,

    /// Most teams a game can start with (default: 10).
    /// Keeps the board readable rather than reflecting a rule limit.
    pub max_teams: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: Board::standard(),
            palette: IconPalette::default(),
            min_teams: 2,
            max_teams: 10,
        }
    }
}

impl GameConfig {
    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Use a custom board.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Use a custom icon palette.
    #[must_use]
    pub fn with_palette(mut self, palette: IconPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set team-count bounds.
    #[must_use]
    pub fn with_team_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_teams = min;
        self.max_teams = max;
        self
    }

    /// Accepted team counts.
    #[must_use]
    pub fn team_bounds(&self) -> RangeInclusive<usize> {
        self.min_teams..=self.max_teams
    }

    /// Clamp a requested team count into the accepted bounds.
    #[must_use]
    pub fn clamp_team_count(&self, count: usize) -> usize {
        count.clamp(self.min_teams, self.max_teams)
    }

    /// Check team bounds. Board and palette are validated on construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_teams < 2 || self.min_teams > self.max_teams || self.max_teams > u8::MAX as usize {
            return Err(ConfigError::InvalidTeamBounds {
                min: self.min_teams,
                max: self.max_teams,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.board.len(), 7);
        assert_eq!(config.palette.len(), 10);
        assert_eq!(config.team_bounds(), 2..=10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_clamp_team_count() {
        let config = GameConfig::default();

        assert_eq!(config.clamp_team_count(0), 2);
        assert_eq!(config.clamp_team_count(1), 2);
        assert_eq!(config.clamp_team_count(5), 5);
        assert_eq!(config.clamp_team_count(11), 10);
    }

    #[test]
    fn test_builder_pattern() {
        let board = Board::from_names([("Start", "S"), ("Middle", "M"), ("End", "E")]).unwrap();
        let config = GameConfig::default()
            .with_board(board)
            .with_palette(IconPalette::new(["x", "y"]).unwrap())
            .with_team_bounds(3, 4);

        assert_eq!(config.board.len(), 3);
        assert_eq!(config.palette.len(), 2);
        assert_eq!(config.clamp_team_count(2), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_bounds() {
        let low = GameConfig::default().with_team_bounds(1, 10);
        let inverted = GameConfig::default().with_team_bounds(6, 4);

        assert!(matches!(low.validate(), Err(ConfigError::InvalidTeamBounds { min: 1, max: 10 })));
        assert!(matches!(inverted.validate(), Err(ConfigError::InvalidTeamBounds { .. })));
    }

    #[test]
    fn test_from_json_defaults() {
        let config = GameConfig::from_json_str("{}").unwrap();
        assert_eq!(config.board, Board::standard());
        assert_eq!(config.max_teams, 10);
    }

    #[test]
    fn test_from_json_custom_board() {
        let json = r#"{
            "board": [
                {"id": 0, "name": "Home", "icon": "H"},
                {"id": 1, "name": "Away", "icon": "A"}
            ],
            "max_teams": 4
        }"#;
        let config = GameConfig::from_json_str(json).unwrap();

        assert_eq!(config.board.len(), 2);
        assert_eq!(config.board.stages()[1].name, "Away");
        assert_eq!(config.team_bounds(), 2..=4);
    }

    #[test]
    fn test_from_json_rejects_bad_board() {
        let json = r#"{"board": [{"id": 0, "name": "Only", "icon": "O"}]}"#;
        assert!(matches!(GameConfig::from_json_str(json), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_json_rejects_bad_bounds() {
        let json = r#"{"min_teams": 5, "max_teams": 3}"#;
        assert!(matches!(
            GameConfig::from_json_str(json),
            Err(ConfigError::InvalidTeamBounds { min: 5, max: 3 })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.board, deserialized.board);
        assert_eq!(config.palette, deserialized.palette);
    }
}
