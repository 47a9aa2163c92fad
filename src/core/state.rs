//! Game state snapshot.
//!
//! ## Phase
//!
//! `Setup` until a roster is initialized, then `Playing`.
//!
//! ## GameState
//!
//! Everything the presentation layer renders from:
//! - Phase
//! - Teams with positions, in roster order
//! - Winner, if any
//! - Applied move history
//!
//! Uses `im` persistent vectors so taking a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::stage::StageId;
use super::team::{Team, TeamId};

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Collecting team count and names. No roster exists.
    #[default]
    Setup,
    /// Teams are on the board.
    Playing,
}

/// Snapshot of one game session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,

    /// Roster in creation order. `teams[i].id == TeamId(i)`.
    pub teams: Vector<Team>,

    /// Set at most once per playing session, only when that team sits on
    /// the final stage.
    pub winner: Option<TeamId>,

    /// Moves accepted since the last initialize or reset.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Number of teams on the roster.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Look up a team.
    #[must_use]
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.index())
    }

    /// Current position of a team.
    #[must_use]
    pub fn position(&self, id: TeamId) -> Option<StageId> {
        self.team(id).map(|team| team.position)
    }

    /// The winning team, if the game is over.
    #[must_use]
    pub fn winning_team(&self) -> Option<&Team> {
        self.winner.and_then(|id| self.team(id))
    }

    /// Check if the game is frozen by a winner.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Iterate over teams at a stage, in roster order.
    pub fn teams_at(&self, stage: StageId) -> impl Iterator<Item = &Team> {
        self.teams.iter().filter(move |team| team.position == stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::team::IconPalette;

    fn state_with(positions: &[u8]) -> GameState {
        let palette = IconPalette::default();
        let teams = positions
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let mut team = Team::new(TeamId::new(i as u8), "", &palette);
                team.position = StageId::new(p);
                team
            })
            .collect();

        GameState {
            phase: Phase::Playing,
            teams,
            winner: None,
            history: Vector::new(),
        }
    }

    #[test]
    fn test_default_is_setup() {
        let state = GameState::default();

        assert_eq!(state.phase, Phase::Setup);
        assert_eq!(state.team_count(), 0);
        assert!(!state.is_over());
    }

    #[test]
    fn test_team_lookup() {
        let state = state_with(&[0, 3]);

        assert_eq!(state.position(TeamId::new(1)), Some(StageId::new(3)));
        assert_eq!(state.team(TeamId::new(1)).unwrap().name, "Team 2");
        assert!(state.team(TeamId::new(2)).is_none());
    }

    #[test]
    fn test_teams_at_preserves_roster_order() {
        let state = state_with(&[2, 0, 2, 2]);
        let ids: Vec<_> = state.teams_at(StageId::new(2)).map(|t| t.id).collect();

        assert_eq!(ids, vec![TeamId::new(0), TeamId::new(2), TeamId::new(3)]);
        assert_eq!(state.teams_at(StageId::new(5)).count(), 0);
    }

    #[test]
    fn test_winning_team() {
        let mut state = state_with(&[6, 1]);
        assert!(state.winning_team().is_none());

        state.winner = Some(TeamId::new(0));
        assert!(state.is_over());
        assert_eq!(state.winning_team().unwrap().id, TeamId::new(0));
    }

    #[test]
    fn test_snapshot_serialization() {
        let state = state_with(&[1, 4, 0]);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
