//! The game engine: roster setup, moves, mini-game adjudication, win detection.
//!
//! ## Lifecycle
//!
//! ```text
//! Setup --initialize--> Playing --reset--> Playing
//!   ^                      |
//!   +------ new_game ------+
//! ```
//!
//! ## Tolerance
//!
//! Once playing, every request is total: unknown teams, moves after a
//! winner, and moves past either end of the board degrade to no-ops.
//! Calling a playing-only operation during setup is a caller bug and panics.

use log::{debug, info, trace};
use smallvec::SmallVec;

use crate::core::{
    Board, ConfigError, Direction, GameConfig, GameState, MiniGameOutcome, MoveCause, MoveRecord,
    Phase, Stage, StageId, Team, TeamId,
};

/// Owns one game session.
///
/// Each engine is independent; run several side by side for concurrent
/// sessions. Front-ends driving one engine from several threads should put
/// the whole engine behind a single lock.
///
/// ## Example
///
/// ```
/// use macro_micro::{Direction, GameEngine, StageId, TeamId};
///
/// let mut engine = GameEngine::standard();
/// engine.initialize(2, ["Photons", ""]);
///
/// let state = engine.move_team(TeamId::new(1), Direction::Forward);
/// assert_eq!(state.teams[1].name, "Team 2");
/// assert_eq!(state.teams[1].position, StageId::new(1));
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
}

impl GameEngine {
    /// Create an engine in the `Setup` phase.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: GameState::default(),
        })
    }

    /// Engine on the standard board with default bounds and palette.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            config: GameConfig::default(),
            state: GameState::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.config.board
    }

    /// Ordered stage sequence.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        self.config.board.stages()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Borrow the live state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned snapshot of the current state. O(1).
    #[must_use]
    pub fn current_state(&self) -> GameState {
        self.state.clone()
    }

    /// The winning team, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&Team> {
        self.state.winning_team()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Teams standing on `stage`, in roster order.
    ///
    /// Stages have no capacity; any number of teams may share one.
    #[must_use]
    pub fn teams_at_stage(&self, stage: StageId) -> SmallVec<[&Team; 4]> {
        self.state.teams_at(stage).collect()
    }

    // === Lifecycle ===

    /// Create the roster and enter `Playing`.
    ///
    /// `team_count` is clamped into the configured bounds. Names are taken
    /// in order; missing or blank names fall back to `"Team {n}"` and extra
    /// names are ignored. All teams start on the first stage.
    ///
    /// # Panics
    ///
    /// If called outside `Setup`.
    pub fn initialize<S: AsRef<str>>(
        &mut self,
        team_count: usize,
        names: impl IntoIterator<Item = S>,
    ) -> &GameState {
        assert_eq!(
            self.state.phase,
            Phase::Setup,
            "initialize called while a game is in progress"
        );

        let count = self.config.clamp_team_count(team_count);
        if count != team_count {
            debug!("team count {} clamped to {}", team_count, count);
        }

        let mut names = names.into_iter();
        let palette = &self.config.palette;
        let teams = TeamId::all(count)
            .map(|id| {
                let name = names.next();
                let name: &str = name.as_ref().map_or("", |n| n.as_ref());
                Team::new(id, name, palette)
            })
            .collect();

        self.state = GameState {
            phase: Phase::Playing,
            teams,
            winner: None,
            history: Default::default(),
        };

        info!("game started with {} teams on {} stages", count, self.config.board.len());
        &self.state
    }

    /// Send every team back to the first stage and clear the winner.
    ///
    /// The roster is kept: ids, names, icons, order and count are unchanged.
    ///
    /// # Panics
    ///
    /// If called during `Setup`.
    pub fn reset(&mut self) -> &GameState {
        self.assert_playing("reset");

        for team in self.state.teams.iter_mut() {
            team.position = StageId::START;
        }
        self.state.winner = None;
        self.state.history.clear();

        info!("game reset, {} teams back at start", self.state.team_count());
        &self.state
    }

    /// Drop the roster and return to `Setup`.
    pub fn new_game(&mut self) -> &GameState {
        self.state = GameState::default();
        info!("returned to setup");
        &self.state
    }

    // === Moves ===

    /// Move a team one stage forward or backward.
    ///
    /// Clamped at both ends of the board. No-op for unknown teams and once
    /// a winner exists. A team landing on the final stage wins.
    ///
    /// # Panics
    ///
    /// If called during `Setup`.
    pub fn move_team(&mut self, team: TeamId, direction: Direction) -> &GameState {
        self.assert_playing("move_team");
        self.apply_move(team, direction, MoveCause::Manual);
        &self.state
    }

    /// Apply the result of a mini-game to the selected team.
    ///
    /// `Win` leaves the team in place; `Lose` moves it back one stage with
    /// the same clamping and freeze rules as [`GameEngine::move_team`].
    ///
    /// # Panics
    ///
    /// If called during `Setup`.
    pub fn resolve_mini_game(&mut self, team: TeamId, outcome: MiniGameOutcome) -> &GameState {
        self.assert_playing("resolve_mini_game");

        match outcome.penalty() {
            Some(direction) => self.apply_move(team, direction, MoveCause::MiniGame),
            None => trace!("{} won its mini-game, holding position", team),
        }
        &self.state
    }

    fn apply_move(&mut self, id: TeamId, direction: Direction, cause: MoveCause) {
        if let Some(winner) = self.state.winner {
            trace!("ignoring move for {}: {} already won", id, winner);
            return;
        }

        let board = &self.config.board;
        let Some(team) = self.state.teams.get_mut(id.index()) else {
            trace!("ignoring move for unknown {}", id);
            return;
        };

        let from = team.position;
        let to = match direction {
            Direction::Forward => board.advance(from),
            Direction::Backward => board.retreat(from),
        };
        team.position = to;

        self.state.history.push_back(MoveRecord {
            team: id,
            direction,
            from,
            to,
            cause,
        });
        debug!("{} moved {:?} from {} to {} ({:?})", id, direction, from, to, cause);

        // Only the moved team can have just reached the final stage.
        if board.is_final(to) {
            self.state.winner = Some(id);
            info!("{} reached the final stage and wins", id);
        }
    }

    fn assert_playing(&self, operation: &str) {
        assert_eq!(
            self.state.phase,
            Phase::Playing,
            "{} requires an initialized game",
            operation
        );
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::standard()
    }
}
