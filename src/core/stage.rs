//! Stages and the board they form.
//!
//! ## StageId
//!
//! Type-safe stage identifier. Ids are 0-based and dense, so an id is also
//! the stage's rank on the board.
//!
//! ## Board
//!
//! The immutable, ordered stage sequence. There is no "final" flag on a
//! stage: finality is structural (`id == len - 1`), and next/previous stage
//! lookups are derived from the sequence length.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::config::ConfigError;

/// Stage identifier (0-based rank on the board).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StageId(pub u8);

impl StageId {
    /// The first stage of every board.
    pub const START: StageId = StageId(0);

    /// Create a new stage ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw stage index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stage {}", self.0)
    }
}

/// One named position on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    /// Display label.
    pub name: String,
    /// Decorative symbol.
    pub icon: String,
}

impl Stage {
    pub fn new(id: StageId, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Ordered, read-only stage sequence.
///
/// Backed by an `Arc<[Stage]>` so every engine and snapshot sharing a board
/// points at the same definition. A `Board` can only be built through
/// [`Board::new`], which enforces the structural invariants:
/// at least two stages, ids `0..N` in order.
///
/// ```
/// use macro_micro::core::{Board, StageId};
///
/// let board = Board::standard();
/// assert_eq!(board.len(), 7);
/// assert_eq!(board.final_stage(), StageId::new(6));
/// assert_eq!(board.advance(StageId::new(6)), StageId::new(6));
/// assert_eq!(board.retreat(StageId::START), StageId::START);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    stages: Arc<[Stage]>,
}

impl Board {
    /// Minimum number of stages on a playable board.
    pub const MIN_STAGES: usize = 2;

    /// Build a board from an ordered stage list.
    pub fn new(stages: Vec<Stage>) -> Result<Self, ConfigError> {
        if stages.len() < Self::MIN_STAGES {
            return Err(ConfigError::TooFewStages(stages.len()));
        }
        if stages.len() > u8::MAX as usize + 1 {
            return Err(ConfigError::TooManyStages(stages.len()));
        }
        for (index, stage) in stages.iter().enumerate() {
            if stage.id.index() != index {
                return Err(ConfigError::StageOutOfOrder {
                    expected: index,
                    found: stage.id,
                });
            }
        }

        Ok(Self {
            stages: stages.into(),
        })
    }

    /// Build a board from `(name, icon)` pairs, assigning ids by position.
    pub fn from_names<N, I>(entries: impl IntoIterator<Item = (N, I)>) -> Result<Self, ConfigError>
    where
        N: Into<String>,
        I: Into<String>,
    {
        let stages = entries
            .into_iter()
            .enumerate()
            .map(|(i, (name, icon))| Stage::new(StageId(i as u8), name, icon))
            .collect();
        Self::new(stages)
    }

    /// The seven-stage board from the largest scale down to the smallest.
    #[must_use]
    pub fn standard() -> Self {
        let stages: Vec<Stage> = [
            ("Universe", "🌌"),
            ("Galaxy Cluster", "✨"),
            ("Milky Way", "🌠"),
            ("Solar System", "☀️"),
            ("Earth", "🌍"),
            ("Atoms", "⚛️"),
            ("Quarks", "🔬"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, icon))| Stage::new(StageId(i as u8), name, icon))
        .collect();

        Self {
            stages: stages.into(),
        }
    }

    /// All stages in board order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Number of stages (always >= 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Look up a stage by id.
    #[must_use]
    pub fn get(&self, id: StageId) -> Option<&Stage> {
        self.stages.get(id.index())
    }

    /// The last stage. Reaching it wins the game.
    #[must_use]
    pub fn final_stage(&self) -> StageId {
        StageId((self.stages.len() - 1) as u8)
    }

    #[must_use]
    pub fn is_final(&self, id: StageId) -> bool {
        id == self.final_stage()
    }

    /// Check whether `id` names a stage on this board.
    #[must_use]
    pub fn contains(&self, id: StageId) -> bool {
        id.index() < self.stages.len()
    }

    /// Next stage, clamped at the final stage.
    #[must_use]
    pub fn advance(&self, from: StageId) -> StageId {
        StageId(from.0.saturating_add(1)).min(self.final_stage())
    }

    /// Previous stage, clamped at the first stage.
    #[must_use]
    pub fn retreat(&self, from: StageId) -> StageId {
        StageId(from.0.saturating_sub(1))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.stages().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let stages = Vec::<Stage>::deserialize(deserializer)?;
        Board::new(stages).map_err(serde::de::Error::custom)
    }
}
