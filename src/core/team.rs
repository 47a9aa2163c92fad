//! Team identification and the icon palette teams cycle through.
//!
//! ## TeamId
//!
//! Type-safe team identifier, assigned by creation order (0-based).
//!
//! ## IconPalette
//!
//! Fixed list of distinct symbols. Team `i` always gets palette icon
//! `i mod K` for a palette of size `K`.

use serde::{Deserialize, Serialize};

use super::config::ConfigError;
use super::stage::StageId;

/// Team identifier, unique within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based creation order).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all team IDs for a roster of `team_count` teams.
    ///
    /// ```
    /// use macro_micro::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all(3).collect();
    /// assert_eq!(teams, vec![TeamId::new(0), TeamId::new(1), TeamId::new(2)]);
    /// ```
    pub fn all(team_count: usize) -> impl Iterator<Item = TeamId> {
        (0..team_count as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team #{}", self.0)
    }
}

/// Display name used when a team is left unnamed at setup.
///
/// ```
/// assert_eq!(macro_micro::core::default_team_name(0), "Team 1");
/// ```
#[must_use]
pub fn default_team_name(index: usize) -> String {
    format!("Team {}", index + 1)
}

/// A participant on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Non-empty display name.
    pub name: String,
    /// Palette icon, fixed for the team's lifetime.
    pub icon: String,
    /// Current stage. Always a valid stage on the engine's board.
    pub position: StageId,
}

impl Team {
    /// Create a team at the first stage.
    ///
    /// Blank names (empty or whitespace only) fall back to
    /// [`default_team_name`].
    pub fn new(id: TeamId, name: &str, palette: &IconPalette) -> Self {
        let name = if name.trim().is_empty() {
            default_team_name(id.index())
        } else {
            name.to_string()
        };

        Self {
            id,
            name,
            icon: palette.icon_for(id).to_string(),
            position: StageId::START,
        }
    }
}

/// Icons assigned to teams in creation order, wrapping around.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IconPalette {
    icons: Vec<String>,
}

impl IconPalette {
    /// Create a palette. Must contain at least one icon.
    pub fn new<I: Into<String>>(icons: impl IntoIterator<Item = I>) -> Result<Self, ConfigError> {
        let icons: Vec<String> = icons.into_iter().map(Into::into).collect();
        if icons.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { icons })
    }

    /// Number of icons before the palette wraps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Always false; a palette holds at least one icon.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Icon for a team: `icons[id mod len]`.
    #[must_use]
    pub fn icon_for(&self, team: TeamId) -> &str {
        &self.icons[team.index() % self.icons.len()]
    }

    /// All icons in assignment order.
    #[must_use]
    pub fn icons(&self) -> &[String] {
        &self.icons
    }
}

impl Default for IconPalette {
    fn default() -> Self {
        Self {
            icons: ["🌌", "⚛️", "🪐", "🔬", "🌟", "💫", "🚀", "🛸", "☄️", "🌙"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for IconPalette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let icons = Vec::<String>::deserialize(deserializer)?;
        IconPalette::new(icons).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_basics() {
        let t0 = TeamId::new(0);
        let t4 = TeamId::new(4);

        assert_eq!(t0.index(), 0);
        assert_eq!(t4.index(), 4);
        assert_eq!(format!("{}", t4), "Team #4");
    }

    #[test]
    fn test_default_names() {
        assert_eq!(default_team_name(0), "Team 1");
        assert_eq!(default_team_name(9), "Team 10");
    }

    #[test]
    fn test_blank_name_falls_back() {
        let palette = IconPalette::default();

        assert_eq!(Team::new(TeamId::new(2), "", &palette).name, "Team 3");
        assert_eq!(Team::new(TeamId::new(0), "   ", &palette).name, "Team 1");
        assert_eq!(Team::new(TeamId::new(1), "Photons", &palette).name, "Photons");
    }

    #[test]
    fn test_new_team_starts_at_first_stage() {
        let team = Team::new(TeamId::new(3), "Leptons", &IconPalette::default());
        assert_eq!(team.position, StageId::START);
    }

    #[test]
    fn test_palette_wraps() {
        let palette = IconPalette::new(["a", "b", "c"]).unwrap();

        assert_eq!(palette.icon_for(TeamId::new(0)), "a");
        assert_eq!(palette.icon_for(TeamId::new(2)), "c");
        assert_eq!(palette.icon_for(TeamId::new(3)), "a");
        assert_eq!(palette.icon_for(TeamId::new(7)), "b");
    }

    #[test]
    fn test_default_palette_is_distinct() {
        let palette = IconPalette::default();
        let mut icons = palette.icons().to_vec();
        icons.sort();
        icons.dedup();

        assert_eq!(palette.len(), 10);
        assert_eq!(icons.len(), 10);
    }

    #[test]
    fn test_empty_palette_rejected() {
        let err = IconPalette::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPalette));
    }

    #[test]
    fn test_team_serialization() {
        let team = Team::new(TeamId::new(1), "Gluons", &IconPalette::default());
        let json = serde_json::to_string(&team).unwrap();
        let deserialized: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(team, deserialized);
    }
}
