use std::fmt;

use serde::{Deserialize, Serialize};

use super::team::normalize_team;

/// One extracted roster entry.
///
/// Serializes with the `Team`, `Position`, `Player` field names used by the
/// CSV reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Team name exactly as found in the grid.
    #[serde(rename = "Team")]
    pub team: String,

    /// Position label; `None` when the cell was blank.
    #[serde(rename = "Position")]
    pub position: Option<String>,

    /// Cleaned player display name, never empty.
    #[serde(rename = "Player")]
    pub player: String,
}

impl Record {
    /// Creates a record. An empty position is stored as `None`.
    #[must_use]
    pub fn new(
        team: impl Into<String>,
        position: impl Into<String>,
        player: impl Into<String>,
    ) -> Self {
        let position = position.into();
        Self {
            team: team.into(),
            position: (!position.is_empty()).then_some(position),
            player: player.into(),
        }
    }

    /// Position text, `""` when absent.
    #[must_use]
    pub fn position_str(&self) -> &str {
        self.position.as_deref().unwrap_or("")
    }

    /// Normalized team name used for equality and grouping.
    #[must_use]
    pub fn team_key(&self) -> String {
        normalize_team(&self.team)
    }

    /// Returns `true` if this record belongs to `team` (normalized comparison).
    #[must_use]
    pub fn is_team(&self, team: &str) -> bool {
        self.team_key() == normalize_team(team)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(ref pos) => write!(f, "{}, {} ({pos})", self.team, self.player),
            None => write!(f, "{}, {}", self.team, self.player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_position_is_none() {
        let r = Record::new("Team A", "", "Marcus Jones");
        assert_eq!(r.position, None);
        assert_eq!(r.position_str(), "");

        let r = Record::new("Team A", "WR", "Marcus Jones");
        assert_eq!(r.position.as_deref(), Some("WR"));
    }

    #[test]
    fn team_matching_ignores_case_and_spacing() {
        let r = Record::new("Keenan and  Kelce", "TE", "Jack Bech");
        assert!(r.is_team("keenan AND kelce"));
        assert!(!r.is_team("JP BREAKS"));
    }

    #[test]
    fn display_includes_position_when_present() {
        assert_eq!(
            Record::new("JP BREAKS", "QB", "JJ McCarthy").to_string(),
            "JP BREAKS, JJ McCarthy (QB)"
        );
        assert_eq!(Record::new("JP BREAKS", "", "JJ McCarthy").to_string(), "JP BREAKS, JJ McCarthy");
    }

    #[test]
    fn serializes_with_report_field_names() {
        let r = Record::new("JP BREAKS", "WR", "Jermaine Burton");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"Team":"JP BREAKS","Position":"WR","Player":"Jermaine Burton"}"#
        );
    }
}
