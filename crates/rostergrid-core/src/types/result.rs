use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::Record;
use super::team::{TeamCount, count_by_team, normalize_team};
use crate::extract::records_for_team;

/// The ordered records extracted from one grid.
///
/// Records keep the grid's reading order (row-major, then ascending group
/// base). Consumers that deduplicate rely on first-seen-wins, so nothing in
/// this type ever reorders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted records in reading order.
    pub records: Vec<Record>,
}

impl ExtractionResult {
    /// Wraps an already ordered record list.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Total number of records.
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in extraction order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Per-team record counts in first-seen order.
    #[must_use]
    pub fn count_by_team(&self) -> Vec<TeamCount> {
        count_by_team(&self.records)
    }

    /// Player names in extraction order.
    #[must_use]
    pub fn players(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.player.as_str()).collect()
    }

    /// Player names for one team, compared by normalized team name.
    #[must_use]
    pub fn players_for_team(&self, team: &str) -> Vec<&str> {
        records_for_team(&self.records, team)
    }

    /// Consumes the result, returning the record list.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ExtractionResult {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Aggregates produced by a successful validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Per-team counts in first-seen order.
    pub count_by_team: Vec<TeamCount>,
    /// Grand total of records.
    pub total: usize,
}

impl ValidationSummary {
    /// Count for one team (normalized comparison); zero if absent.
    #[must_use]
    pub fn count_for(&self, team: &str) -> usize {
        let target = normalize_team(team);
        self.count_by_team
            .iter()
            .find(|tc| normalize_team(&tc.team) == target)
            .map_or(0, |tc| tc.count)
    }
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} players across {} teams", self.total, self.count_by_team.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionResult {
        ExtractionResult::new(vec![
            Record::new("JP BREAKS", "QB", "JJ McCarthy"),
            Record::new("Keenan and Kelce", "RB", "Cam Skattebo"),
            Record::new("JP BREAKS", "WR", "Jermaine Burton"),
        ])
    }

    #[test]
    fn players_keep_extraction_order() {
        let result = sample();
        assert_eq!(
            result.players(),
            vec!["JJ McCarthy", "Cam Skattebo", "Jermaine Burton"]
        );
        assert_eq!(result.total(), 3);
        assert!(!result.is_empty());
    }

    #[test]
    fn players_for_team_is_case_insensitive() {
        let result = sample();
        assert_eq!(
            result.players_for_team("jp breaks"),
            vec!["JJ McCarthy", "Jermaine Burton"]
        );
        assert!(result.players_for_team("Nobody").is_empty());
    }

    #[test]
    fn summary_lookup() {
        let summary = ValidationSummary {
            count_by_team: sample().count_by_team(),
            total: 3,
        };
        assert_eq!(summary.count_for("JP Breaks"), 2);
        assert_eq!(summary.count_for("missing"), 0);
        assert_eq!(summary.to_string(), "3 players across 2 teams");
    }

    #[test]
    fn result_serialization_roundtrip() {
        let result = sample();
        let json = serde_json::to_string(&result).unwrap();
        let back: ExtractionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
