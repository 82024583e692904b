use serde::{Deserialize, Serialize};

use super::record::Record;

/// Normalizes a team name for comparisons: case-folded, trimmed, with
/// internal whitespace collapsed to single spaces.
#[must_use]
pub fn normalize_team(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of records attributed to one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCount {
    /// Team name as first seen in extraction order.
    pub team: String,
    /// Number of records for the team.
    pub count: usize,
}

/// Counts records per team, grouping by normalized name.
///
/// Teams appear in order of first occurrence so the output is deterministic.
#[must_use]
pub fn count_by_team(records: &[Record]) -> Vec<TeamCount> {
    let mut keys: Vec<String> = Vec::new();
    let mut counts: Vec<TeamCount> = Vec::new();

    for record in records {
        let key = record.team_key();
        match keys.iter().position(|k| *k == key) {
            Some(idx) => counts[idx].count += 1,
            None => {
                keys.push(key);
                counts.push(TeamCount {
                    team: record.team.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}
