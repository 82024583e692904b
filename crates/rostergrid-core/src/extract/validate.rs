use tracing::warn;

use crate::config::Limits;
use crate::error::{Result, RosterError};
use crate::types::{Record, ValidationSummary, count_by_team, normalize_team};

/// Checks the cardinality limits over a full record set.
///
/// The per-team limit is checked first (teams in first-seen order), then the
/// global one. Validation is all-or-nothing: on failure the caller discards
/// the whole extraction.
///
/// # Errors
///
/// Returns `RosterError::PerTeamLimitExceeded` with every player of the
/// offending team, or `RosterError::GlobalLimitExceeded`.
pub fn validate(records: &[Record], limits: &Limits) -> Result<ValidationSummary> {
    let summary = ValidationSummary {
        count_by_team: count_by_team(records),
        total: records.len(),
    };

    if let Some(limit) = limits.per_team {
        if let Some(over) = summary.count_by_team.iter().find(|tc| tc.count > limit) {
            let key = normalize_team(&over.team);
            let players: Vec<String> = records
                .iter()
                .filter(|r| r.team_key() == key)
                .map(|r| r.player.clone())
                .collect();
            warn!(team = %over.team, count = over.count, limit, "per-team limit exceeded");
            return Err(RosterError::PerTeamLimitExceeded {
                team: over.team.clone(),
                count: over.count,
                limit,
                players,
            });
        }
    }

    if let Some(limit) = limits.total {
        if summary.total > limit {
            warn!(total = summary.total, limit, "global limit exceeded");
            return Err(RosterError::GlobalLimitExceeded {
                total: summary.total,
                limit,
            });
        }
    }

    Ok(summary)
}
