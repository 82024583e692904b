use thiserror::Error;

/// Errors that can occur during rostergrid operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited source could not be decoded into a grid.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// One-based line where the problem was detected.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// The extractor configuration is unusable.
    #[error("invalid extractor configuration: {0}")]
    InvalidConfig(String),

    /// A TOML configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// A tabular input lacks a column the caller asked for.
    #[error("required column {column:?} not found")]
    MissingColumn {
        /// The header label that was looked up.
        column: String,
    },

    /// One team holds more records than the configured per-team maximum.
    #[error("team '{team}' has more than {limit} players ({count}): {}", .players.join(", "))]
    PerTeamLimitExceeded {
        /// Team name as it appears in the grid.
        team: String,
        /// Number of records attributed to the team.
        count: usize,
        /// The configured maximum.
        limit: usize,
        /// Every player attributed to the team, in extraction order.
        players: Vec<String>,
    },

    /// The whole extraction holds more records than the global maximum.
    #[error("total players exceeds {limit} (found {total})")]
    GlobalLimitExceeded {
        /// Number of extracted records.
        total: usize,
        /// The configured maximum.
        limit: usize,
    },
}

impl RosterError {
    /// Returns `true` for the cardinality failures raised by the validator.
    #[must_use]
    pub fn is_limit_violation(&self) -> bool {
        matches!(
            self,
            Self::PerTeamLimitExceeded { .. } | Self::GlobalLimitExceeded { .. }
        )
    }
}

/// Result type alias for rostergrid operations.
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = RosterError::Parse {
            line: 4,
            message: "unterminated quoted field".into(),
        };
        assert_eq!(err.to_string(), "parse error at line 4: unterminated quoted field");

        let err = RosterError::PerTeamLimitExceeded {
            team: "JP BREAKS".into(),
            count: 4,
            limit: 3,
            players: vec!["A".into(), "B".into(), "C".into(), "D".into()],
        };
        assert_eq!(
            err.to_string(),
            "team 'JP BREAKS' has more than 3 players (4): A, B, C, D"
        );

        let err = RosterError::GlobalLimitExceeded { total: 37, limit: 36 };
        assert!(err.to_string().contains("37"));
    }

    #[test]
    fn limit_violations_are_flagged() {
        assert!(RosterError::GlobalLimitExceeded { total: 2, limit: 1 }.is_limit_violation());
        assert!(!RosterError::InvalidConfig("stride".into()).is_limit_violation());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RosterError>();
    }
}
