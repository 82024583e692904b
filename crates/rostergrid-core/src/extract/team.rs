use crate::extract::vocab::Vocabulary;
use crate::types::Grid;

/// Returns `true` for values that can never name a team: blanks, plain
/// numbers, and anything in the excluded vocabulary.
#[must_use]
pub fn is_excluded_team_token(value: &str, excluded: &Vocabulary) -> bool {
    let value = value.trim();
    value.is_empty() || is_numeric(value) || excluded.matches(value)
}

fn is_numeric(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit()) && value.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Finds the team governing `(start_row, base)`.
///
/// Walks upward from the row above `start_row` in column `base` and returns
/// the first trimmed value that is not an excluded token, verbatim. Returns
/// `None` when the scan reaches the top without a candidate; callers drop
/// anything that would be attributed to an unresolved team.
///
/// # Examples
/// ```
/// use rostergrid_core::Grid;
/// use rostergrid_core::extract::{Vocabulary, resolve_team};
///
/// let grid = Grid::from_text_rows([
///     vec!["Team A"],
///     vec!["Count"],
///     vec!["5"],
///     vec!["Practice Squad Stash"],
/// ]);
/// let excluded = Vocabulary::new(["count", "practice squad stash"]);
/// assert_eq!(resolve_team(&grid, 3, 0, &excluded).as_deref(), Some("Team A"));
/// ```
#[must_use]
pub fn resolve_team(
    grid: &Grid,
    start_row: usize,
    base: usize,
    excluded: &Vocabulary,
) -> Option<String> {
    (0..start_row.min(grid.height()))
        .rev()
        .map(|row| grid.trimmed(row, base))
        .find(|candidate| !is_excluded_team_token(candidate, excluded))
        .map(str::to_string)
}

/// Team names resolved once for every group base of a section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamBinding {
    teams: Vec<(usize, Option<String>)>,
}

impl TeamBinding {
    /// Resolves the team of every base, anchored at `opener`.
    #[must_use]
    pub fn resolve(grid: &Grid, opener: usize, bases: &[usize], excluded: &Vocabulary) -> Self {
        Self {
            teams: bases
                .iter()
                .map(|&base| (base, resolve_team(grid, opener, base, excluded)))
                .collect(),
        }
    }

    /// The team bound to `base`, if it was resolved.
    #[must_use]
    pub fn team_for(&self, base: usize) -> Option<&str> {
        self.teams
            .iter()
            .find(|(b, _)| *b == base)
            .and_then(|(_, team)| team.as_deref())
    }

    /// Number of bases that resolved to a team.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.teams.iter().filter(|(_, team)| team.is_some()).count()
    }

    /// Iterates over `(base, team)` pairs in ascending base order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<&str>)> {
        self.teams.iter().map(|(base, team)| (*base, team.as_deref()))
    }
}
