use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::extract::groups::{PLAYER_OFFSET, POSITION_OFFSET};
use crate::extract::section::Section;
use crate::extract::team::TeamBinding;
use crate::extract::vocab::Vocabulary;
use crate::types::{Grid, Record};

/// Strips trailing `{…}` annotations from player display names.
#[derive(Debug, Clone)]
pub struct PlayerNameCleaner {
    re_braced_suffix: Regex,
}

impl PlayerNameCleaner {
    /// Constructs a cleaner with its pattern pre-compiled.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::RegexError` if the pattern fails to compile
    /// (should never happen with the static pattern defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_braced_suffix: Regex::new(r"\s*\{[^}]*\}\s*$")?,
        })
    }

    /// Removes one trailing brace annotation and trims the result.
    ///
    /// # Examples
    /// ```
    /// use rostergrid_core::extract::PlayerNameCleaner;
    ///
    /// let cleaner = PlayerNameCleaner::new().unwrap();
    /// assert_eq!(cleaner.clean("Marcus Jones {rookie}"), "Marcus Jones");
    /// assert_eq!(cleaner.clean("Marcus Jones"), "Marcus Jones");
    /// ```
    #[must_use]
    pub fn clean(&self, name: &str) -> String {
        self.re_braced_suffix.replace(name, "").trim().to_string()
    }
}

/// Turns section body rows into records.
pub struct RecordExtractor<'a> {
    grid: &'a Grid,
    bases: &'a [usize],
    header_artifacts: &'a Vocabulary,
    cleaner: &'a PlayerNameCleaner,
}

impl<'a> RecordExtractor<'a> {
    #[must_use]
    pub fn new(
        grid: &'a Grid,
        bases: &'a [usize],
        header_artifacts: &'a Vocabulary,
        cleaner: &'a PlayerNameCleaner,
    ) -> Self {
        Self {
            grid,
            bases,
            header_artifacts,
            cleaner,
        }
    }

    /// Appends the records of every body row of `section`, row by row.
    pub fn extract_section(&self, section: &Section, out: &mut Vec<Record>) {
        for row in section.body.clone() {
            self.extract_row(row, &section.teams, out);
        }
    }

    /// Appends the records of one row in ascending base order.
    ///
    /// Cells are skipped individually: a blank or header-like player, an
    /// unresolved team, or a name that cleans to nothing drops that group
    /// only, never the whole row.
    pub fn extract_row(&self, row: usize, teams: &TeamBinding, out: &mut Vec<Record>) {
        for &base in self.bases {
            let player_raw = self.grid.trimmed(row, base + PLAYER_OFFSET);
            if player_raw.is_empty() || self.header_artifacts.matches(player_raw) {
                continue;
            }

            let Some(team) = teams.team_for(base) else {
                debug!(row, base, player = player_raw, "dropping player with unresolved team");
                continue;
            };

            let player = self.cleaner.clean(player_raw);
            if player.is_empty() {
                continue;
            }

            let position = self.grid.trimmed(row, base + POSITION_OFFSET);
            out.push(Record::new(team, position, player));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HEADER_ARTIFACTS;
    use crate::extract::groups::group_bases;

    fn cleaner() -> PlayerNameCleaner {
        PlayerNameCleaner::new().unwrap()
    }

    #[test]
    fn strips_trailing_brace_annotation() {
        let c = cleaner();
        assert_eq!(c.clean("Marcus Jones {rookie}"), "Marcus Jones");
        assert_eq!(c.clean("Marcus Jones{2025 R1}  "), "Marcus Jones");
        assert_eq!(c.clean("  Marcus Jones  "), "Marcus Jones");
        assert_eq!(c.clean("{only a note}"), "");
    }

    #[test]
    fn keeps_inner_braces() {
        let c = cleaner();
        assert_eq!(c.clean("A {x} B"), "A {x} B");
        assert_eq!(c.clean("A {x} B {y}"), "A {x} B");
    }

    fn grid() -> Grid {
        Grid::from_text_rows([
            vec!["Team A", "", "", "", "", "", "", "", "", ""],
            vec!["Practice Squad Stash", "", "", "", "", "Practice Squad Stash", "", "", "", ""],
            vec!["1", "QB", "Alpha {r}", "", "", "1", "RB", "Bravo", "", ""],
            vec!["", "", "Player", "", "", "", "", "", "", ""],
            vec!["", "", "{gone}", "", "", "2", "", "Charlie", "", ""],
        ])
    }

    #[test]
    fn extracts_in_base_order_and_drops_unresolved_groups() {
        let grid = grid();
        let bases = group_bases(&grid, 5);
        let artifacts = Vocabulary::new(HEADER_ARTIFACTS);
        let cleaner = cleaner();
        let extractor = RecordExtractor::new(&grid, &bases, &artifacts, &cleaner);

        let teams = TeamBinding::resolve(&grid, 1, &bases, &Vocabulary::new(["practice squad stash"]));
        let mut out = Vec::new();
        extractor.extract_row(2, &teams, &mut out);

        // base 5 has no team above the opener, so Bravo is dropped.
        assert_eq!(out, vec![Record::new("Team A", "QB", "Alpha")]);
    }

    #[test]
    fn skips_header_artifacts_and_empty_clean_names() {
        let grid = Grid::from_text_rows([
            vec!["Team A", "", "", "", "", "Team B", "", ""],
            vec!["Practice Squad Stash", "", "", "", "", "", "", ""],
            vec!["", "", "Player", "", "", "", "", "PLAYERS"],
            vec!["", "", "{gone}", "", "", "2", "", "Charlie"],
        ]);
        let bases = group_bases(&grid, 5);
        let artifacts = Vocabulary::new(HEADER_ARTIFACTS);
        let cleaner = cleaner();
        let extractor = RecordExtractor::new(&grid, &bases, &artifacts, &cleaner);
        let teams = TeamBinding::resolve(&grid, 1, &bases, &Vocabulary::default());

        let mut out = Vec::new();
        extractor.extract_row(2, &teams, &mut out);
        assert!(out.is_empty());

        extractor.extract_row(3, &teams, &mut out);
        assert_eq!(out, vec![Record::new("Team B", "", "Charlie")]);
    }
}
