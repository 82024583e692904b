//! # Player Names
//!
//! Normalization used to match the same player across differently formatted
//! sources, and the taken/available split built on it.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::error::{Result, RosterError};
use crate::types::Grid;

/// Name tokens dropped during normalization.
pub const SUFFIX_TOKENS: &[&str] = &["jr", "sr", "ii", "iii", "iv", "v"];

/// Column holding player names in extraction reports.
pub const PLAYER_COLUMN: &str = "Player";

/// Column holding player names in rankings exports.
pub const RANKINGS_PLAYER_COLUMN: &str = "PLAYER NAME";

/// ASCII base letter of a lowercase Latin letter with diacritics.
///
/// Letters without a canonical decomposition (ø, ł, ß, æ) have no base and
/// are dropped like any other non-ASCII character.
fn fold_diacritic(c: char) -> Option<char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ș' => 's',
        'ţ' | 'ť' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return None,
    };
    Some(base)
}

/// ASCII counterpart of a full-width form (U+FF01..=U+FF5E).
fn fold_full_width(c: char) -> char {
    match c {
        '\u{ff01}'..='\u{ff5e}' => char::from_u32(c as u32 - 0xfee0).unwrap_or(c),
        _ => c,
    }
}

/// Normalizes a player name for matching.
///
/// Lowercases, folds full-width forms and accented Latin letters to ASCII,
/// turns whitespace of any kind (no-break and thin spaces included) and every
/// other non-alphanumeric character into a space, drops suffix tokens (jr, sr,
/// ii, iii, iv, v) and collapses whitespace. Blank input normalizes to `""`.
///
/// # Examples
/// ```
/// use rostergrid_core::names::normalize_player_name;
///
/// assert_eq!(normalize_player_name("Marvin Harrison Jr."), "marvin harrison");
/// assert_eq!(normalize_player_name("Ja'Marr Chase"), "ja marr chase");
/// assert_eq!(normalize_player_name("  José  Peña III "), "jose pena");
/// ```
#[must_use]
pub fn normalize_player_name(name: &str) -> String {
    let folded: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(fold_full_width)
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c)
            } else if c.is_ascii() || c.is_whitespace() {
                Some(' ')
            } else {
                fold_diacritic(c)
            }
        })
        .collect();

    folded
        .split_whitespace()
        .filter(|token| !SUFFIX_TOKENS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes names whose normalized form was already seen.
///
/// The first spelling wins and is kept trimmed; names that normalize to
/// nothing are dropped.
#[must_use]
pub fn dedupe_by_normalized<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for name in names {
        let name = name.as_ref();
        let key = normalize_player_name(name);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        unique.push(name.trim().to_string());
    }
    unique
}

/// Sorts names case-insensitively; ties keep their input order.
pub fn sort_case_insensitive(names: &mut [String]) {
    names.sort_by_cached_key(|name| name.to_lowercase());
}

/// Non-blank trimmed values of the column labelled `column` (header row
/// excluded).
///
/// # Errors
///
/// Returns `RosterError::MissingColumn` if no header cell matches.
pub fn column_values(grid: &Grid, column: &str) -> Result<Vec<String>> {
    let col = grid
        .header_column(column)
        .ok_or_else(|| RosterError::MissingColumn {
            column: column.to_string(),
        })?;
    Ok((1..grid.height())
        .map(|row| grid.trimmed(row, col))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect())
}

/// Keeps the header row of `candidates` and every data row whose `column`
/// value does not normalize into `taken`.
///
/// # Errors
///
/// Returns `RosterError::MissingColumn` if `candidates` has no such column.
pub fn filter_available(candidates: &Grid, column: &str, taken: &HashSet<String>) -> Result<Grid> {
    let col = candidates
        .header_column(column)
        .ok_or_else(|| RosterError::MissingColumn {
            column: column.to_string(),
        })?;

    let rows = candidates
        .rows()
        .enumerate()
        .filter(|(row, _)| {
            *row == 0 || !taken.contains(&normalize_player_name(candidates.trimmed(*row, col)))
        })
        .map(|(_, cells)| cells.to_vec())
        .collect();
    Ok(Grid::new(rows))
}

/// Outcome of splitting a rankings table into taken and available players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    /// Unique taken names, sorted case-insensitively.
    pub taken: Vec<String>,
    /// Rankings header plus every row not taken.
    pub available: Grid,
    /// Names read from the roster source.
    pub roster_count: usize,
    /// Names read from the practice-squad source.
    pub practice_count: usize,
    /// Data rows in the rankings table.
    pub rankings_total: usize,
}

impl Availability {
    /// Data rows left in the available table.
    #[must_use]
    pub fn available_total(&self) -> usize {
        self.available.height().saturating_sub(1)
    }
}

/// Player names of a `Player`-column report; a missing column reads as no
/// players.
#[must_use]
pub fn report_players(grid: &Grid) -> Vec<String> {
    column_values(grid, PLAYER_COLUMN).unwrap_or_else(|err| {
        warn!(error = %err, "treating report as empty");
        Vec::new()
    })
}

/// Builds the taken set from the roster and practice-squad reports, then
/// filters `rankings` on `rankings_column`.
///
/// # Errors
///
/// Returns `RosterError::MissingColumn` if the rankings table lacks
/// `rankings_column`.
pub fn build_availability(
    roster: &Grid,
    practice: &Grid,
    rankings: &Grid,
    rankings_column: &str,
) -> Result<Availability> {
    let roster_names = report_players(roster);
    let practice_names = report_players(practice);

    let mut taken = dedupe_by_normalized(roster_names.iter().chain(&practice_names));
    let taken_keys: HashSet<String> = taken.iter().map(|n| normalize_player_name(n)).collect();
    sort_case_insensitive(&mut taken);

    let available = filter_available(rankings, rankings_column, &taken_keys)?;
    let availability = Availability {
        taken,
        available,
        roster_count: roster_names.len(),
        practice_count: practice_names.len(),
        rankings_total: rankings.height().saturating_sub(1),
    };

    info!(
        taken = availability.taken.len(),
        rankings = availability.rankings_total,
        available = availability.available_total(),
        "availability computed"
    );
    Ok(availability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_handles_punctuation_and_suffixes() {
        assert_eq!(normalize_player_name("Marvin Harrison Jr."), "marvin harrison");
        assert_eq!(normalize_player_name("Kenneth Walker III"), "kenneth walker");
        assert_eq!(normalize_player_name("D'Andre Swift"), "d andre swift");
        assert_eq!(normalize_player_name("Amon-Ra St. Brown"), "amon ra st brown");
        assert_eq!(normalize_player_name("  "), "");
        assert_eq!(normalize_player_name("Jr."), "");
    }

    #[test]
    fn normalization_folds_accents() {
        assert_eq!(normalize_player_name("Álvaro Núñez"), "alvaro nunez");
        assert_eq!(normalize_player_name("ZÖE ŠTĚPÁN"), "zoe stepan");
        // Letters with no ASCII base are dropped, not replaced.
        assert_eq!(normalize_player_name("Bjørn"), "bjrn");
    }

    #[test]
    fn normalization_treats_unicode_spaces_as_separators() {
        assert_eq!(normalize_player_name("Marcus\u{a0}Jones"), "marcus jones");
        assert_eq!(normalize_player_name("Puka\u{2009}Nacua\u{a0}Jr."), "puka nacua");
        assert_eq!(normalize_player_name("Ｂｒｏｃｋ　Ｂｏｗｅｒｓ"), "brock bowers");
    }

    #[test]
    fn no_break_space_names_match_rankings() {
        let roster = Grid::from_text_rows([vec!["Player"], vec!["Tetairoa\u{a0}McMillan"]]);
        let practice = Grid::from_text_rows([vec!["Player"]]);

        let result = build_availability(&roster, &practice, &rankings(), RANKINGS_PLAYER_COLUMN).unwrap();
        assert_eq!(result.available_total(), 3);
        assert!(
            (1..result.available.height()).all(|row| result.available.cell(row, 1) != Some("Tetairoa McMillan"))
        );
    }

    #[test]
    fn suffix_tokens_only_match_whole_words() {
        assert_eq!(normalize_player_name("Vince Ivory"), "vince ivory");
        assert_eq!(normalize_player_name("V Jefferson"), "jefferson");
    }

    #[test]
    fn dedupe_keeps_first_spelling() {
        let names = ["Marvin Harrison Jr.", " marvin harrison ", "Puka Nacua", "", "Puka  Nacua"];
        assert_eq!(
            dedupe_by_normalized(names),
            vec!["Marvin Harrison Jr.", "Puka Nacua"]
        );
    }

    #[test]
    fn sorting_ignores_case() {
        let mut names = vec!["bijan Robinson".to_string(), "Ashton Jeanty".into(), "Brock Bowers".into()];
        sort_case_insensitive(&mut names);
        assert_eq!(names, vec!["Ashton Jeanty", "bijan Robinson", "Brock Bowers"]);
    }

    #[test]
    fn column_values_requires_header() {
        let grid = Grid::from_text_rows([vec!["Player"], vec!["A"], vec![""], vec![" B "]]);
        assert_eq!(column_values(&grid, "Player").unwrap(), vec!["A", "B"]);

        let err = column_values(&grid, "PLAYER NAME").unwrap_err();
        assert!(matches!(err, RosterError::MissingColumn { .. }));
        assert!(report_players(&Grid::from_text_rows([vec!["Name"], vec!["x"]])).is_empty());
    }

    fn rankings() -> Grid {
        Grid::from_text_rows([
            vec!["RK", "PLAYER NAME", "POS"],
            vec!["1", "Ja'Marr Chase", "WR1"],
            vec!["2", "Marvin Harrison Jr.", "WR2"],
            vec!["3", "Cam Skattebo", "RB1"],
            vec!["4", "Tetairoa McMillan", "WR3"],
        ])
    }

    #[test]
    fn filter_keeps_header_and_untaken_rows() {
        let taken: HashSet<String> = ["marvin harrison", "cam skattebo"]
            .into_iter()
            .map(String::from)
            .collect();
        let available = filter_available(&rankings(), RANKINGS_PLAYER_COLUMN, &taken).unwrap();

        assert_eq!(available.height(), 3);
        assert_eq!(available.cell(0, 1), Some("PLAYER NAME"));
        assert_eq!(available.cell(1, 1), Some("Ja'Marr Chase"));
        assert_eq!(available.cell(2, 1), Some("Tetairoa McMillan"));
    }

    #[test]
    fn filter_missing_column_fails() {
        let err = filter_available(&rankings(), "NAME", &HashSet::new()).unwrap_err();
        assert_eq!(err.to_string(), "required column \"NAME\" not found");
    }

    #[test]
    fn availability_end_to_end() {
        let roster = Grid::from_text_rows([vec!["Player"], vec!["Marvin Harrison"], vec!["Ja'Marr Chase"]]);
        let practice = Grid::from_text_rows([vec!["Player"], vec!["Cam Skattebo"], vec!["ja'marr chase"]]);

        let result = build_availability(&roster, &practice, &rankings(), RANKINGS_PLAYER_COLUMN).unwrap();
        assert_eq!(result.taken, vec!["Cam Skattebo", "Ja'Marr Chase", "Marvin Harrison"]);
        assert_eq!(result.roster_count, 2);
        assert_eq!(result.practice_count, 2);
        assert_eq!(result.rankings_total, 4);
        assert_eq!(result.available_total(), 1);
        assert_eq!(result.available.cell(1, 1), Some("Tetairoa McMillan"));
    }
}
