//! # Section Scanner
//!
//! Walks the grid top to bottom with an explicit state machine. Each row
//! gets exactly one [`RowRole`]; the transition function [`SectionScanner::step`]
//! is pure so the opener, body and terminator rules can be tested row by row.

use std::ops::Range;

use tracing::debug;

use crate::config::ScanMode;
use crate::extract::groups::PLAYER_OFFSET;
use crate::extract::team::TeamBinding;
use crate::extract::vocab::Vocabulary;
use crate::types::Grid;

/// Vocabularies that drive section recognition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRules {
    /// Opener/terminator strategy.
    pub mode: ScanMode,
    /// Markers matched as substrings of any cell.
    pub markers: Vocabulary,
    /// Block header labels matched exactly at group bases.
    pub header_tokens: Vocabulary,
    /// Values skipped while resolving team names.
    pub excluded: Vocabulary,
}

/// The role a row plays in the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowRole {
    /// Not inside any section.
    Outside,
    /// Opens a section; not part of its body.
    Opener,
    /// Belongs to the open section.
    Body,
    /// Closes the open section; not part of its body.
    Terminator,
}

/// A section that is still consuming rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSection {
    opener: usize,
    end: usize,
    teams: TeamBinding,
}

impl OpenSection {
    fn new(opener: usize, teams: TeamBinding) -> Self {
        Self {
            opener,
            end: opener + 1,
            teams,
        }
    }

    /// Row that opened the section.
    #[must_use]
    pub fn opener(&self) -> usize {
        self.opener
    }

    fn extend(mut self, row: usize) -> Self {
        self.end = row + 1;
        self
    }

    fn close(self) -> Section {
        debug!(
            opener = self.opener,
            rows = self.end - self.opener - 1,
            "section closed"
        );
        Section {
            opener: self.opener,
            body: self.opener + 1..self.end,
            teams: self.teams,
        }
    }
}

/// Scanner state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Outside any recognized section.
    #[default]
    Scanning,
    /// Consuming the body of one section.
    InSection(OpenSection),
}

/// Result of feeding one row to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the row.
    pub state: ScanState,
    /// What the row was.
    pub role: RowRole,
    /// A section completed by this row, if any.
    pub closed: Option<Section>,
}

/// A completed section: the opener row, its contiguous body rows, and the
/// team names bound when it opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Row that opened the section.
    pub opener: usize,
    /// Body rows, exclusive of opener and terminator.
    pub body: Range<usize>,
    /// Team per group base, resolved at the opener.
    pub teams: TeamBinding,
}

/// Drives the section state machine over one grid.
pub struct SectionScanner<'a> {
    grid: &'a Grid,
    bases: &'a [usize],
    rules: &'a ScanRules,
}

impl<'a> SectionScanner<'a> {
    /// Creates a scanner over `grid` using the precomputed group `bases`.
    #[must_use]
    pub fn new(grid: &'a Grid, bases: &'a [usize], rules: &'a ScanRules) -> Self {
        Self { grid, bases, rules }
    }

    /// Returns `true` if any cell of `row` contains a section marker.
    #[must_use]
    pub fn is_marker_row(&self, row: usize) -> bool {
        self.grid
            .row_texts(row)
            .any(|cell| self.rules.markers.found_in(cell))
    }

    /// Returns `true` if any group base of `row` holds a header label.
    #[must_use]
    pub fn is_header_row(&self, row: usize) -> bool {
        self.bases
            .iter()
            .any(|&base| self.rules.header_tokens.matches(self.grid.trimmed(row, base)))
    }

    /// Returns `true` if every group base has an empty player cell in `row`.
    #[must_use]
    pub fn players_empty(&self, row: usize) -> bool {
        self.bases
            .iter()
            .all(|&base| self.grid.trimmed(row, base + PLAYER_OFFSET).is_empty())
    }

    fn opens_section(&self, row: usize) -> bool {
        match self.rules.mode {
            ScanMode::Marker => self.is_marker_row(row),
            ScanMode::Span => self.is_header_row(row),
        }
    }

    fn open(&self, row: usize) -> OpenSection {
        let teams = TeamBinding::resolve(self.grid, row, self.bases, &self.rules.excluded);
        debug!(
            opener = row,
            mode = %self.rules.mode,
            resolved = teams.resolved_count(),
            "section opened"
        );
        OpenSection::new(row, teams)
    }

    /// Feeds one row to the state machine.
    ///
    /// Marker mode: a marker row opens a section only while scanning; the
    /// first row whose player cells are all empty terminates it and is
    /// consumed. Span mode: a header row opens a section; a marker row
    /// terminates it, and another header row closes it and opens the next.
    #[must_use]
    pub fn step(&self, state: ScanState, row: usize) -> Transition {
        match state {
            ScanState::Scanning => {
                if self.opens_section(row) {
                    Transition {
                        state: ScanState::InSection(self.open(row)),
                        role: RowRole::Opener,
                        closed: None,
                    }
                } else {
                    Transition {
                        state: ScanState::Scanning,
                        role: RowRole::Outside,
                        closed: None,
                    }
                }
            }
            ScanState::InSection(open) => match self.rules.mode {
                ScanMode::Marker => {
                    if self.players_empty(row) {
                        Transition {
                            state: ScanState::Scanning,
                            role: RowRole::Terminator,
                            closed: Some(open.close()),
                        }
                    } else {
                        Transition {
                            state: ScanState::InSection(open.extend(row)),
                            role: RowRole::Body,
                            closed: None,
                        }
                    }
                }
                ScanMode::Span => {
                    if self.is_marker_row(row) {
                        Transition {
                            state: ScanState::Scanning,
                            role: RowRole::Terminator,
                            closed: Some(open.close()),
                        }
                    } else if self.is_header_row(row) {
                        Transition {
                            state: ScanState::InSection(self.open(row)),
                            role: RowRole::Opener,
                            closed: Some(open.close()),
                        }
                    } else {
                        Transition {
                            state: ScanState::InSection(open.extend(row)),
                            role: RowRole::Body,
                            closed: None,
                        }
                    }
                }
            },
        }
    }

    /// Role of every row, in order.
    #[must_use]
    pub fn roles(&self) -> Vec<RowRole> {
        let mut state = ScanState::Scanning;
        let mut roles = Vec::with_capacity(self.grid.height());
        for row in 0..self.grid.height() {
            let t = self.step(state, row);
            roles.push(t.role);
            state = t.state;
        }
        roles
    }

    /// Runs the scan and returns every section in grid order. A section still
    /// open at the bottom of the grid ends with the last row.
    #[must_use]
    pub fn scan(&self) -> Vec<Section> {
        let mut sections = Vec::new();
        if self.bases.is_empty() {
            return sections;
        }

        let mut state = ScanState::Scanning;
        for row in 0..self.grid.height() {
            let t = self.step(state, row);
            if let Some(section) = t.closed {
                sections.push(section);
            }
            state = t.state;
        }
        if let ScanState::InSection(open) = state {
            sections.push(open.close());
        }

        sections
    }
}
