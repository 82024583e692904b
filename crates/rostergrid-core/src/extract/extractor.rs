//! # Roster Extractor
//!
//! Ties the pipeline together: group bases are located once, the section
//! scanner binds teams and delimits bodies, the record extractor reads each
//! body, and the validator checks the configured limits.

use tracing::{info, warn};

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::extract::groups::group_bases;
use crate::extract::record::{PlayerNameCleaner, RecordExtractor};
use crate::extract::section::{ScanRules, Section, SectionScanner};
use crate::extract::validate::validate;
use crate::extract::vocab::Vocabulary;
use crate::types::{ExtractionResult, Grid, ValidationSummary};

/// Extraction engine configured for one kind of section.
///
/// Holds only immutable state, so one extractor can serve any number of
/// grids, including concurrently.
#[derive(Debug, Clone)]
pub struct RosterExtractor {
    config: ExtractorConfig,
    rules: ScanRules,
    header_artifacts: Vocabulary,
    cleaner: PlayerNameCleaner,
}

impl RosterExtractor {
    /// Create an extractor with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::InvalidConfig` if the configuration fails
    /// [`ExtractorConfig::validate`].
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        config.validate()?;

        // Markers and header tokens never name a team, whatever the
        // configured exclusions say.
        let excluded = Vocabulary::new(
            config
                .excluded_tokens
                .iter()
                .chain(&config.section_markers)
                .chain(&config.header_tokens),
        );
        let rules = ScanRules {
            mode: config.mode,
            markers: Vocabulary::new(&config.section_markers),
            header_tokens: Vocabulary::new(&config.header_tokens),
            excluded,
        };

        Ok(Self {
            rules,
            header_artifacts: Vocabulary::new(&config.header_artifacts),
            cleaner: PlayerNameCleaner::new()?,
            config,
        })
    }

    /// Extractor for practice-squad sections (3 per team, 36 overall).
    pub fn practice_squad() -> Result<Self> {
        Self::new(ExtractorConfig::practice_squad())
    }

    /// Extractor for the active roster spans (no limits).
    pub fn roster() -> Result<Self> {
        Self::new(ExtractorConfig::roster())
    }

    /// Get the extractor configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Locates the sections of `grid` without extracting records.
    #[must_use]
    pub fn sections(&self, grid: &Grid) -> Vec<Section> {
        let bases = group_bases(grid, self.config.stride);
        SectionScanner::new(grid, &bases, &self.rules).scan()
    }

    /// Extracts every record of `grid` in reading order.
    ///
    /// An empty grid, or one too narrow to hold a single block, yields an
    /// empty result rather than an error.
    ///
    /// # Examples
    /// ```
    /// use rostergrid_core::{Grid, RosterExtractor};
    ///
    /// let grid = Grid::from_text_rows([
    ///     vec!["JP BREAKS", "", ""],
    ///     vec!["Practice Squad Stash", "", ""],
    ///     vec!["1", "QB", "JJ McCarthy {ps}"],
    ///     vec!["", "", ""],
    /// ]);
    /// let extractor = RosterExtractor::practice_squad().unwrap();
    /// let result = extractor.extract(&grid);
    ///
    /// assert_eq!(result.players(), vec!["JJ McCarthy"]);
    /// assert_eq!(result.records[0].team, "JP BREAKS");
    /// ```
    #[must_use]
    pub fn extract(&self, grid: &Grid) -> ExtractionResult {
        let bases = group_bases(grid, self.config.stride);
        if bases.is_empty() {
            if !grid.is_empty() {
                warn!(width = grid.width(), stride = self.config.stride, "grid too narrow for any block");
            }
            return ExtractionResult::default();
        }

        let sections = SectionScanner::new(grid, &bases, &self.rules).scan();
        let extractor = RecordExtractor::new(grid, &bases, &self.header_artifacts, &self.cleaner);

        let mut records = Vec::new();
        for section in &sections {
            extractor.extract_section(section, &mut records);
        }

        info!(
            mode = %self.config.mode,
            sections = sections.len(),
            records = records.len(),
            "extraction complete"
        );
        ExtractionResult::new(records)
    }

    /// Checks a result against the configured limits.
    ///
    /// # Errors
    ///
    /// Returns the validator's limit errors.
    pub fn validate(&self, result: &ExtractionResult) -> Result<ValidationSummary> {
        validate(&result.records, &self.config.limits)
    }

    /// Extracts and validates in one call; nothing is returned on failure.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::PerTeamLimitExceeded` or
    /// `RosterError::GlobalLimitExceeded` when a limit is violated.
    pub fn extract_validated(&self, grid: &Grid) -> Result<(ExtractionResult, ValidationSummary)> {
        let result = self.extract(grid);
        let summary = self.validate(&result)?;
        Ok((result, summary))
    }
}

/// Convenience function: practice-squad records of `grid`, validated.
pub fn extract_practice_squad(grid: &Grid) -> Result<ExtractionResult> {
    let extractor = RosterExtractor::practice_squad()?;
    extractor.extract_validated(grid).map(|(result, _)| result)
}

/// Convenience function: active-roster records of `grid`.
pub fn extract_roster(grid: &Grid) -> Result<ExtractionResult> {
    let extractor = RosterExtractor::roster()?;
    Ok(extractor.extract(grid))
}
