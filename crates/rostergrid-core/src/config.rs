//! # Extractor Configuration
//!
//! Every vocabulary and limit the engine consults lives here, so the same
//! engine serves both the unrestricted roster extraction and the
//! limit-checked practice-squad extraction.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Width of one team block: count, position, player, contract, separator.
pub const DEFAULT_STRIDE: usize = 5;

/// Marker that opens a practice-squad section.
pub const PRACTICE_SQUAD_MARKER: &str = "practice squad stash";

/// Every marker that introduces a non-roster section.
///
/// "contract extentions" is misspelled in real exports and kept on purpose.
pub const SECTION_MARKERS: &[&str] = &[
    "practice squad stash",
    "new offseason contracts",
    "contract extentions",
    "contract extensions",
    "rookie draft picks",
    "offseason free agent auction cash",
];

/// Column labels found at the top of each team block.
pub const HEADER_TOKENS: &[&str] = &["count", "number"];

/// Player-column values that are header leftovers, never players.
pub const HEADER_ARTIFACTS: &[&str] = &["player", "players"];

/// Maximum practice-squad players per team.
pub const PRACTICE_SQUAD_TEAM_LIMIT: usize = 3;

/// Maximum practice-squad players across a division.
pub const PRACTICE_SQUAD_TOTAL_LIMIT: usize = 36;

/// How section openers and terminators are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// A row containing a section marker opens a section; the first row with
    /// every player cell empty closes it.
    #[default]
    Marker,
    /// A block header row opens a section; the next row containing a section
    /// marker closes it.
    Span,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marker => write!(f, "marker"),
            Self::Span => write!(f, "span"),
        }
    }
}

/// Cardinality limits checked by the validator. `None` disables a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum records per team.
    pub per_team: Option<usize>,
    /// Maximum records overall.
    pub total: Option<usize>,
}

impl Limits {
    /// No limits at all.
    pub const UNRESTRICTED: Self = Self {
        per_team: None,
        total: None,
    };

    /// Practice-squad limits: 3 per team, 36 overall.
    pub const PRACTICE_SQUAD: Self = Self {
        per_team: Some(PRACTICE_SQUAD_TEAM_LIMIT),
        total: Some(PRACTICE_SQUAD_TOTAL_LIMIT),
    };

    /// Creates limits from optional maxima.
    #[must_use]
    pub fn new(per_team: Option<usize>, total: Option<usize>) -> Self {
        Self { per_team, total }
    }

    /// Returns `true` if neither limit is set.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.per_team.is_none() && self.total.is_none()
    }
}

/// Configuration for [`crate::RosterExtractor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Columns per team block.
    pub stride: usize,
    /// Section recognition strategy.
    pub mode: ScanMode,
    /// Markers that open (marker mode) or terminate (span mode) a section.
    pub section_markers: Vec<String>,
    /// Values that can never be a team name.
    pub excluded_tokens: Vec<String>,
    /// Block header labels; span-mode openers.
    pub header_tokens: Vec<String>,
    /// Player-column values dropped as header leftovers.
    pub header_artifacts: Vec<String>,
    /// Validation limits.
    pub limits: Limits,
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| (*t).to_string()).collect()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let mut excluded_tokens = owned(HEADER_TOKENS);
        excluded_tokens.extend(owned(SECTION_MARKERS));

        Self {
            stride: DEFAULT_STRIDE,
            mode: ScanMode::Marker,
            section_markers: vec![PRACTICE_SQUAD_MARKER.to_string()],
            excluded_tokens,
            header_tokens: owned(HEADER_TOKENS),
            header_artifacts: owned(HEADER_ARTIFACTS),
            limits: Limits::UNRESTRICTED,
        }
    }
}

impl ExtractorConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Practice-squad extraction: marker mode on "practice squad stash",
    /// limited to 3 players per team and 36 overall.
    pub fn practice_squad() -> Self {
        Self::default().with_limits(Limits::PRACTICE_SQUAD)
    }

    /// Active-roster extraction: header-to-next-marker spans, no limits.
    pub fn roster() -> Self {
        Self::default()
            .with_mode(ScanMode::Span)
            .with_section_markers(SECTION_MARKERS.iter().copied())
    }

    /// Set the block width.
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Set the scan mode.
    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the section marker vocabulary.
    pub fn with_section_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the excluded team token vocabulary.
    pub fn with_excluded_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the header token vocabulary.
    pub fn with_header_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the header artifact vocabulary.
    pub fn with_header_artifacts<I, S>(mut self, artifacts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_artifacts = artifacts.into_iter().map(Into::into).collect();
        self
    }

    /// Set the validation limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Checks that the configuration can drive an extraction.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::InvalidConfig` if the stride cannot hold a player
    /// column, the marker vocabulary is empty, or span mode has no header
    /// tokens to open sections with.
    pub fn validate(&self) -> Result<()> {
        if self.stride < 3 {
            return Err(RosterError::InvalidConfig(format!(
                "stride must be at least 3 (count, position, player), got {}",
                self.stride
            )));
        }
        if !has_terms(&self.section_markers) {
            return Err(RosterError::InvalidConfig(
                "section marker vocabulary is empty".into(),
            ));
        }
        if self.mode == ScanMode::Span && !has_terms(&self.header_tokens) {
            return Err(RosterError::InvalidConfig(
                "span mode needs at least one header token".into(),
            ));
        }
        Ok(())
    }

    /// Applies the settings of a TOML document on top of this configuration.
    ///
    /// Keys left out of the document keep their current values:
    ///
    /// ```toml
    /// stride = 5
    /// mode = "marker"
    /// section_markers = ["practice squad stash"]
    /// max_per_team = 3
    /// max_total = 36
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `RosterError::ConfigParse` for malformed TOML or unknown keys,
    /// and `RosterError::InvalidConfig` if the merged result is unusable.
    pub fn merge_toml(mut self, content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| RosterError::ConfigParse(e.to_string()))?;

        if let Some(stride) = file.stride {
            self.stride = stride;
        }
        if let Some(mode) = file.mode {
            self.mode = mode;
        }
        if let Some(markers) = file.section_markers {
            self.section_markers = markers;
        }
        if let Some(tokens) = file.excluded_tokens {
            self.excluded_tokens = tokens;
        }
        if let Some(tokens) = file.header_tokens {
            self.header_tokens = tokens;
        }
        if let Some(artifacts) = file.header_artifacts {
            self.header_artifacts = artifacts;
        }
        if file.unlimited == Some(true) {
            self.limits = Limits::UNRESTRICTED;
        }
        if let Some(max) = file.max_per_team {
            self.limits.per_team = Some(max);
        }
        if let Some(max) = file.max_total {
            self.limits.total = Some(max);
        }

        self.validate()?;
        Ok(self)
    }

    /// Reads a TOML file and merges it onto this configuration.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Io` if the file cannot be read, otherwise the
    /// errors of [`ExtractorConfig::merge_toml`].
    pub fn merge_toml_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        self.merge_toml(&content)
    }
}

fn has_terms(terms: &[String]) -> bool {
    terms.iter().any(|t| !t.trim().is_empty())
}

/// On-disk configuration; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    stride: Option<usize>,
    mode: Option<ScanMode>,
    section_markers: Option<Vec<String>>,
    excluded_tokens: Option<Vec<String>>,
    header_tokens: Option<Vec<String>>,
    header_artifacts: Option<Vec<String>>,
    max_per_team: Option<usize>,
    max_total: Option<usize>,
    unlimited: Option<bool>,
}
