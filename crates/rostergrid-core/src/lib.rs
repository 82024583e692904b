//! # Rostergrid Core
//!
//! Extraction engine for fantasy-league division spreadsheets, where every
//! team owns a fixed-width block of columns laid out side by side. Locates
//! the blocks, binds each section to its team, pulls out player records and
//! checks roster limits.
//!
//! ## Quick Start
//!
//! ```rust
//! use rostergrid_core::RosterExtractor;
//! use rostergrid_core::loader::parse_delimited;
//!
//! let csv = "\
//! JP BREAKS,,,,,Keenan and Kelce,,
//! Count,Pos,Player,Contract,,Count,Pos,Player
//! 1,QB,JJ McCarthy,2027,,1,RB,Cam Skattebo
//! Practice Squad Stash,,,,,Practice Squad Stash,,
//! 1,WR,Jermaine Burton {ps},,,1,WR,Jack Bech
//! ,,,,,,,
//! ";
//! let grid = parse_delimited(csv, ',').unwrap();
//!
//! let practice = RosterExtractor::practice_squad().unwrap();
//! let (result, summary) = practice.extract_validated(&grid).unwrap();
//! assert_eq!(result.players(), vec!["Jermaine Burton", "Jack Bech"]);
//! assert_eq!(summary.total, 2);
//!
//! let roster = RosterExtractor::roster().unwrap().extract(&grid);
//! assert_eq!(roster.players_for_team("jp breaks"), vec!["JJ McCarthy"]);
//! ```
pub mod config;
pub mod error;
pub mod extract;
pub mod loader;
pub mod names;
pub mod report;
pub mod types;

// Re-export primary API
pub use config::{ExtractorConfig, Limits, ScanMode};
pub use error::{Result, RosterError};
pub use extract::{RosterExtractor, extract_practice_squad, extract_roster, records_for_team};
pub use loader::{GridCache, load_grid, parse_delimited};
pub use types::{ExtractionResult, Grid, Record, TeamCount, ValidationSummary};
