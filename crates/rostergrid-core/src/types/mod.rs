pub mod grid;
pub mod record;
pub mod result;
pub mod team;

pub use grid::Grid;
pub use record::Record;
pub use result::{ExtractionResult, ValidationSummary};
pub use team::{TeamCount, count_by_team, normalize_team};
