pub mod extractor;
pub mod groups;
pub mod query;
pub mod record;
pub mod section;
pub mod team;
pub mod validate;
pub mod vocab;

pub use extractor::{RosterExtractor, extract_practice_squad, extract_roster};
pub use groups::{PLAYER_OFFSET, POSITION_OFFSET, group_bases};
pub use query::records_for_team;
pub use record::{PlayerNameCleaner, RecordExtractor};
pub use section::{OpenSection, RowRole, ScanRules, ScanState, Section, SectionScanner, Transition};
pub use team::{TeamBinding, is_excluded_team_token, resolve_team};
pub use validate::validate;
pub use vocab::Vocabulary;
