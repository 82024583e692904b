//! Delimited-text import into [`Grid`]s, plus a shared read-through cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::error::{Result, RosterError};
use crate::types::Grid;

const BOM: char = '\u{feff}';

/// Parses delimited text into a grid.
///
/// A quote opens a quoted field only at the start of a field; elsewhere it
/// is literal text. Quoted fields may contain the delimiter, doubled quotes
/// and line breaks. `\n`, `\r\n` and a bare `\r` end a record. Unquoted
/// fields are kept verbatim
/// (trimming is the extractor's job); empty fields become unset cells and
/// short records are padded to the widest one.
///
/// # Errors
///
/// Returns `RosterError::Parse` if a quoted field is never closed.
///
/// # Examples
/// ```
/// use rostergrid_core::loader::parse_delimited;
///
/// let grid = parse_delimited("Team A,,\n1,QB,\"McCarthy, JJ\"\n", ',').unwrap();
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.cell(1, 2), Some("McCarthy, JJ"));
/// assert_eq!(grid.cell(0, 1), None);
/// ```
pub fn parse_delimited(text: &str, delimiter: char) -> Result<Grid> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let mut row: Vec<Option<String>> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut quote_line = 1;
    let mut chars = text.chars().peekable();

    let finish_field = |row: &mut Vec<Option<String>>, current: &mut String| {
        let field = std::mem::take(current);
        row.push((!field.is_empty()).then_some(field));
    };

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    current.push(c);
                }
                _ => current.push(c),
            }
            continue;
        }

        match c {
            '"' if current.is_empty() => {
                in_quotes = true;
                quote_line = line;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => {
                finish_field(&mut row, &mut current);
                rows.push(std::mem::take(&mut row));
                line += 1;
            }
            c if c == delimiter => finish_field(&mut row, &mut current),
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(RosterError::Parse {
            line: quote_line,
            message: "unterminated quoted field".into(),
        });
    }

    // A trailing newline does not start another record.
    if !current.is_empty() || !row.is_empty() {
        finish_field(&mut row, &mut current);
        rows.push(row);
    }

    let grid = Grid::new(rows);
    debug!(rows = grid.height(), cols = grid.width(), "parsed delimited text");
    Ok(grid)
}

/// Delimiter implied by a file extension: tab for `.tsv`, comma otherwise.
#[must_use]
pub fn delimiter_for(path: &Path) -> char {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => '\t',
        _ => ',',
    }
}

/// Reads and parses a delimited file.
///
/// # Errors
///
/// Returns `RosterError::Io` if the file cannot be read and
/// `RosterError::Parse` for malformed content.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let grid = parse_delimited(&text, delimiter_for(path))?;
    info!(path = %path.display(), rows = grid.height(), cols = grid.width(), "loaded grid");
    Ok(grid)
}

/// Cache key for `path`: its canonical form, or the path as given when it
/// cannot be resolved.
fn cache_key(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Read-through cache of loaded grids keyed by canonical path.
///
/// Grids are immutable once loaded, so entries are shared as `Arc<Grid>`
/// and the cache can be used from several threads at once.
#[derive(Debug, Default)]
pub struct GridCache {
    grids: DashMap<PathBuf, Arc<Grid>>,
}

impl GridCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached grid for `path`, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`load_grid`]; failed loads are not cached.
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<Grid>> {
        let path = path.as_ref();
        let key = cache_key(path);
        if let Some(grid) = self.grids.get(&key) {
            return Ok(Arc::clone(grid.value()));
        }

        let grid = Arc::new(load_grid(path)?);
        let entry = self
            .grids
            .entry(key)
            .or_insert_with(|| Arc::clone(&grid));
        Ok(Arc::clone(entry.value()))
    }

    /// Drops the cached grid for `path`, if any.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> Option<Arc<Grid>> {
        self.grids.remove(&cache_key(path.as_ref())).map(|(_, grid)| grid)
    }

    /// Number of cached grids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub fn clear(&self) {
        self.grids.clear();
    }
}
