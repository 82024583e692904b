//! CSV report writers for extracted records and player lists.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::types::{Grid, Record};

/// Header row of a records report.
pub const RECORDS_HEADER: [&str; 3] = ["Team", "Position", "Player"];

/// Header row of a players-only report.
pub const PLAYERS_HEADER: &str = "Player";

/// Quotes a field when it contains a comma, quote or line break.
#[must_use]
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_line<W: Write>(writer: &mut W, fields: &[&str]) -> Result<()> {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    writeln!(writer, "{}", line.join(","))?;
    Ok(())
}

/// Writes `Team,Position,Player` followed by one line per record.
///
/// # Errors
///
/// Returns `RosterError::Io` if the writer fails.
pub fn write_records<'a, W, I>(writer: &mut W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    write_line(writer, &RECORDS_HEADER)?;
    for record in records {
        write_line(
            writer,
            &[record.team.as_str(), record.position_str(), record.player.as_str()],
        )?;
    }
    Ok(())
}

/// Writes a `Player` header followed by one name per line.
///
/// # Errors
///
/// Returns `RosterError::Io` if the writer fails.
pub fn write_players<W, I, S>(writer: &mut W, names: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    write_line(writer, &[PLAYERS_HEADER])?;
    for name in names {
        write_line(writer, &[name.as_ref()])?;
    }
    Ok(())
}

/// Writes every row of `grid` verbatim, unset cells as empty fields.
///
/// # Errors
///
/// Returns `RosterError::Io` if the writer fails.
pub fn write_grid<W: Write>(writer: &mut W, grid: &Grid) -> Result<()> {
    for row in grid.rows() {
        let fields: Vec<&str> = row.iter().map(|cell| cell.as_deref().unwrap_or("")).collect();
        write_line(writer, &fields)?;
    }
    Ok(())
}

/// Writes a records report to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `RosterError::Io` if the file cannot be created or written.
pub fn write_records_csv(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_records(&mut writer, records)?;
    writer.flush()?;
    info!(path = %path.display(), records = records.len(), "wrote records report");
    Ok(())
}

/// Writes a players-only report to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `RosterError::Io` if the file cannot be created or written.
pub fn write_players_csv<I, S>(path: impl AsRef<Path>, names: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_players(&mut writer, names)?;
    writer.flush()?;
    info!(path = %path.display(), "wrote players report");
    Ok(())
}

/// Writes `grid` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `RosterError::Io` if the file cannot be created or written.
pub fn write_grid_csv(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_grid(&mut writer, grid)?;
    writer.flush()?;
    info!(path = %path.display(), rows = grid.height(), "wrote table");
    Ok(())
}
