/// A rectangular grid of optional text cells.
///
/// Rows and columns are zero-based. Every row has exactly [`Grid::width`]
/// cells: ragged input is padded with unset cells on construction, and the
/// grid cannot be modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Option<String>>>,
    width: usize,
}

impl Grid {
    /// Builds a grid from rows of optional cells, padding short rows.
    #[must_use]
    pub fn new(mut rows: Vec<Vec<Option<String>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, None);
        }
        Self { rows, width }
    }

    /// Builds a grid from plain text rows. Empty strings become unset cells.
    ///
    /// # Examples
    /// ```
    /// use rostergrid_core::Grid;
    ///
    /// let grid = Grid::from_text_rows([vec!["Team A"], vec!["Count", "QB", "Player"]]);
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.cell(0, 2), None);
    /// assert_eq!(grid.cell(1, 1), Some("QB"));
    /// ```
    pub fn from_text_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        let cell = cell.as_ref();
                        (!cell.is_empty()).then(|| cell.to_string())
                    })
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    /// Number of columns (the longest input row).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the grid has no rows or no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.width == 0
    }

    /// Raw cell text, or `None` when the cell is unset or out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Trimmed cell text; unset and out-of-bounds cells read as `""`.
    #[must_use]
    pub fn trimmed(&self, row: usize, col: usize) -> &str {
        self.cell(row, col).map(str::trim).unwrap_or("")
    }

    /// The cells of one row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Option<String>]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Iterates over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<String>]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Column whose first-row cell equals `label` after trimming.
    #[must_use]
    pub fn header_column(&self, label: &str) -> Option<usize> {
        (0..self.width).find(|&col| self.trimmed(0, col) == label)
    }

    /// Iterates over the set cells of one row.
    pub fn row_texts(&self, row: usize) -> impl Iterator<Item = &str> {
        self.row(row)
            .unwrap_or(&[])
            .iter()
            .filter_map(|cell| cell.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_padded() {
        let grid = Grid::from_text_rows([vec!["a"], vec!["b", "c", "d"], vec![]]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        for row in grid.rows() {
            assert_eq!(row.len(), 3);
        }
        assert_eq!(grid.cell(0, 2), None);
        assert_eq!(grid.cell(1, 2), Some("d"));
    }

    #[test]
    fn out_of_bounds_reads_are_blank() {
        let grid = Grid::from_text_rows([vec!["  x  "]]);
        assert_eq!(grid.cell(5, 5), None);
        assert_eq!(grid.trimmed(5, 5), "");
        assert_eq!(grid.trimmed(0, 0), "x");
    }

    #[test]
    fn empty_grid() {
        let grid = Grid::default();
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.row_texts(0).count(), 0);

        let no_columns = Grid::new(vec![vec![], vec![]]);
        assert!(no_columns.is_empty());
        assert_eq!(no_columns.height(), 2);
    }

    #[test]
    fn header_column_lookup() {
        let grid = Grid::from_text_rows([vec!["RK", " PLAYER NAME ", "POS"], vec!["1", "x", "QB"]]);
        assert_eq!(grid.header_column("PLAYER NAME"), Some(1));
        assert_eq!(grid.header_column("player name"), None);
        assert_eq!(Grid::default().header_column("RK"), None);
    }

    #[test]
    fn row_texts_skip_unset_cells() {
        let grid = Grid::from_text_rows([vec!["", "Practice Squad Stash", ""]]);
        let texts: Vec<&str> = grid.row_texts(0).collect();
        assert_eq!(texts, vec!["Practice Squad Stash"]);
    }
}
