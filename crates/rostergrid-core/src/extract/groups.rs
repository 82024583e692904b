use crate::types::Grid;

/// Offset of the position column inside a block.
pub const POSITION_OFFSET: usize = 1;

/// Offset of the player column inside a block.
pub const PLAYER_OFFSET: usize = 2;

/// Computes the starting column of every repeating block.
///
/// Bases are `0, stride, 2 * stride, …` up to the last base whose player
/// column still fits inside the grid. The result depends only on the grid's
/// width, never on its content. An empty grid or a zero stride yields no
/// bases.
///
/// # Examples
/// ```
/// use rostergrid_core::Grid;
/// use rostergrid_core::extract::group_bases;
///
/// let grid = Grid::from_text_rows([vec![""; 13]]);
/// assert_eq!(group_bases(&grid, 5), vec![0, 5, 10]);
/// ```
#[must_use]
pub fn group_bases(grid: &Grid, stride: usize) -> Vec<usize> {
    if stride == 0 {
        return Vec::new();
    }
    let width = grid.width();
    (0..width)
        .step_by(stride)
        .filter(|base| base + PLAYER_OFFSET < width)
        .collect()
}
