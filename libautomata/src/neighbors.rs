use crate::{
    grid::{CellState, Grid},
    pos::Position,
};

/// Relative (row, col) offsets of the Moore neighborhood.
pub const MOORE_OFFSETS: [[isize; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Counts the alive cells among the 8 wrapped neighbors of (row, col).
/// The center cell is never looked at; dying neighbors don't count.
pub fn count_live_neighbors(grid: &Grid, row: isize, col: isize) -> u8 {
    let center: Position = grid.canonical((row, col));

    MOORE_OFFSETS
        .iter()
        .filter(|&&[d_row, d_col]| grid.cell(center.offset(d_row, d_col)) == CellState::Alive)
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_no_neighbors() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(count_live_neighbors(&grid, 2, 2), 0);
    }

    #[test]
    fn center_is_excluded() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, CellState::Alive);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 0);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 1);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);
    }

    #[test]
    fn full_neighborhood_counts_eight() {
        let mut grid = Grid::new(5, 5).unwrap();
        for [d_row, d_col] in MOORE_OFFSETS {
            grid.set(2 + d_row, 2 + d_col, CellState::Alive);
        }
        assert_eq!(count_live_neighbors(&grid, 2, 2), 8);
    }

    #[test]
    fn neighbors_wrap_across_edges() {
        let mut grid = Grid::new(6, 4).unwrap();
        grid.set(3, 5, CellState::Alive);
        grid.set(0, 5, CellState::Alive);
        grid.set(3, 0, CellState::Alive);

        // (0, 0) sees the opposite corner, the bottom row and the right column.
        assert_eq!(count_live_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_live_neighbors(&grid, -4, 6), 3);
    }

    #[test]
    fn extreme_centers_count_their_wrapped_neighbors() {
        let mut grid = Grid::new(5, 4).unwrap();
        let center = grid.canonical((isize::MAX, isize::MIN));
        for [d_row, d_col] in MOORE_OFFSETS {
            grid.set(center.row + d_row, center.col + d_col, CellState::Alive);
        }

        assert_eq!(count_live_neighbors(&grid, isize::MAX, isize::MIN), 8);
        assert_eq!(count_live_neighbors(&grid, center.row, center.col), 8);
    }

    #[test]
    fn dying_cells_are_not_live() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 0, CellState::Dying);
        grid.set(0, 1, CellState::Alive);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 1);
    }
}
