use itertools::Itertools;
use rand::Rng;

use crate::{
    error::{AutomataError, Result},
    grid::{CellState, Grid},
    pattern::Pattern,
    pos::Position,
};

/// A grid with exactly `floor(live_percentage * width * height / 100)` alive cells,
/// placed uniformly at random without replacement.
pub fn random(width: usize, height: usize, live_percentage: f64) -> Result<Grid> {
    random_with_rng(&mut rand::rng(), width, height, live_percentage)
}

pub fn random_with_rng<R>(
    rng: &mut R,
    width: usize,
    height: usize,
    live_percentage: f64,
) -> Result<Grid>
where
    R: Rng,
{
    let mut grid = Grid::new(width, height)?;
    let alive_cells = live_count(grid.cells().len(), live_percentage)?;

    let mut available_positions = (0..height)
        .cartesian_product(0..width)
        .map(|(row, col)| Position::new(row as isize, col as isize))
        .collect_vec();

    for _ in 0..alive_cells {
        let chosen_index = rng.random_range(0..available_positions.len());
        let chosen_position = available_positions.swap_remove(chosen_index);

        *grid.cell_mut(chosen_position) = CellState::Alive;
    }

    log::debug!("random {width}x{height} grid at {live_percentage}%: {alive_cells} alive cells");

    Ok(grid)
}

fn live_count(total_cells: usize, live_percentage: f64) -> Result<usize> {
    if !live_percentage.is_finite() || live_percentage < 0.0 {
        return Err(AutomataError::InvalidPercentage(live_percentage));
    }

    let requested = (live_percentage * total_cells as f64 / 100.0).floor() as usize;
    if requested > total_cells {
        return Err(AutomataError::TooManyLiveCells {
            requested,
            available: total_cells,
        });
    }

    Ok(requested)
}

/// The pattern's own cells as a grid. The result takes the pattern's dimensions,
/// whatever size the grid it replaces had.
pub fn from_pattern(pattern: &Pattern) -> Grid {
    pattern.grid().clone()
}
