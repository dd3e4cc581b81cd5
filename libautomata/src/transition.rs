use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{
    grid::{CellState, Grid},
    neighbors::count_live_neighbors,
    rule::RuleSet,
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum CellModel {
    /// Dead/alive. Cells that fail the survive test die immediately.
    #[default]
    #[strum(to_string = "two_state", serialize = "two")]
    TwoState,

    /// Dead/alive/dying. Cells that fail the survive test spend one generation dying.
    #[strum(to_string = "three_state", serialize = "three")]
    ThreeState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub model: CellModel,

    /// Count an alive cell as one of its own neighbors.
    pub totalistic: bool,
}

/// Computes the next generation into a fresh grid of the same size.
///
/// Every cell only reads `grid`, so the cells are evaluated in parallel.
pub fn next_generation(grid: &Grid, rule: &RuleSet, config: TransitionConfig) -> Grid {
    let width = grid.width();

    let next_cells = (0..grid.cells().len())
        .into_par_iter()
        .map(|index| {
            let row = (index / width) as isize;
            let col = (index % width) as isize;

            let current = grid.get(row, col);
            let count = effective_count(grid, row, col, config.totalistic);

            next_cell_state(current, count, rule, config.model)
        })
        .collect::<Vec<_>>();

    // SAFETY: Same dimensions and cell count as an already valid grid.
    Grid::with_cells(grid.width(), grid.height(), next_cells).unwrap()
}

/// The neighbor count the rule is tested against.
pub fn effective_count(grid: &Grid, row: isize, col: isize, totalistic: bool) -> u8 {
    let neighbors = count_live_neighbors(grid, row, col);

    if totalistic && grid.get(row, col) == CellState::Alive {
        neighbors + 1
    } else {
        neighbors
    }
}

pub fn next_cell_state(
    current: CellState,
    count: u8,
    rule: &RuleSet,
    model: CellModel,
) -> CellState {
    match (current, model) {
        (CellState::Alive, _) if rule.survives(count) => CellState::Alive,
        (CellState::Alive, CellModel::TwoState) => CellState::Dead,
        (CellState::Alive, CellModel::ThreeState) => CellState::Dying,

        (CellState::Dying, CellModel::ThreeState) => CellState::Dead,

        // Two-state treats a stray dying cell as dead.
        (CellState::Dead | CellState::Dying, _) if rule.is_born(count) => CellState::Alive,
        (CellState::Dead | CellState::Dying, _) => CellState::Dead,
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    const TWO: TransitionConfig = TransitionConfig {
        model: CellModel::TwoState,
        totalistic: false,
    };

    const THREE: TransitionConfig = TransitionConfig {
        model: CellModel::ThreeState,
        totalistic: false,
    };

    fn grid_from(art: &[&str]) -> Grid {
        let width = art[0].len();
        let cells = art
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| match c {
                'O' => CellState::Alive,
                '~' => CellState::Dying,
                _ => CellState::Dead,
            })
            .collect_vec();
        Grid::with_cells(width, art.len(), cells).unwrap()
    }

    #[test]
    fn isolated_cell_dies() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, CellState::Alive);

        let next = next_generation(&grid, &RuleSet::default(), TWO);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn full_block_golden_fixture() {
        let grid = grid_from(&[
            ".......", //
            ".......", //
            "..OOO..", //
            "..OOO..", //
            "..OOO..", //
            ".......", //
            ".......", //
        ]);

        // Corners keep 3 neighbors, edge midpoints have 5, the center 8.
        // The outer midpoints see exactly 3 and are born.
        let expected = grid_from(&[
            ".......", //
            "...O...", //
            "..O.O..", //
            ".O...O.", //
            "..O.O..", //
            "...O...", //
            ".......", //
        ]);

        assert_eq!(next_generation(&grid, &RuleSet::default(), TWO), expected);
    }

    #[test]
    fn blinker_oscillates_across_the_seam() {
        let grid = grid_from(&[
            "O....", //
            "O....", //
            ".....", //
            ".....", //
            "O....", //
        ]);

        let rule = RuleSet::default();
        let once = next_generation(&grid, &rule, TWO);
        assert_eq!(once.population(), 3);
        assert_eq!(once.get(0, -1), CellState::Alive);
        assert_eq!(once.get(0, 0), CellState::Alive);
        assert_eq!(once.get(0, 1), CellState::Alive);

        assert_eq!(next_generation(&once, &rule, TWO), grid);
    }

    #[test]
    fn input_is_not_mutated() {
        let grid = grid_from(&["OOO", "...", "..."]);
        let copy = grid.clone();
        let _ = next_generation(&grid, &RuleSet::default(), THREE);
        assert_eq!(grid, copy);
    }

    #[test]
    fn two_state_never_produces_dying() {
        let grid = grid_from(&["O~O.", "~OO~", ".O~O", "O..O"]);
        let next = next_generation(&grid, &RuleSet::new([1, 2, 3], [0, 5]), TWO);
        assert_eq!(next.count(CellState::Dying), 0);
    }

    #[test]
    fn two_state_treats_dying_as_dead() {
        // The dying center has three alive neighbors and gets born like a dead cell would.
        let grid = grid_from(&[".....", ".OO..", "..~..", "..O..", "....."]);
        let next = next_generation(&grid, &RuleSet::default(), TWO);
        assert_eq!(next.get(2, 2), CellState::Alive);
    }

    #[test]
    fn dying_always_becomes_dead() {
        let grid = grid_from(&["OOO", "O~O", "OOO"]);

        for born in 0..=9 {
            let rule = RuleSet::new([born], 0..=9);
            let next = next_generation(&grid, &rule, THREE);
            assert_eq!(next.get(1, 1), CellState::Dead, "born on {born}");
        }
    }

    #[test]
    fn failing_survival_starts_dying() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, CellState::Alive);

        let once = next_generation(&grid, &RuleSet::default(), THREE);
        assert_eq!(once.get(2, 2), CellState::Dying);

        let twice = next_generation(&once, &RuleSet::default(), THREE);
        assert_eq!(twice.get(2, 2), CellState::Dead);
    }

    #[test]
    fn dying_cell_is_decided_from_the_current_generation() {
        // An alive cell next to a dying one: after one step the alive cell is dying
        // and the dying cell dead. Neither outcome may leak into the other.
        let grid = grid_from(&[".....", ".....", ".O~..", ".....", "....."]);
        let next = next_generation(&grid, &RuleSet::default(), THREE);

        assert_eq!(next.get(2, 1), CellState::Dying);
        assert_eq!(next.get(2, 2), CellState::Dead);
        assert_eq!(next.count(CellState::Alive), 0);
    }

    #[test]
    fn dead_grid_stays_dead_without_zero_birth() {
        let grid = Grid::new(6, 6).unwrap();
        let next = next_generation(&grid, &RuleSet::new([1, 2, 3, 8], [0]), TWO);
        assert_eq!(next.population(), 0);

        let next = next_generation(&grid, &RuleSet::new([0], []), TWO);
        assert_eq!(next.population(), 36);
    }

    #[test]
    fn full_grid_depends_on_surviving_eight() {
        let full = Grid::with_cells(4, 4, vec![CellState::Alive; 16]).unwrap();

        let survives = next_generation(&full, &RuleSet::new([], [8]), TWO);
        assert_eq!(survives.population(), 16);

        let dies = next_generation(&full, &RuleSet::new([8], [2, 3]), TWO);
        assert_eq!(dies.population(), 0);

        let totalistic = TransitionConfig {
            totalistic: true,
            ..TWO
        };
        assert_eq!(
            next_generation(&full, &RuleSet::new([], [8]), totalistic).population(),
            0
        );
        assert_eq!(
            next_generation(&full, &RuleSet::new([], [9]), totalistic).population(),
            16
        );
    }

    #[test]
    fn totalistic_shifts_only_alive_cells() {
        let grid = grid_from(&[".....", ".O...", "..O..", ".....", "....."]);

        assert_eq!(effective_count(&grid, 2, 2, false), 1);
        assert_eq!(effective_count(&grid, 2, 2, true), 2);
        assert_eq!(effective_count(&grid, 1, 2, false), 2);
        assert_eq!(effective_count(&grid, 1, 2, true), 2);
    }

    #[test]
    fn totalistic_flips_boundary_outcome() {
        // (2, 2) has exactly two alive neighbors.
        let grid = grid_from(&[".....", ".O...", "..O..", "...O.", "....."]);
        let rule = RuleSet::new([], [3]);

        let plain = next_generation(&grid, &rule, TWO);
        assert_eq!(plain.get(2, 2), CellState::Dead);

        let totalistic = TransitionConfig {
            totalistic: true,
            ..TWO
        };
        let shifted = next_generation(&grid, &rule, totalistic);
        assert_eq!(shifted.get(2, 2), CellState::Alive);

        // The ends have one neighbor either way and die in both modes.
        assert_eq!(shifted.get(1, 1), CellState::Dead);
        assert_eq!(shifted.get(3, 3), CellState::Dead);
    }

    #[test]
    fn totalistic_three_state_keeps_boundary_cell_alive() {
        // (2, 2) has two alive neighbors, three with itself counted.
        let grid = grid_from(&[".....", ".O...", "..O..", "...O.", "....."]);
        let rule = RuleSet::new([], [3]);

        let plain = next_generation(&grid, &rule, THREE);
        assert_eq!(plain.get(2, 2), CellState::Dying);

        let totalistic = TransitionConfig {
            totalistic: true,
            ..THREE
        };
        let shifted = next_generation(&grid, &rule, totalistic);
        assert_eq!(shifted.get(2, 2), CellState::Alive);
        assert_eq!(shifted.get(1, 1), CellState::Dying);
        assert_eq!(shifted.get(3, 3), CellState::Dying);

        // A dying cell never counts itself and still dies.
        let dying = grid_from(&[".....", ".O...", "..~..", "...O.", "....."]);
        let next = next_generation(&dying, &RuleSet::new([2], [3]), totalistic);
        assert_eq!(next.get(2, 2), CellState::Dead);
        assert_eq!(effective_count(&dying, 2, 2, true), 2);
    }

    #[test]
    fn out_of_range_rules_never_match() {
        let grid = grid_from(&["O..", ".O.", "..O"]);
        let next = next_generation(&grid, &RuleSet::new([10, 200], [9, 255]), TWO);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn model_parses_from_short_names() {
        assert_eq!("three".parse::<CellModel>(), Ok(CellModel::ThreeState));
        assert_eq!("Two_State".parse::<CellModel>(), Ok(CellModel::TwoState));
        assert_eq!(CellModel::ThreeState.to_string(), "three_state");
    }
}
