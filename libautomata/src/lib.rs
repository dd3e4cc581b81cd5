use error::Result;
use grid::Grid;
use pattern::PatternSource;
use preset::RuleSelection;
use transition::TransitionConfig;

pub mod error;
pub mod factory;
pub mod grid;
pub mod neighbors;
pub mod pattern;
pub mod pos;
pub mod preset;
pub mod rule;
pub mod transition;
pub mod viewport;

/// A running automaton: the current grid plus everything needed to advance it.
/// Owned by whoever drives the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    pub grid: Grid,
    pub rules: RuleSelection,
    pub transition: TransitionConfig,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid, rules: RuleSelection, transition: TransitionConfig) -> Self {
        Self {
            grid,
            rules,
            transition,
            generation: 0,
        }
    }

    /// Steps since the current grid was adopted.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick(&mut self) {
        self.grid = transition::next_generation(&self.grid, self.rules.active(), self.transition);
        self.generation += 1;

        log::debug!(
            "generation {}: {} alive",
            self.generation,
            self.grid.population()
        );
    }

    pub fn tick_n(&mut self, times: usize) {
        for _ in 0..times {
            self.tick();
        }
    }

    /// Adopts a new grid and restarts the generation count.
    pub fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
    }

    /// Replaces the grid with a random one of the same size.
    pub fn randomize(&mut self, live_percentage: f64) -> Result<()> {
        let grid = factory::random(self.grid.width(), self.grid.height(), live_percentage)?;
        self.reset(grid);
        Ok(())
    }

    /// Loads the named pattern and adopts it, size included.
    /// If loading fails the current grid is left alone.
    pub fn load_pattern<S>(&mut self, source: &S, name: &str) -> Result<()>
    where
        S: PatternSource + ?Sized,
    {
        let pattern = source.load_pattern(name)?;

        log::debug!(
            "adopting pattern {:?} ({}x{})",
            pattern.name(),
            pattern.width(),
            pattern.height()
        );

        self.reset(factory::from_pattern(&pattern));
        Ok(())
    }
}
