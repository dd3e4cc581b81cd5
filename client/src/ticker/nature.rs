use crate::State;

use super::Ticker;

/// Advances the simulation by one generation per tick.
pub struct NatureTicker;

impl Ticker for NatureTicker {
    fn tick(&mut self, state: &mut State) {
        state.simulation.tick();
    }
}
