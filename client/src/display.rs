use colored::Colorize;
use libautomata::{
    grid::{CellState, Grid},
    viewport::Viewport,
    Simulation,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

type Rgb = (u8, u8, u8);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumIter,
    EnumString,
    Deserialize,
    Serialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Purple,
    Orange,
}

impl Palette {
    /// The (alive, dying) colours.
    pub fn colours(&self) -> (Rgb, Rgb) {
        match self {
            Palette::Black => ((0, 0, 0), (100, 100, 100)),
            Palette::Red => ((255, 0, 0), (255, 120, 120)),
            Palette::Green => ((0, 180, 0), (150, 255, 150)),
            Palette::Blue => ((0, 0, 255), (150, 150, 255)),
            Palette::Purple => ((128, 0, 128), (200, 150, 200)),
            Palette::Orange => ((255, 140, 0), (255, 200, 120)),
        }
    }
}

const ALIVE_GLYPH: &str = "██";
const DYING_GLYPH: &str = "▓▓";
const DEAD_GLYPH: &str = "··";

/// Draws the cells of `grid` inside `viewport`, two characters per cell.
pub fn render_view(grid: &Grid, viewport: &Viewport, palette: Palette) -> String {
    let (alive, dying) = palette.colours();

    let view = grid.sub_grid(viewport);
    let mut out = String::with_capacity(view.cells().len() * 2 + view.height());

    for row in view.rows() {
        for cell in row {
            let glyph = match cell {
                CellState::Alive => ALIVE_GLYPH.truecolor(alive.0, alive.1, alive.2),
                CellState::Dying => DYING_GLYPH.truecolor(dying.0, dying.1, dying.2),
                CellState::Dead => DEAD_GLYPH.dimmed(),
            };
            out.push_str(&glyph.to_string());
        }
        out.push('\n');
    }

    out
}

/// One line summary, e.g. `t = 12 | B3/S23 Conway's Life (B3/S23) | two_state | 341 alive, 0 dying | 100x100`.
pub fn status_line(simulation: &Simulation) -> String {
    let rules = &simulation.rules;
    let transition = simulation.transition;

    format!(
        "t = {} | {} {} | {}{} | {} alive, {} dying | {}x{}",
        simulation.generation(),
        rules.active(),
        rules.preset(),
        transition.model,
        if transition.totalistic {
            " totalistic"
        } else {
            ""
        },
        simulation.grid.population(),
        simulation.grid.count(CellState::Dying),
        simulation.grid.width(),
        simulation.grid.height(),
    )
}
