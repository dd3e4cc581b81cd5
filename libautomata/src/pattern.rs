use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

use crate::{
    error::{AutomataError, Result},
    grid::{CellState, Grid},
};

/// A named, immutable block of cells used to seed a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    grid: Grid,
}

impl Pattern {
    /// Builds a pattern from rows of raw cell values (0 dead, 1 alive, 2 dying).
    pub fn from_rows<S>(name: S, rows: Vec<Vec<u8>>) -> Result<Self>
    where
        S: Into<String>,
    {
        let name = name.into();

        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(AutomataError::EmptyPattern(name));
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != width)
        {
            return Err(AutomataError::RaggedPattern {
                name,
                row,
                expected: width,
                found,
            });
        }

        let height = rows.len();
        let cells = rows
            .into_iter()
            .flatten()
            .map(CellState::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name,
            grid: Grid::with_cells(width, height, cells)?,
        })
    }

    /// Parses text art, one line per row: `.` dead, `O`/`#`/`*` alive, `~` dying.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn parse_art<S>(name: S, art: &str) -> Result<Self>
    where
        S: Into<String>,
    {
        let rows = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(art_cell).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(name, rows)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Surrounds the pattern with `margin` dead cells on every side.
    fn padded(self, margin: usize) -> Self {
        let width = self.width() + margin * 2;
        let height = self.height() + margin * 2;

        let cells = (0..height)
            .cartesian_product(0..width)
            .map(|(row, col)| {
                let inside = (margin..margin + self.height()).contains(&row)
                    && (margin..margin + self.width()).contains(&col);

                if inside {
                    self.grid
                        .get((row - margin) as isize, (col - margin) as isize)
                } else {
                    CellState::Dead
                }
            })
            .collect_vec();

        Self {
            // SAFETY: The cell vector is built from the very dimensions it's checked against.
            grid: Grid::with_cells(width, height, cells).unwrap(),
            name: self.name,
        }
    }
}

fn art_cell(c: char) -> Result<u8> {
    match c {
        '.' => Ok(0),
        'O' | '#' | '*' => Ok(1),
        '~' => Ok(2),
        other => Err(AutomataError::InvalidPatternChar(other)),
    }
}

/// Something that can enumerate and hand out named patterns, such as a directory of pattern files.
pub trait PatternSource {
    fn list_patterns(&self) -> BTreeSet<String>;

    fn load_pattern(&self, name: &str) -> Result<Pattern>;
}

/// A handful of classic Life patterns, each with a dead margin large enough
/// for them to behave on their own torus.
#[derive(Debug, Clone)]
pub struct BuiltinPatterns {
    arts: BTreeMap<&'static str, (&'static str, usize)>,
}

impl Default for BuiltinPatterns {
    fn default() -> Self {
        let arts = [
            ("block", (BLOCK, 1)),
            ("blinker", (BLINKER, 1)),
            ("toad", (TOAD, 1)),
            ("beacon", (BEACON, 1)),
            ("glider", (GLIDER, 3)),
            ("lightweight_spaceship", (LIGHTWEIGHT_SPACESHIP, 4)),
            ("pentadecathlon", (PENTADECATHLON, 4)),
            ("gosper_glider_gun", (GOSPER_GLIDER_GUN, 6)),
        ];

        Self {
            arts: arts.into_iter().collect(),
        }
    }
}

impl PatternSource for BuiltinPatterns {
    fn list_patterns(&self) -> BTreeSet<String> {
        self.arts.keys().map(|name| name.to_string()).collect()
    }

    fn load_pattern(&self, name: &str) -> Result<Pattern> {
        let (art, margin) = self
            .arts
            .get(name)
            .ok_or_else(|| AutomataError::UnknownPattern(name.to_owned()))?;

        Ok(Pattern::parse_art(name, art)?.padded(*margin))
    }
}

const BLOCK: &str = "
    OO
    OO
";

const BLINKER: &str = "
    .O.
    .O.
    .O.
";

const TOAD: &str = "
    .OOO
    OOO.
";

const BEACON: &str = "
    OO..
    OO..
    ..OO
    ..OO
";

const GLIDER: &str = "
    .O.
    ..O
    OOO
";

const LIGHTWEIGHT_SPACESHIP: &str = "
    .O..O
    O....
    O...O
    OOOO.
";

const PENTADECATHLON: &str = "
    ..O....O..
    OO.OOOO.OO
    ..O....O..
";

const GOSPER_GLIDER_GUN: &str = "
    ........................O...........
    ......................O.O...........
    ............OO......OO............OO
    ...........O...O....OO............OO
    OO........O.....O...OO..............
    OO........O...O.OO....O.O...........
    ..........O.....O.......O...........
    ...........O...O....................
    ............OO......................
";
