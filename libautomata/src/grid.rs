use crate::{
    error::{AutomataError, Result},
    pos::Position,
    viewport::Viewport,
};

/// A fixed-size toroidal grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let cell_count = Self::cell_count(width, height)?;

        Ok(Self {
            width,
            height,
            cells: vec![CellState::default(); cell_count],
        })
    }

    pub fn with_cells(width: usize, height: usize, cells: Vec<CellState>) -> Result<Self> {
        let cell_count = Self::cell_count(width, height)?;

        if cells.len() != cell_count {
            return Err(AutomataError::CellCountMismatch {
                expected: cell_count,
                found: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Both sides at least 1 and the product addressable as `isize`, which every
    /// signed coordinate is reduced against.
    fn cell_count(width: usize, height: usize) -> Result<usize> {
        width
            .checked_mul(height)
            .filter(|&cells| cells > 0 && cells <= isize::MAX as usize)
            .ok_or(AutomataError::InvalidDimensions { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width)
    }

    pub fn get(&self, row: isize, col: isize) -> CellState {
        self.cell((row, col))
    }

    pub fn set(&mut self, row: isize, col: isize, state: CellState) {
        *self.cell_mut((row, col)) = state;
    }

    pub fn cell<P>(&self, pos: P) -> CellState
    where
        P: Into<Position>,
    {
        self.cells[self.pos_to_index(pos)]
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> &mut CellState
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos);
        &mut self.cells[index]
    }

    /// Yields every cell together with its canonical (in-bounds) position.
    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, CellState)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), *cell))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.count(CellState::Alive)
    }

    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Returns a grid of the new size keeping the overlapping top-left region.
    pub fn resized(&self, width: usize, height: usize) -> Result<Self> {
        let mut resized = Self::new(width, height)?;

        for row in 0..height.min(self.height) {
            for col in 0..width.min(self.width) {
                resized.cells[row * width + col] = self.cells[row * self.width + col];
            }
        }

        Ok(resized)
    }

    /// Copies the cells covered by the viewport into a grid of their own.
    /// An empty viewport yields a 1x1 dead grid.
    pub fn sub_grid(&self, viewport: &Viewport) -> Self {
        let row_end = viewport.row_end.min(self.height);
        let col_end = viewport.col_end.min(self.width);

        let width = col_end.saturating_sub(viewport.col_start).max(1);
        let height = row_end.saturating_sub(viewport.row_start).max(1);

        let mut sub = Self {
            width,
            height,
            cells: vec![CellState::Dead; width * height],
        };

        for row in viewport.row_start..row_end {
            for col in viewport.col_start..col_end {
                let sub_index = (row - viewport.row_start) * width + (col - viewport.col_start);
                sub.cells[sub_index] = self.cells[row * self.width + col];
            }
        }

        sub
    }

    /// The in-bounds position a wrapped coordinate resolves to.
    pub fn canonical<P>(&self, pos: P) -> Position
    where
        P: Into<Position>,
    {
        self.index_to_pos(self.pos_to_index(pos))
    }

    fn pos_to_index<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        let row = row.rem_euclid(self.height as isize) as usize;
        let col = col.rem_euclid(self.width as isize) as usize;

        col + row * self.width
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.width;
        let col = index % self.width;
        Position::new(row as isize, col as isize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,

    /// Only produced by the three-state model.
    Dying = 2,
}

impl TryFrom<u8> for CellState {
    type Error = AutomataError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            2 => Ok(CellState::Dying),
            other => Err(AutomataError::InvalidCellState(other)),
        }
    }
}

impl From<CellState> for u8 {
    fn from(value: CellState) -> Self {
        value as u8
    }
}
