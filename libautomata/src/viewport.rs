use crate::error::{AutomataError, Result};

pub const BASE_VIEWPORT_CELLS: usize = 50;
pub const MIN_VIEWPORT_CELLS: usize = 5;
pub const MIN_ZOOM: usize = 1;
pub const MAX_ZOOM: usize = 5;

/// A rectangular window onto a grid, end bounds exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl Viewport {
    /// The window around the grid center shown at `zoom`, clamped to the grid bounds.
    /// Higher zoom shows fewer cells, never less than [`MIN_VIEWPORT_CELLS`] across.
    pub fn centered(width: usize, height: usize, zoom: usize) -> Result<Self> {
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            return Err(AutomataError::InvalidZoom(zoom));
        }

        let size = (BASE_VIEWPORT_CELLS / zoom).max(MIN_VIEWPORT_CELLS);
        let half = size / 2;

        let (center_row, center_col) = (height / 2, width / 2);

        Ok(Self {
            row_start: center_row.saturating_sub(half),
            row_end: (center_row + half).min(height),
            col_start: center_col.saturating_sub(half),
            col_end: (center_col + half).min(width),
        })
    }

    pub fn width(&self) -> usize {
        self.col_end - self.col_start
    }

    pub fn height(&self) -> usize {
        self.row_end - self.row_start
    }
}
