/// A logical grid coordinate. Either component may be negative or lie past the grid edge,
/// grids resolve it toroidally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Wraps on overflow. Grids resolve the result modulo their own size, so offset
    /// canonical positions when the exact toroidal neighbor matters.
    pub fn offset(self, d_row: isize, d_col: isize) -> Self {
        Self {
            row: self.row.wrapping_add(d_row),
            col: self.col.wrapping_add(d_col),
        }
    }
}

impl From<(isize, isize)> for Position {
    fn from((row, col): (isize, isize)) -> Self {
        Self { row, col }
    }
}
