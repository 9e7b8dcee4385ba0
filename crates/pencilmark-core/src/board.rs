//! The 9×9 grid of cells.

use std::ops::Index;

use crate::{Cell, Position};

/// A 9×9 grid of [`Cell`]s in row-major order.
///
/// `Board` owns its cells inline, so `clone()` is always a deep copy and two
/// boards never share storage. Every mutating operation takes `&self` and
/// returns a fresh board; the receiver stays valid and unchanged, which is what
/// allows history snapshots to be kept as plain values.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Board, Digit, Position};
///
/// let empty = Board::new();
/// let pos = Position::new(0, 0);
/// let edited = empty.with_cell(pos, empty[pos].with_center_digit(Digit::D5));
///
/// assert!(empty[pos].center().is_empty());
/// assert!(edited[pos].center().contains(Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board of empty, unlocked cells.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::new(); 81],
        }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }

    /// Returns an iterator over all cells with their positions, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        Position::ALL.into_iter().zip(&self.cells)
    }

    /// Returns a copy of this board with the cell at `pos` replaced.
    #[must_use]
    pub fn with_cell(&self, pos: Position, cell: Cell) -> Self {
        let mut cells = self.cells;
        cells[pos.index()] = cell;
        Self { cells }
    }

    /// Returns a copy of this board with `f` applied to the cell at `pos`.
    #[must_use]
    pub fn with_cell_updated(&self, pos: Position, f: impl FnOnce(Cell) -> Cell) -> Self {
        self.with_cell(pos, f(self.cells[pos.index()]))
    }

    /// Returns a copy of this board where every cell with a non-empty center
    /// set is locked. Cells with an empty center are left as they are.
    #[must_use]
    pub fn with_nonempty_centers_locked(&self) -> Self {
        let cells = self.cells.map(|cell| {
            if cell.center().is_empty() {
                cell
            } else {
                cell.locked()
            }
        });
        Self { cells }
    }

    /// Returns the number of locked cells.
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_locked()).count()
    }

    /// Returns `true` if no cell has any digit or lock.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::new()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        self.cell(pos)
    }
}
