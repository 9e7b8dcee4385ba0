//! Board coordinates.

use std::fmt::{self, Display};

/// Error returned by [`Position::try_new`] for coordinates outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("position ({row}, {col}) is outside the 9x9 board")]
pub struct PositionError {
    /// The rejected row.
    pub row: u8,
    /// The rejected column.
    pub col: u8,
}

/// A cell coordinate `(row, col)` with both components in 0-8.
///
/// Rows grow downwards and columns grow to the right, so `(0, 0)` is the
/// top-left cell and `(8, 8)` the bottom-right one.
///
/// # Examples
///
/// ```
/// use pencilmark_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.index(), 4 * 9 + 7);
/// assert!(Position::try_new(9, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Largest valid row or column value.
    pub const MAX: u8 = 8;

    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than 8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row <= Self::MAX && col <= Self::MAX);
        Self { row, col }
    }

    /// Creates a position, rejecting out-of-range coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] if `row` or `col` is greater than 8.
    pub const fn try_new(row: u8, col: u8) -> Result<Self, PositionError> {
        if row <= Self::MAX && col <= Self::MAX {
            Ok(Self { row, col })
        } else {
            Err(PositionError { row, col })
        }
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the position one row up, or `None` at the top edge.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.row > 0 {
            Some(Self::new(self.row - 1, self.col))
        } else {
            None
        }
    }

    /// Returns the position one row down, or `None` at the bottom edge.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.row < Self::MAX {
            Some(Self::new(self.row + 1, self.col))
        } else {
            None
        }
    }

    /// Returns the position one column left, or `None` at the left edge.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.col > 0 {
            Some(Self::new(self.row, self.col - 1))
        } else {
            None
        }
    }

    /// Returns the position one column right, or `None` at the right edge.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.col < Self::MAX {
            Some(Self::new(self.row, self.col + 1))
        } else {
            None
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
