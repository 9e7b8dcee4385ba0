//! Per-cell value type.

use crate::{Corner, Digit, DigitSet};

/// The contents of a single grid cell.
///
/// A cell holds a center digit set, four independent pencil-mark sets (one per
/// [`Corner`]), and a lock flag. `Cell` is a plain `Copy` value: every
/// operation returns a new cell and leaves the receiver untouched, so a cell
/// stored in a history snapshot can never be changed through another copy.
///
/// Locking is one-way. No operation turns `locked` back to `false`; the lock
/// policy for center edits is enforced by the editor, not here, so these
/// primitives stay total.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Cell, Corner, Digit};
///
/// let cell = Cell::new()
///     .with_center_digit(Digit::D5)
///     .with_pencil_digit(Corner::TopLeft, Digit::D7);
///
/// assert!(cell.center().contains(Digit::D5));
/// assert!(cell.pencil(Corner::TopLeft).contains(Digit::D7));
/// assert!(cell.pencil(Corner::TopRight).is_empty());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    center: DigitSet,
    pencil: [DigitSet; 4],
    locked: bool,
}

impl Cell {
    /// Creates an empty, unlocked cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            center: DigitSet::EMPTY,
            pencil: [DigitSet::EMPTY; 4],
            locked: false,
        }
    }

    /// Returns the center digit set.
    #[must_use]
    pub const fn center(&self) -> DigitSet {
        self.center
    }

    /// Returns the pencil-mark set for `corner`.
    #[must_use]
    pub const fn pencil(&self, corner: Corner) -> DigitSet {
        self.pencil[corner.index()]
    }

    /// Returns `true` once the cell has been locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns `true` if the center and all pencil sets are empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.center.is_empty() && self.pencil.iter().all(|set| set.is_empty())
    }

    /// Returns the cell with `digit` added to the center set.
    #[must_use]
    pub const fn with_center_digit(self, digit: Digit) -> Self {
        Self {
            center: self.center.with(digit),
            ..self
        }
    }

    /// Returns the cell with an empty center set. Pencil sets are kept.
    #[must_use]
    pub const fn with_center_cleared(self) -> Self {
        Self {
            center: DigitSet::EMPTY,
            ..self
        }
    }

    /// Returns the cell with `digit` added to the pencil set of `corner`.
    #[must_use]
    pub const fn with_pencil_digit(self, corner: Corner, digit: Digit) -> Self {
        let mut pencil = self.pencil;
        pencil[corner.index()] = pencil[corner.index()].with(digit);
        Self { pencil, ..self }
    }

    /// Returns the cell with the pencil set of `corner` emptied.
    #[must_use]
    pub const fn with_pencil_cleared(self, corner: Corner) -> Self {
        let mut pencil = self.pencil;
        pencil[corner.index()] = DigitSet::EMPTY;
        Self { pencil, ..self }
    }

    /// Returns the cell with the lock flag set.
    #[must_use]
    pub const fn locked(self) -> Self {
        Self {
            locked: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn digit() -> impl Strategy<Value = Digit> {
        (1_u8..=9).prop_map(Digit::from_value)
    }

    fn corner() -> impl Strategy<Value = Corner> {
        (0_u8..4).prop_map(|i| Corner::ALL[usize::from(i)])
    }

    fn cell() -> impl Strategy<Value = Cell> {
        (
            any::<u16>(),
            proptest::array::uniform4(any::<u16>()),
            any::<bool>(),
        )
            .prop_map(|(center, pencil, locked)| {
                let set = |bits: u16| DigitSet::try_from_bits(bits & 0x1ff).unwrap_or_default();
                Cell {
                    center: set(center),
                    pencil: pencil.map(set),
                    locked,
                }
            })
    }

    #[test]
    fn test_new_cell_is_blank_and_unlocked() {
        let cell = Cell::new();
        assert!(cell.is_blank());
        assert!(!cell.is_locked());
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn test_center_operations_leave_pencil_alone() {
        let cell = Cell::new()
            .with_pencil_digit(Corner::BottomRight, Digit::D3)
            .with_center_digit(Digit::D8)
            .with_center_digit(Digit::D1);
        assert_eq!(cell.center().to_string(), "18");
        assert_eq!(cell.pencil(Corner::BottomRight).to_string(), "3");

        let cleared = cell.with_center_cleared();
        assert!(cleared.center().is_empty());
        assert_eq!(cleared.pencil(Corner::BottomRight).to_string(), "3");
    }

    #[test]
    fn test_pencil_corners_are_independent() {
        let cell = Cell::new()
            .with_center_digit(Digit::D4)
            .with_pencil_digit(Corner::TopLeft, Digit::D1)
            .with_pencil_digit(Corner::TopRight, Digit::D2)
            .with_pencil_digit(Corner::BottomLeft, Digit::D3);

        let cleared = cell.with_pencil_cleared(Corner::TopRight);
        assert!(cleared.pencil(Corner::TopRight).is_empty());
        assert_eq!(cleared.pencil(Corner::TopLeft).to_string(), "1");
        assert_eq!(cleared.pencil(Corner::BottomLeft).to_string(), "3");
        assert!(cleared.pencil(Corner::BottomRight).is_empty());
        assert_eq!(cleared.center().to_string(), "4");
    }

    #[test]
    fn test_operations_do_not_touch_receiver() {
        let original = Cell::new().with_center_digit(Digit::D2);
        let _ = original.with_center_digit(Digit::D9).locked();
        assert_eq!(original.center().to_string(), "2");
        assert!(!original.is_locked());
    }

    #[test]
    fn test_lock_is_idempotent() {
        let cell = Cell::new().with_center_digit(Digit::D6).locked();
        assert!(cell.is_locked());
        assert_eq!(cell.locked(), cell);
    }

    proptest! {
        #[test]
        fn test_center_insert_is_idempotent(c in cell(), d in digit()) {
            prop_assert_eq!(c.with_center_digit(d).with_center_digit(d), c.with_center_digit(d));
        }

        #[test]
        fn test_pencil_insert_is_idempotent(c in cell(), corner in corner(), d in digit()) {
            prop_assert_eq!(
                c.with_pencil_digit(corner, d).with_pencil_digit(corner, d),
                c.with_pencil_digit(corner, d)
            );
        }

        #[test]
        fn test_lock_never_clears(c in cell(), d in digit(), corner in corner()) {
            let locked = c.locked();
            prop_assert!(locked.with_center_digit(d).is_locked());
            prop_assert!(locked.with_center_cleared().is_locked());
            prop_assert!(locked.with_pencil_digit(corner, d).is_locked());
            prop_assert!(locked.with_pencil_cleared(corner).is_locked());
        }
    }
}
