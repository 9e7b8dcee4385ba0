//! Pencil-mark corner identifiers.

use std::fmt::{self, Display};

/// Error returned when converting an out-of-range index into a [`Corner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid corner index: {index}")]
pub struct CornerError {
    /// The rejected index.
    pub index: u8,
}

/// One of the four pencil-mark slots of a cell.
///
/// The discriminant is the slot index used by [`Cell`](crate::Cell) storage:
/// top-left, top-right, bottom-left, bottom-right.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::IsVariant,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(u8)]
pub enum Corner {
    /// Top-left slot.
    #[default]
    TopLeft = 0,
    /// Top-right slot.
    TopRight = 1,
    /// Bottom-left slot.
    BottomLeft = 2,
    /// Bottom-right slot.
    BottomRight = 3,
}

impl Corner {
    /// All corners in slot order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Returns the storage slot index (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "Top Left",
            Self::TopRight => "Top Right",
            Self::BottomLeft => "Bottom Left",
            Self::BottomRight => "Bottom Right",
        }
    }

    /// Returns `true` for the two upper slots.
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// Returns `true` for the two left-hand slots.
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }
}

impl Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Corner {
    type Error = CornerError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(CornerError { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_slot_order() {
        for (i, corner) in Corner::ALL.into_iter().enumerate() {
            assert_eq!(corner.index(), i);
        }
    }

    #[test]
    fn test_try_from_index() {
        assert_eq!(Corner::try_from(0), Ok(Corner::TopLeft));
        assert_eq!(Corner::try_from(3), Ok(Corner::BottomRight));
        assert_eq!(Corner::try_from(4), Err(CornerError { index: 4 }));
    }

    #[test]
    fn test_geometry() {
        assert!(Corner::TopLeft.is_top() && Corner::TopLeft.is_left());
        assert!(Corner::TopRight.is_top() && !Corner::TopRight.is_left());
        assert!(!Corner::BottomLeft.is_top() && Corner::BottomLeft.is_left());
        assert!(!Corner::BottomRight.is_top() && !Corner::BottomRight.is_left());
        assert_eq!(Corner::BottomRight.to_string(), "Bottom Right");
    }
}
