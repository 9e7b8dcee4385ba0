//! A set of digits 1-9 stored as a 9-bit mask.
//!
//! Storage is unordered; iteration always yields digits in ascending order,
//! which is also the order used for rendering.
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::{Digit, DigitSet};
//!
//! let set = DigitSet::EMPTY.with(Digit::D7).with(Digit::D2).with(Digit::D7);
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.iter().collect::<Vec<_>>(), [Digit::D2, Digit::D7]);
//! assert_eq!(set.to_string(), "27");
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::Digit;

const FULL_BITS: u16 = 0x1ff;

/// A set of digits (1-9).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set from its raw bit representation (bit 0 is digit 1).
    ///
    /// Returns `None` if any bit above bit 8 is set.
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !FULL_BITS == 0 {
            Some(Self { bits })
        } else {
            None
        }
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if `digit` is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & digit.bit() != 0
    }

    /// Returns a copy of the set with `digit` inserted.
    ///
    /// Inserting a digit that is already present returns an equal set.
    #[must_use]
    pub const fn with(self, digit: Digit) -> Self {
        Self {
            bits: self.bits | digit.bit(),
        }
    }

    /// Inserts `digit`, returning `true` if it was not already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let added = !self.contains(digit);
        self.bits |= digit.bit();
        added
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub fn iter(self) -> DigitSetIter {
        DigitSetIter { bits: self.bits }
    }
}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Digit> for DigitSet {
    fn extend<I: IntoIterator<Item = Digit>>(&mut self, iter: I) {
        for digit in iter {
            self.insert(digit);
        }
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct DigitSetIter {
    bits: u16,
}

impl Iterator for DigitSetIter {
    type Item = Digit;

    #[expect(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(index + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for DigitSetIter {}
impl FusedIterator for DigitSetIter {}
