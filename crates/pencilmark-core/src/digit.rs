//! Grid digit representation.

use std::fmt::{self, Display};

/// Error returned when a raw value cannot be turned into a [`Digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DigitError {
    /// The numeric value is outside 1-9.
    #[display("invalid digit value: {value}")]
    InvalidValue {
        /// The rejected value.
        value: u8,
    },
    /// The character is not one of `'1'..='9'`.
    #[display("invalid digit character: {ch:?}")]
    InvalidChar {
        /// The rejected character.
        ch: char,
    },
}

/// A grid digit in the range 1-9.
///
/// Invalid values are unrepresentable, so every cell operation taking a `Digit`
/// is total. Raw keyboard or text input is converted with [`Digit::try_from`]
/// at the input boundary.
///
/// # Examples
///
/// ```
/// use pencilmark_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// assert_eq!(Digit::try_from('7'), Ok(Digit::D7));
/// assert!(Digit::try_from('0').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9. Use [`Digit::try_from`] for
    /// values that come from outside the program.
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("Invalid digit value"),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the ASCII character for this digit.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.value()) as char
    }

    /// Returns a static string slice for this digit, handy for UI labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1",
            Self::D2 => "2",
            Self::D3 => "3",
            Self::D4 => "4",
            Self::D5 => "5",
            Self::D6 => "6",
            Self::D7 => "7",
            Self::D8 => "8",
            Self::D9 => "9",
        }
    }

    pub(crate) const fn bit(self) -> u16 {
        1 << (self.value() - 1)
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=9).contains(&value) {
            Ok(Self::from_value(value))
        } else {
            Err(DigitError::InvalidValue { value })
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = DigitError;

    #[expect(clippy::cast_possible_truncation)]
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '1'..='9' => Ok(Self::from_value(ch as u8 - b'0')),
            _ => Err(DigitError::InvalidChar { ch }),
        }
    }
}
