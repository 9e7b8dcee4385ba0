//! Entry mode: whether input targets the center set or a pencil corner.

use std::fmt::{self, Display};

/// The slot a digit or erase event is routed to.
///
/// The editor keeps one authoritative `EntryMode`. A single event may request
/// pencil entry explicitly (the keyboard modifier); everything else falls back
/// to the authoritative value through [`EntryMode::resolve`].
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
pub enum EntryMode {
    /// Edit the center digit set. Blocked on locked cells.
    #[default]
    Center,
    /// Edit the active corner's pencil set. Allowed on locked cells.
    Pencil,
}

impl EntryMode {
    /// Resolves the mode for one event.
    ///
    /// An explicit pencil request always wins; otherwise `self` applies.
    #[must_use]
    pub const fn resolve(self, pencil_requested: bool) -> Self {
        if pencil_requested {
            Self::Pencil
        } else {
            self
        }
    }

    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Center => Self::Pencil,
            Self::Pencil => Self::Center,
        }
    }

    pub(crate) fn toggle(&mut self) {
        *self = self.toggled();
    }
}

impl Display for EntryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Center => "Center",
            Self::Pencil => "Pencil",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::EntryMode;

    #[test]
    fn test_explicit_pencil_request_wins() {
        assert_eq!(EntryMode::Center.resolve(true), EntryMode::Pencil);
        assert_eq!(EntryMode::Pencil.resolve(true), EntryMode::Pencil);
    }

    #[test]
    fn test_falls_back_to_authoritative_mode() {
        assert_eq!(EntryMode::Center.resolve(false), EntryMode::Center);
        assert_eq!(EntryMode::Pencil.resolve(false), EntryMode::Pencil);
    }

    #[test]
    fn test_toggle_flips_mode() {
        let mut mode = EntryMode::default();
        assert!(mode.is_center());
        mode.toggle();
        assert!(mode.is_pencil());
        mode.toggle();
        assert!(mode.is_center());
    }
}
