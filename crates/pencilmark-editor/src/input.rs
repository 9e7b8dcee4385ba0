//! Raw input events and their translation into editor actions.

use pencilmark_core::{Corner, Digit, Position};

use crate::{EntryMode, MoveDirection};

/// A key press as delivered by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// A printable character.
    Char(char),
}

/// A single editor command.
///
/// Every input channel is reduced to one of these before it touches the
/// board, so keyboard, buttons and text entry share the same rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the cell at the position (a click).
    SelectCell(Position),
    /// Deselect the current cell.
    ClearSelection,
    /// Move the selection one step, clamped at the edge.
    MoveSelection(MoveDirection),
    /// Enter a digit into the selected cell.
    RequestDigit {
        /// The digit to add.
        digit: Digit,
        /// Forces pencil mode for this event.
        pencil: bool,
    },
    /// Erase the selected cell's slot.
    Erase {
        /// Forces pencil mode for this event.
        pencil: bool,
    },
    /// Change the corner that pencil entry targets.
    SetActiveCorner(Corner),
    /// Change the authoritative entry mode.
    SetEntryMode(EntryMode),
    /// Switch the authoritative entry mode between center and pencil.
    ToggleEntryMode,
    /// Lock every cell with a non-empty center set.
    LockInitialNumbers,
    /// Step back one history entry.
    Undo,
    /// Step forward one history entry.
    Redo,
}

/// Whether an event was consumed by the editor.
///
/// Hosts use this to decide whether to stop the event from reaching other
/// handlers. An event can be handled without changing the board, e.g. a
/// center digit on a locked cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputOutcome {
    /// The editor consumed the event.
    Handled,
    /// The event did not apply, e.g. an unknown key or no selection.
    Ignored,
}

impl From<bool> for InputOutcome {
    fn from(handled: bool) -> Self {
        if handled { Self::Handled } else { Self::Ignored }
    }
}

/// Translates a key press into an action.
///
/// `modifier` is the pencil modifier (Ctrl or Cmd). Combined with `z`/`y` it
/// forms the undo/redo chords; combined with a digit or an erase key it
/// requests pencil entry. Unrecognized keys yield `None`.
#[must_use]
pub fn resolve_key(key: Key, modifier: bool) -> Option<Action> {
    let action = match key {
        Key::Char('z' | 'Z') if modifier => Action::Undo,
        Key::Char('y' | 'Y') if modifier => Action::Redo,
        Key::ArrowUp => Action::MoveSelection(MoveDirection::Up),
        Key::ArrowDown => Action::MoveSelection(MoveDirection::Down),
        Key::ArrowLeft => Action::MoveSelection(MoveDirection::Left),
        Key::ArrowRight => Action::MoveSelection(MoveDirection::Right),
        Key::Backspace | Key::Delete => Action::Erase { pencil: modifier },
        Key::Char(ch) => {
            let digit = Digit::try_from(ch).ok()?;
            Action::RequestDigit {
                digit,
                pencil: modifier,
            }
        }
    };
    Some(action)
}

/// Parses a text-channel string into digits.
///
/// # Errors
///
/// Returns the first character that is not `'1'..='9'`. The whole string is
/// rejected in that case.
pub fn parse_digits(text: &str) -> Result<Vec<Digit>, pencilmark_core::DigitError> {
    text.chars().map(Digit::try_from).collect()
}

#[cfg(test)]
mod tests {
    use pencilmark_core::DigitError;

    use super::*;

    #[test]
    fn test_undo_redo_need_modifier() {
        assert_eq!(resolve_key(Key::Char('z'), true), Some(Action::Undo));
        assert_eq!(resolve_key(Key::Char('Z'), true), Some(Action::Undo));
        assert_eq!(resolve_key(Key::Char('y'), true), Some(Action::Redo));
        assert_eq!(resolve_key(Key::Char('z'), false), None);
        assert_eq!(resolve_key(Key::Char('y'), false), None);
    }

    #[test]
    fn test_digits_carry_modifier_as_pencil_request() {
        assert_eq!(
            resolve_key(Key::Char('5'), false),
            Some(Action::RequestDigit {
                digit: Digit::D5,
                pencil: false
            })
        );
        assert_eq!(
            resolve_key(Key::Char('7'), true),
            Some(Action::RequestDigit {
                digit: Digit::D7,
                pencil: true
            })
        );
        assert_eq!(resolve_key(Key::Char('0'), false), None);
        assert_eq!(resolve_key(Key::Char('q'), true), None);
    }

    #[test]
    fn test_erase_and_arrows() {
        assert_eq!(
            resolve_key(Key::Backspace, false),
            Some(Action::Erase { pencil: false })
        );
        assert_eq!(
            resolve_key(Key::Delete, true),
            Some(Action::Erase { pencil: true })
        );
        assert_eq!(
            resolve_key(Key::ArrowLeft, true),
            Some(Action::MoveSelection(MoveDirection::Left))
        );
    }

    #[test]
    fn test_parse_digits_rejects_whole_string() {
        assert_eq!(parse_digits("312"), Ok(vec![Digit::D3, Digit::D1, Digit::D2]));
        assert_eq!(parse_digits(""), Ok(vec![]));
        assert_eq!(parse_digits("1a2"), Err(DigitError::InvalidChar { ch: 'a' }));
        assert_eq!(parse_digits("90"), Err(DigitError::InvalidChar { ch: '0' }));
    }
}
