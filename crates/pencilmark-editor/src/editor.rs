//! The editor state machine and its input dispatch.

use std::mem;

use pencilmark_core::{Board, Cell, Corner, Digit, Position};

use crate::{
    Action, EditorSettings, EntryMode, History, InputOutcome, Key, LockPolicy, MoveDirection,
    Selection, input,
};

/// The grid editor state machine.
///
/// Owns the live board, its undo/redo history, the selection cursor and the
/// mode state. All input goes through [`Editor::apply`] (or one of the
/// convenience commands built on it); every board change that originates from
/// digit or erase input is recorded in history before the new board becomes
/// current.
///
/// # Example
///
/// ```
/// use pencilmark_core::{Corner, Digit, Position};
/// use pencilmark_editor::{Editor, Key};
///
/// let mut editor = Editor::new();
/// let pos = Position::new(0, 0);
/// editor.click(pos);
/// editor.key_input(Key::Char('5'), false);
/// editor.key_input(Key::Char('7'), true);
///
/// let cell = editor.board()[pos];
/// assert!(cell.center().contains(Digit::D5));
/// assert!(cell.pencil(Corner::TopLeft).contains(Digit::D7));
///
/// editor.key_input(Key::Char('z'), true);
/// assert!(editor.board()[pos].pencil(Corner::TopLeft).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Editor {
    board: Board,
    history: History<Board>,
    selection: Selection,
    active_corner: Corner,
    entry_mode: EntryMode,
    locked_mode: bool,
    settings: EditorSettings,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellEdit {
    Insert(Digit),
    Clear,
}

impl CellEdit {
    /// Applies the edit to the slot selected by `mode`.
    ///
    /// Returns `None` when the edit targets the center of a locked cell.
    fn apply(self, cell: Cell, mode: EntryMode, corner: Corner) -> Option<Cell> {
        let edited = match (mode, self) {
            (EntryMode::Center, _) if cell.is_locked() => return None,
            (EntryMode::Center, CellEdit::Insert(digit)) => cell.with_center_digit(digit),
            (EntryMode::Center, CellEdit::Clear) => cell.with_center_cleared(),
            (EntryMode::Pencil, CellEdit::Insert(digit)) => cell.with_pencil_digit(corner, digit),
            (EntryMode::Pencil, CellEdit::Clear) => cell.with_pencil_cleared(corner),
        };
        Some(edited)
    }
}

impl Editor {
    /// Creates an editor with an empty board and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    /// Creates an editor with an empty board.
    #[must_use]
    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            board: Board::new(),
            history: History::new(settings.history_capacity),
            selection: Selection::new(),
            active_corner: settings.default_corner,
            entry_mode: settings.default_entry_mode,
            locked_mode: false,
            settings,
        }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the selected cell, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.selection.get()
    }

    /// Returns `true` once [`Editor::lock_initial_numbers`] has run.
    #[must_use]
    pub fn is_locked_mode(&self) -> bool {
        self.locked_mode
    }

    /// Returns the corner that pencil entry targets.
    #[must_use]
    pub fn active_corner(&self) -> Corner {
        self.active_corner
    }

    /// Returns the authoritative entry mode.
    #[must_use]
    pub fn entry_mode(&self) -> EntryMode {
        self.entry_mode
    }

    /// Returns the settings the editor was created with.
    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Returns the board history.
    #[must_use]
    pub fn history(&self) -> &History<Board> {
        &self.history
    }

    /// Returns `true` if there is a snapshot to undo to.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns `true` if there is an undone snapshot to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of undo entries.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.history.undo_len()
    }

    /// Number of redo entries.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.history.redo_len()
    }

    /// Applies a single action.
    pub fn apply(&mut self, action: Action) -> InputOutcome {
        match action {
            Action::SelectCell(pos) => self.click(pos),
            Action::ClearSelection => {
                self.clear_selection();
                InputOutcome::Handled
            }
            Action::MoveSelection(direction) => self.move_selection(direction),
            Action::RequestDigit { digit, pencil } => {
                self.edit_selected([CellEdit::Insert(digit)], self.entry_mode.resolve(pencil))
            }
            Action::Erase { pencil } => {
                self.edit_selected([CellEdit::Clear], self.entry_mode.resolve(pencil))
            }
            Action::SetActiveCorner(corner) => {
                self.set_active_corner(corner);
                InputOutcome::Handled
            }
            Action::SetEntryMode(mode) => {
                self.set_entry_mode(mode);
                InputOutcome::Handled
            }
            Action::ToggleEntryMode => {
                self.toggle_entry_mode();
                InputOutcome::Handled
            }
            Action::LockInitialNumbers => self.lock_initial_numbers(),
            Action::Undo => {
                self.undo();
                InputOutcome::Handled
            }
            Action::Redo => {
                self.redo();
                InputOutcome::Handled
            }
        }
    }

    /// Selects the cell at `pos`.
    pub fn click(&mut self, pos: Position) -> InputOutcome {
        self.selection.select(pos);
        InputOutcome::Handled
    }

    /// Deselects the current cell.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Moves the selection one step, clamped at the board edge.
    ///
    /// Ignored while nothing is selected.
    pub fn move_selection(&mut self, direction: MoveDirection) -> InputOutcome {
        self.selection.move_by(direction).into()
    }

    /// Handles a key press. `pencil_modifier` is the state of the Ctrl/Cmd
    /// modifier.
    pub fn key_input(&mut self, key: Key, pencil_modifier: bool) -> InputOutcome {
        match input::resolve_key(key, pencil_modifier) {
            Some(action) => self.apply(action),
            None => InputOutcome::Ignored,
        }
    }

    /// Handles text typed into the entry field.
    ///
    /// Each character is entered with the authoritative entry mode and the
    /// whole string becomes a single history entry. A string containing any
    /// character other than `'1'..='9'` is rejected without changes.
    pub fn text_input(&mut self, text: &str) -> InputOutcome {
        if self.selection.get().is_none() {
            return InputOutcome::Ignored;
        }
        let digits = match input::parse_digits(text) {
            Ok(digits) => digits,
            Err(err) => {
                log::warn!("rejected text input {text:?}: {err}");
                return InputOutcome::Ignored;
            }
        };
        if digits.is_empty() {
            return InputOutcome::Ignored;
        }
        self.edit_selected(digits.into_iter().map(CellEdit::Insert), self.entry_mode)
    }

    /// Erases the selected cell's slot using the authoritative entry mode.
    pub fn erase(&mut self) -> InputOutcome {
        self.apply(Action::Erase { pencil: false })
    }

    /// Sets the corner that pencil entry targets.
    pub fn set_active_corner(&mut self, corner: Corner) {
        self.active_corner = corner;
    }

    /// Sets the authoritative entry mode.
    pub fn set_entry_mode(&mut self, mode: EntryMode) {
        self.entry_mode = mode;
    }

    /// Switches the authoritative entry mode between center and pencil.
    pub fn toggle_entry_mode(&mut self) {
        self.entry_mode.toggle();
    }

    /// Locks every cell whose center set is non-empty.
    ///
    /// Runs at most once per editor. Whether the lock becomes an undo step is
    /// decided by [`EditorSettings::lock_policy`].
    pub fn lock_initial_numbers(&mut self) -> InputOutcome {
        if self.locked_mode {
            log::debug!("initial numbers are already locked");
            return InputOutcome::Ignored;
        }
        self.locked_mode = true;

        let locked = self.board.with_nonempty_centers_locked();
        log::info!("locked {} initial cells", locked.locked_count());
        match self.settings.lock_policy {
            LockPolicy::Direct => self.board = locked,
            LockPolicy::Tracked => self.commit(locked),
        }
        InputOutcome::Handled
    }

    /// Restores the most recent undo snapshot. Returns `false` if there was
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.board);
        if !undone {
            log::debug!("nothing to undo");
        }
        undone
    }

    /// Restores the most recently undone snapshot. Returns `false` if there
    /// was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.board);
        if !redone {
            log::debug!("nothing to redo");
        }
        redone
    }

    fn edit_selected(
        &mut self,
        edits: impl IntoIterator<Item = CellEdit>,
        mode: EntryMode,
    ) -> InputOutcome {
        let Some(pos) = self.selection.get() else {
            return InputOutcome::Ignored;
        };

        let mut cell = self.board[pos];
        let mut applied = false;
        for edit in edits {
            match edit.apply(cell, mode, self.active_corner) {
                Some(edited) => {
                    cell = edited;
                    applied = true;
                }
                None => log::debug!("dropped {edit:?} on locked cell {pos}"),
            }
        }

        if applied {
            self.commit(self.board.with_cell(pos, cell));
            log::trace!("committed {mode} edit at {pos}");
        }
        InputOutcome::Handled
    }

    /// Makes `next` the current board, recording the replaced board in
    /// history and discarding the redo stack. The board is recorded even when
    /// `next` equals it.
    fn commit(&mut self, next: Board) {
        let previous = mem::replace(&mut self.board, next);
        self.history.push(previous);
    }
}
