//! Grid state machine for the Pencilmark editor.
//!
//! [`Editor`] ties together the pieces that turn user input into board edits:
//!
//! - [`selection`]: The cursor and clamped arrow-key navigation.
//! - [`history`]: Undo/redo stacks of full board snapshots.
//! - [`input`]: Key presses and text reduced to [`Action`]s.
//! - [`mode`]: The authoritative center/pencil [`EntryMode`].
//! - [`settings`]: History capacity, lock policy and start-up modes.
//!
//! The editor is single-threaded and synchronous. Each input is applied
//! completely before the next one, and every board change is a new
//! [`Board`](pencilmark_core::Board) value, so history entries never observe
//! later edits.

pub mod editor;
pub mod history;
pub mod input;
pub mod mode;
pub mod selection;
pub mod settings;

pub use self::{
    editor::Editor,
    history::History,
    input::{Action, InputOutcome, Key},
    mode::EntryMode,
    selection::{MoveDirection, Selection},
    settings::{EditorSettings, LockPolicy},
};
