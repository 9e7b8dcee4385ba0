//! Editor configuration.

use std::num::NonZero;

use pencilmark_core::Corner;

use crate::EntryMode;

/// How the "lock initial numbers" action relates to undo history.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::IsVariant,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum LockPolicy {
    /// The locked board replaces the current one without a history entry.
    ///
    /// Undo steps back to snapshots taken earlier, which may predate the lock.
    #[default]
    Direct,
    /// Locking is recorded as an undoable edit.
    Tracked,
}

/// Configuration for an [`Editor`](crate::Editor).
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use pencilmark_editor::{EditorSettings, LockPolicy};
///
/// let settings = EditorSettings::default()
///     .history_capacity(NonZero::new(500))
///     .lock_policy(LockPolicy::Tracked);
/// assert_eq!(settings.lock_policy, LockPolicy::Tracked);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Maximum number of undo entries; `None` keeps every entry.
    pub history_capacity: Option<NonZero<usize>>,
    /// Whether locking initial numbers is an undo step.
    pub lock_policy: LockPolicy,
    /// Entry mode the editor starts in.
    pub default_entry_mode: EntryMode,
    /// Pencil corner the editor starts with.
    pub default_corner: Corner,
}

impl EditorSettings {
    /// Sets [`EditorSettings::history_capacity`].
    #[must_use]
    pub fn history_capacity(mut self, capacity: Option<NonZero<usize>>) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Sets [`EditorSettings::lock_policy`].
    #[must_use]
    pub fn lock_policy(mut self, policy: LockPolicy) -> Self {
        self.lock_policy = policy;
        self
    }

    /// Sets [`EditorSettings::default_entry_mode`].
    #[must_use]
    pub fn default_entry_mode(mut self, mode: EntryMode) -> Self {
        self.default_entry_mode = mode;
        self
    }

    /// Sets [`EditorSettings::default_corner`].
    #[must_use]
    pub fn default_corner(mut self, corner: Corner) -> Self {
        self.default_corner = corner;
        self
    }
}
