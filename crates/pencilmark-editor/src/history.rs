//! Linear undo/redo history of owned snapshots.

use std::{
    collections::{VecDeque, vec_deque},
    mem,
    num::NonZero,
};

/// Undo and redo stacks of full snapshots.
///
/// The undo stack holds the states that preceded each committed edit, oldest
/// first. The redo stack holds states that were undone, most recently undone
/// last. Snapshots are owned values; nothing in the history borrows from or
/// shares storage with the live state.
///
/// With a capacity set, pushing onto a full undo stack drops its oldest entry.
/// Without one the history grows without bound.
#[derive(Debug, Clone)]
pub struct History<T> {
    undo: VecDeque<T>,
    redo: Vec<T>,
    capacity: Option<NonZero<usize>>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> History<T> {
    /// Creates a history with no capacity limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            capacity: None,
        }
    }

    /// Creates a history that keeps at most `capacity` undo entries.
    #[must_use]
    pub fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::unbounded()
        }
    }

    /// Creates a history with an optional capacity limit.
    #[must_use]
    pub fn new(capacity: Option<NonZero<usize>>) -> Self {
        Self {
            capacity,
            ..Self::unbounded()
        }
    }

    /// Returns the undo capacity, if bounded.
    #[must_use]
    pub fn capacity(&self) -> Option<NonZero<usize>> {
        self.capacity
    }

    /// Records `previous`, the state before a new edit, and discards every
    /// redo entry.
    pub fn push(&mut self, previous: T) {
        self.redo.clear();
        self.push_undo(previous);
    }

    fn push_undo(&mut self, item: T) {
        if let Some(capacity) = self.capacity
            && self.undo.len() == capacity.get()
        {
            self.undo.pop_front();
            log::debug!("history capacity {capacity} reached, dropped oldest undo entry");
        }
        self.undo.push_back(item);
    }

    /// Returns `true` if there is at least one undo entry.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if there is at least one redo entry.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo entries.
    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of redo entries.
    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Replaces `current` with the most recent undo entry, moving the replaced
    /// value onto the redo stack.
    ///
    /// Returns `false` and leaves everything untouched if there is nothing to
    /// undo. The redo stack is never cleared here.
    pub fn undo(&mut self, current: &mut T) -> bool {
        let Some(previous) = self.undo.pop_back() else {
            return false;
        };
        self.redo.push(mem::replace(current, previous));
        true
    }

    /// Replaces `current` with the most recently undone entry, moving the
    /// replaced value back onto the undo stack.
    ///
    /// Returns `false` and leaves everything untouched if there is nothing to
    /// redo.
    pub fn redo(&mut self, current: &mut T) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        let replaced = mem::replace(current, next);
        self.push_undo(replaced);
        true
    }

    /// Returns the undo entries, oldest first.
    #[must_use]
    pub fn undo_entries(&self) -> vec_deque::Iter<'_, T> {
        self.undo.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::History;

    fn commit(history: &mut History<i32>, current: &mut i32, next: i32) {
        history.push(*current);
        *current = next;
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut history = History::unbounded();
        let mut current = 0;
        commit(&mut history, &mut current, 1);
        commit(&mut history, &mut current, 2);
        commit(&mut history, &mut current, 3);

        assert!(history.undo(&mut current));
        assert_eq!(current, 2);
        assert!(history.undo(&mut current));
        assert_eq!(current, 1);
        assert!(history.redo(&mut current));
        assert_eq!(current, 2);
        assert!(history.redo(&mut current));
        assert_eq!(current, 3);
        assert!(!history.redo(&mut current));
        assert_eq!(current, 3);
    }

    #[test]
    fn test_redo_clears_after_push() {
        let mut history = History::unbounded();
        let mut current = 0;
        commit(&mut history, &mut current, 1);
        commit(&mut history, &mut current, 2);

        assert!(history.undo(&mut current));
        assert_eq!(history.redo_len(), 1);
        commit(&mut history, &mut current, 4);

        assert!(!history.can_redo());
        assert!(!history.redo(&mut current));
        assert!(history.undo(&mut current));
        assert_eq!(current, 1);
        assert!(history.redo(&mut current));
        assert_eq!(current, 4);
    }

    #[test]
    fn test_undo_does_not_clear_redo() {
        let mut history = History::unbounded();
        let mut current = 0;
        commit(&mut history, &mut current, 1);
        commit(&mut history, &mut current, 2);

        assert!(history.undo(&mut current));
        assert!(history.undo(&mut current));
        assert_eq!(history.redo_len(), 2);
        assert!(!history.undo(&mut current));
        assert_eq!(history.redo_len(), 2);
        assert_eq!(current, 0);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::with_capacity(NonZero::new(3).unwrap());
        let mut current = 0;
        for next in 1..=4 {
            commit(&mut history, &mut current, next);
        }

        assert_eq!(history.undo_len(), 3);
        assert_eq!(history.undo_entries().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert!(history.undo(&mut current));
        assert!(history.undo(&mut current));
        assert!(history.undo(&mut current));
        assert_eq!(current, 1);
        assert!(!history.undo(&mut current));
    }

    #[test]
    fn test_redo_respects_capacity() {
        let mut history = History::with_capacity(NonZero::new(2).unwrap());
        let mut current = 0;
        commit(&mut history, &mut current, 1);
        commit(&mut history, &mut current, 2);
        assert!(history.undo(&mut current));
        assert!(history.redo(&mut current));
        assert_eq!(history.undo_len(), 2);
        assert_eq!(current, 2);
    }

    #[test]
    fn test_empty_history_is_noop() {
        let mut history: History<i32> = History::default();
        let mut current = 7;

        assert!(!history.undo(&mut current));
        assert!(!history.redo(&mut current));
        assert_eq!(current, 7);
        assert_eq!(history.capacity(), None);
    }
}
