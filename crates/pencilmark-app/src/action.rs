use std::mem;

use pencilmark_editor::{Action, Key};

use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppAction {
    Editor(Action),
    /// A raw key press; the editor resolves chords and digits itself.
    KeyInput { key: Key, pencil_modifier: bool },
    /// Digits typed into the entry field, already filtered to `1`-`9`.
    TextInput(String),
    SetTheme(Theme),
}

impl From<Action> for AppAction {
    fn from(action: Action) -> Self {
        AppAction::Editor(action)
    }
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<AppAction>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: impl Into<AppAction>) {
        self.actions.push(action.into());
    }

    pub(crate) fn take_all(&mut self) -> Vec<AppAction> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use pencilmark_editor::Action;

    use super::{ActionRequestQueue, AppAction};
    use crate::theme::Theme;

    #[test]
    fn test_take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::ToggleEntryMode);
        queue.request(AppAction::SetTheme(Theme::Grey));

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0], AppAction::Editor(Action::ToggleEntryMode));
        assert_eq!(drained[1], AppAction::SetTheme(Theme::Grey));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
