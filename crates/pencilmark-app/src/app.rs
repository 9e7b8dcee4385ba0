//! Pencilmark desktop application UI.
//!
//! The app owns an [`Editor`] and only reads its state for drawing. Every
//! click, key press and toolbar interaction is queued as an action and
//! forwarded to the editor after the frame's widgets have run.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use pencilmark_editor::{Editor, EditorSettings};

use crate::{
    action::{ActionRequestQueue, AppAction},
    theme::Theme,
    ui::{self, grid::GridViewModel, toolbar::ToolbarViewModel},
};

#[derive(Debug)]
pub struct PencilmarkApp {
    editor: Editor,
    theme: Theme,
    text_buffer: String,
}

impl PencilmarkApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self::with_settings(EditorSettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: EditorSettings) -> Self {
        log::info!(
            "starting editor: lock_policy={:?}, history_capacity={:?}",
            settings.lock_policy,
            settings.history_capacity
        );
        Self {
            editor: Editor::with_settings(settings),
            theme: Theme::default(),
            text_buffer: String::new(),
        }
    }

    #[must_use]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn handle(&mut self, action: AppAction) {
        let outcome = match action {
            AppAction::Editor(action) => self.editor.apply(action),
            AppAction::KeyInput {
                key,
                pencil_modifier,
            } => self.editor.key_input(key, pencil_modifier),
            AppAction::TextInput(text) => self.editor.text_input(&text),
            AppAction::SetTheme(theme) => {
                self.theme = theme;
                return;
            }
        };
        log::trace!("input outcome: {outcome:?}");
    }

    fn handle_all(&mut self, action_queue: &mut ActionRequestQueue) {
        for action in action_queue.take_all() {
            self.handle(action);
        }
    }

    fn toolbar_view_model(&self) -> ToolbarViewModel {
        ToolbarViewModel {
            active_corner: self.editor.active_corner(),
            entry_mode: self.editor.entry_mode(),
            theme: self.theme,
            can_undo: self.editor.can_undo(),
            can_redo: self.editor.can_redo(),
            locked_mode: self.editor.is_locked_mode(),
        }
    }
}

impl App for PencilmarkApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if !ctx.wants_keyboard_input() {
            ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
            self.handle_all(&mut action_queue);
        }

        ctx.set_visuals(self.theme.visuals());

        let toolbar_vm = self.toolbar_view_model();
        let grid_vm = GridViewModel::new(
            self.editor.board(),
            self.editor.selection(),
            self.theme.palette(),
        );
        let text_buffer = &mut self.text_buffer;

        CentralPanel::default().show(ctx, |ui| {
            ui::screen::show(ui, &toolbar_vm, &grid_vm, text_buffer, &mut action_queue);
        });

        self.handle_all(&mut action_queue);
    }
}

#[cfg(test)]
mod tests {
    use pencilmark_core::{Digit, Position};
    use pencilmark_editor::{Action, Key};

    use super::*;

    fn app() -> PencilmarkApp {
        PencilmarkApp::with_settings(EditorSettings::default())
    }

    #[test]
    fn test_queued_actions_reach_the_editor() {
        let mut app = app();
        let mut queue = ActionRequestQueue::default();
        let pos = Position::new(4, 4);
        queue.request(Action::SelectCell(pos));
        queue.request(AppAction::KeyInput {
            key: Key::Char('6'),
            pencil_modifier: false,
        });
        queue.request(AppAction::TextInput("2".to_owned()));
        app.handle_all(&mut queue);

        assert_eq!(app.editor().selection(), Some(pos));
        let center = app.editor().board().cell(pos).center();
        assert!(center.contains(Digit::D6));
        assert!(center.contains(Digit::D2));
        assert_eq!(app.editor().undo_len(), 2);
    }

    #[test]
    fn test_theme_changes_do_not_touch_the_editor() {
        let mut app = app();
        let mut queue = ActionRequestQueue::default();
        queue.request(AppAction::SetTheme(Theme::Grey));
        app.handle_all(&mut queue);

        assert_eq!(app.theme(), Theme::Grey);
        assert!(!app.editor().can_undo());
        assert!(app.editor().board().is_empty());
    }

    #[test]
    fn test_toolbar_reflects_lock_state() {
        let mut app = app();
        assert!(!app.toolbar_view_model().locked_mode);

        let mut queue = ActionRequestQueue::default();
        queue.request(Action::LockInitialNumbers);
        app.handle_all(&mut queue);

        assert!(app.toolbar_view_model().locked_mode);
    }
}
