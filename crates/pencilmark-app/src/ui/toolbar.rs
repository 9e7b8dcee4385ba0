use eframe::egui::{self, Button, RichText, Ui};
use pencilmark_core::{Corner, Digit};
use pencilmark_editor::{Action, EntryMode};

use crate::{
    action::{ActionRequestQueue, AppAction},
    theme::Theme,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ToolbarViewModel {
    pub(crate) active_corner: Corner,
    pub(crate) entry_mode: EntryMode,
    pub(crate) theme: Theme,
    pub(crate) can_undo: bool,
    pub(crate) can_redo: bool,
    pub(crate) locked_mode: bool,
}

/// Keeps only the characters the editor accepts as digits.
pub(crate) fn filter_digits(text: &str) -> String {
    text.chars().filter(|&ch| Digit::try_from(ch).is_ok()).collect()
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &ToolbarViewModel,
    text_buffer: &mut String,
    action_queue: &mut ActionRequestQueue,
) {
    ui.horizontal_wrapped(|ui| {
        let mut corner = vm.active_corner;
        egui::ComboBox::from_id_salt("active_corner")
            .selected_text(corner.label())
            .show_ui(ui, |ui| {
                for c in Corner::ALL {
                    ui.selectable_value(&mut corner, c, c.label());
                }
            });
        if corner != vm.active_corner {
            action_queue.request(Action::SetActiveCorner(corner));
        }

        let mut mode = vm.entry_mode;
        ui.selectable_value(&mut mode, EntryMode::Center, "Center");
        ui.selectable_value(&mut mode, EntryMode::Pencil, "Pencil");
        if mode != vm.entry_mode {
            action_queue.request(Action::SetEntryMode(mode));
        }

        ui.separator();

        let mut theme = vm.theme;
        egui::ComboBox::from_id_salt("theme")
            .selected_text(theme.label())
            .show_ui(ui, |ui| {
                for t in Theme::ALL {
                    ui.selectable_value(&mut theme, t, t.label());
                }
            });
        if theme != vm.theme {
            action_queue.request(AppAction::SetTheme(theme));
        }
    });

    ui.horizontal_wrapped(|ui| {
        if ui.button("Erase").clicked() {
            action_queue.request(Action::Erase { pencil: false });
        }
        if ui.add_enabled(vm.can_undo, Button::new("Undo")).clicked() {
            action_queue.request(Action::Undo);
        }
        if ui.add_enabled(vm.can_redo, Button::new("Redo")).clicked() {
            action_queue.request(Action::Redo);
        }
        if ui
            .add_enabled(!vm.locked_mode, Button::new("Lock Initial Numbers"))
            .clicked()
        {
            action_queue.request(Action::LockInitialNumbers);
        }

        ui.separator();

        ui.label(RichText::new("Digits:"));
        let response = ui.add(
            egui::TextEdit::singleline(text_buffer)
                .desired_width(80.0)
                .hint_text("1-9"),
        );
        if response.changed() {
            let digits = filter_digits(text_buffer);
            if !digits.is_empty() {
                action_queue.request(AppAction::TextInput(digits));
            }
            text_buffer.clear();
        }
    });
}
