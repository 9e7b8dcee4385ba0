use eframe::egui::{self, InputState};
use pencilmark_editor::{Action, Key};

use crate::action::{ActionRequestQueue, AppAction};

const KEY_MAP: [(egui::Key, Key); 17] = [
    (egui::Key::ArrowUp, Key::ArrowUp),
    (egui::Key::ArrowDown, Key::ArrowDown),
    (egui::Key::ArrowLeft, Key::ArrowLeft),
    (egui::Key::ArrowRight, Key::ArrowRight),
    (egui::Key::Backspace, Key::Backspace),
    (egui::Key::Delete, Key::Delete),
    (egui::Key::Z, Key::Char('z')),
    (egui::Key::Y, Key::Char('y')),
    (egui::Key::Num1, Key::Char('1')),
    (egui::Key::Num2, Key::Char('2')),
    (egui::Key::Num3, Key::Char('3')),
    (egui::Key::Num4, Key::Char('4')),
    (egui::Key::Num5, Key::Char('5')),
    (egui::Key::Num6, Key::Char('6')),
    (egui::Key::Num7, Key::Char('7')),
    (egui::Key::Num8, Key::Char('8')),
    (egui::Key::Num9, Key::Char('9')),
];

/// Maps an egui key to the editor's key vocabulary.
pub(crate) fn translate_key(key: egui::Key) -> Option<Key> {
    KEY_MAP
        .iter()
        .find_map(|(from, to)| (*from == key).then_some(*to))
}

/// Translates one egui event into an app action.
///
/// Returns `None` for releases and keys the editor does not know.
pub(crate) fn event_action(event: &egui::Event) -> Option<AppAction> {
    let egui::Event::Key {
        key,
        pressed: true,
        modifiers,
        ..
    } = event
    else {
        return None;
    };
    if *key == egui::Key::Escape {
        return Some(Action::ClearSelection.into());
    }
    // `modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    let key = translate_key(*key)?;
    Some(AppAction::KeyInput {
        key,
        pencil_modifier: modifiers.command,
    })
}

/// Queues every key event of the frame in arrival order.
pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    for action in i.events.iter().filter_map(event_action) {
        action_queue.request(action);
    }
}
