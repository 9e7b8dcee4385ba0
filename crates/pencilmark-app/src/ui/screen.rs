use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{
    grid::{self, GridViewModel},
    toolbar::{self, ToolbarViewModel},
};
use crate::action::ActionRequestQueue;

const TOOLBAR_HEIGHT: f32 = 64.0;

pub(crate) fn show(
    ui: &mut Ui,
    toolbar_vm: &ToolbarViewModel,
    grid_vm: &GridViewModel<'_>,
    text_buffer: &mut String,
    action_queue: &mut ActionRequestQueue,
) {
    let spacing = ui.spacing().item_spacing;
    let available = ui.available_size();
    let grid_side = (available.y - TOOLBAR_HEIGHT - spacing.y * 3.0)
        .min(available.x - spacing.x * 2.0)
        .max(0.0);
    let cell_size = grid::cell_size_for_side(grid_side);

    StripBuilder::new(ui)
        .size(Size::exact(TOOLBAR_HEIGHT))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| {
                toolbar::show(ui, toolbar_vm, text_buffer, action_queue);
            });
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(grid_side))
                    .size(Size::remainder())
                    .horizontal(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            grid::show(ui, grid_vm, cell_size, action_queue);
                        });
                        strip.empty();
                    });
            });
        });
}
