use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use pencilmark_core::{Board, Cell, Corner, DigitSet, Position};
use pencilmark_editor::Action;

use crate::{action::ActionRequestQueue, theme::GridPalette};

#[derive(Debug, Clone, Copy)]
pub(crate) struct GridViewModel<'a> {
    board: &'a Board,
    selected: Option<Position>,
    palette: GridPalette,
}

impl<'a> GridViewModel<'a> {
    #[must_use]
    pub(crate) fn new(board: &'a Board, selected: Option<Position>, palette: GridPalette) -> Self {
        Self {
            board,
            selected,
            palette,
        }
    }

    fn is_selected(&self, pos: Position) -> bool {
        self.selected == Some(pos)
    }
}

pub(crate) const GRID_CELLS: f32 = 9.0;

const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const THICK_BORDER_WIDTH_RATIO: f32 = 3.0;
const SELECTED_BORDER_WIDTH_RATIO: f32 = 2.0;
const PENCIL_FONT_RATIO: f32 = 0.22;

fn base_border_width(cell_size: f32) -> f32 {
    f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0)
}

fn thick_border_width(cell_size: f32) -> f32 {
    base_border_width(cell_size) * THICK_BORDER_WIDTH_RATIO
}

#[must_use]
pub(crate) fn grid_side_with_border(cell_size: f32) -> f32 {
    GRID_CELLS * cell_size + thick_border_width(cell_size) * 4.0
}

/// Largest cell size whose bordered grid fits into `side`.
#[must_use]
pub(crate) fn cell_size_for_side(side: f32) -> f32 {
    let border_units = CELL_BORDER_WIDTH_BASE_RATIO * THICK_BORDER_WIDTH_RATIO * 4.0;
    side / (GRID_CELLS + border_units)
}

/// Font scale for the center digits; more candidates means smaller text.
fn center_font_ratio(len: usize) -> f32 {
    match len {
        0 | 1 => 0.7,
        2 | 3 => 0.42,
        4 | 5 => 0.3,
        _ => 0.22,
    }
}

fn text_color(cell: &Cell, palette: &GridPalette) -> Color32 {
    if cell.is_locked() {
        palette.text_locked
    } else {
        palette.text_center
    }
}

fn corner_anchor(rect: Rect, corner: Corner) -> (Pos2, Align2) {
    match corner {
        Corner::TopLeft => (rect.left_top(), Align2::LEFT_TOP),
        Corner::TopRight => (rect.right_top(), Align2::RIGHT_TOP),
        Corner::BottomLeft => (rect.left_bottom(), Align2::LEFT_BOTTOM),
        Corner::BottomRight => (rect.right_bottom(), Align2::RIGHT_BOTTOM),
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GridViewModel<'_>,
    cell_size: f32,
    action_queue: &mut ActionRequestQueue,
) {
    let palette = &vm.palette;
    let grid_side = grid_side_with_border(cell_size);

    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(grid_side), Sense::hover());

    let thick_border = Stroke::new(thick_border_width(cell_size), palette.border_thick);
    let base_border = base_border_width(cell_size);
    let inner_rect = rect.shrink(thick_border.width);

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.border_thick);

    for pos in Position::ALL {
        let cell = vm.board.cell(pos);
        let selected = vm.is_selected(pos);

        let xf = f32::from(pos.col());
        let yf = f32::from(pos.row());
        let cell_min = inner_rect.min
            + Vec2::new(
                cell_size * xf + (xf / 3.0).floor() * thick_border.width,
                cell_size * yf + (yf / 3.0).floor() * thick_border.width,
            );
        let cell_rect = Rect::from_min_size(cell_min, Vec2::splat(cell_size));

        let fill = if selected {
            palette.cell_bg_selected
        } else {
            palette.cell_bg
        };
        painter.rect_filled(cell_rect, 0.0, fill);

        draw_center(painter, cell_rect, cell, palette);
        draw_pencil_marks(painter, cell_rect.shrink(base_border * 2.0), cell, palette);

        let border = if selected {
            Stroke::new(
                base_border * SELECTED_BORDER_WIDTH_RATIO,
                palette.border_thick,
            )
        } else {
            Stroke::new(base_border, palette.border_thin)
        };
        painter.rect_stroke(cell_rect, 0.0, border, StrokeKind::Inside);

        let response = ui.interact(cell_rect, ui.id().with(pos.index()), Sense::click());
        if response.clicked() {
            action_queue.request(Action::SelectCell(pos));
        }
    }
}

fn draw_center(painter: &Painter, rect: Rect, cell: &Cell, palette: &GridPalette) {
    let center = cell.center();
    if center.is_empty() {
        return;
    }
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        center.to_string(),
        FontId::proportional(rect.height() * center_font_ratio(center.len())),
        text_color(cell, palette),
    );
}

fn draw_pencil_marks(painter: &Painter, rect: Rect, cell: &Cell, palette: &GridPalette) {
    let font = FontId::proportional(rect.height() * PENCIL_FONT_RATIO);
    for corner in Corner::ALL {
        let digits: DigitSet = cell.pencil(corner);
        if digits.is_empty() {
            continue;
        }
        let (pos, align) = corner_anchor(rect, corner);
        painter.text(
            pos,
            align,
            digits.to_string(),
            font.clone(),
            palette.text_pencil,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_round_trips_through_grid_side() {
        let side = 540.0;
        let cell_size = cell_size_for_side(side);
        assert!((grid_side_with_border(cell_size) - side).abs() < 0.01);
    }

    #[test]
    fn test_center_font_shrinks_with_more_digits() {
        assert!(center_font_ratio(1) > center_font_ratio(2));
        assert!(center_font_ratio(3) > center_font_ratio(4));
        assert!(center_font_ratio(5) > center_font_ratio(9));
    }

    #[test]
    fn test_corner_anchors_match_corner_sides() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::splat(10.0));
        for corner in Corner::ALL {
            let (pos, _align) = corner_anchor(rect, corner);
            assert_eq!(pos.y == rect.top(), corner.is_top());
            assert_eq!(pos.x == rect.left(), corner.is_left());
        }
    }
}
