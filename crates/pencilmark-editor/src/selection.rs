//! Selection cursor and clamped keyboard navigation.

use pencilmark_core::Position;

/// Direction of a one-step cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveDirection {
    /// Towards row 0.
    Up,
    /// Towards row 8.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 8.
    Right,
}

impl MoveDirection {
    /// Moves `pos` one step, staying in place at the board edge.
    #[must_use]
    pub fn apply_to(self, pos: Position) -> Position {
        let moved = match self {
            MoveDirection::Up => pos.up(),
            MoveDirection::Down => pos.down(),
            MoveDirection::Left => pos.left(),
            MoveDirection::Right => pos.right(),
        };
        moved.unwrap_or(pos)
    }
}

/// The currently selected cell, if any.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    current: Option<Position>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Returns the selected position.
    #[must_use]
    pub const fn get(&self) -> Option<Position> {
        self.current
    }

    /// Selects `pos`, replacing any previous selection.
    pub fn select(&mut self, pos: Position) {
        self.current = Some(pos);
    }

    /// Deselects the current cell.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Moves the cursor one step.
    ///
    /// Does nothing while no cell is selected. Returns `true` if a cell is
    /// selected, even when the move was clamped at the edge.
    pub fn move_by(&mut self, direction: MoveDirection) -> bool {
        let Some(pos) = &mut self.current else {
            return false;
        };
        *pos = direction.apply_to(*pos);
        true
    }
}
