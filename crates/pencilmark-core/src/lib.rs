//! Core data model for the Pencilmark grid editor.
//!
//! This crate defines the value types that make up a 9×9 puzzle grid:
//!
//! - [`digit`]: Type-safe digits 1-9 and their conversion from raw input.
//! - [`digit_set`]: Sets of digits, iterated in ascending order.
//! - [`corner`]: The four pencil-mark slots of a cell.
//! - [`position`]: `(row, col)` coordinates on the board.
//! - [`cell`]: A cell's center set, pencil sets and lock flag.
//! - [`board`]: The 9×9 grid and the bulk lock operation.
//!
//! All types are plain values. Operations return new values instead of
//! mutating in place, so a board kept around as an undo snapshot is never
//! affected by later edits.
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::{Board, Corner, Digit, Position};
//!
//! let pos = Position::new(0, 0);
//! let board = Board::new()
//!     .with_cell_updated(pos, |cell| cell.with_center_digit(Digit::D5))
//!     .with_cell_updated(pos, |cell| cell.with_pencil_digit(Corner::TopLeft, Digit::D7))
//!     .with_nonempty_centers_locked();
//!
//! assert!(board[pos].is_locked());
//! assert_eq!(board.locked_count(), 1);
//! ```

pub mod board;
pub mod cell;
pub mod corner;
pub mod digit;
pub mod digit_set;
pub mod position;

pub use self::{
    board::Board,
    cell::Cell,
    corner::{Corner, CornerError},
    digit::{Digit, DigitError},
    digit_set::DigitSet,
    position::{Position, PositionError},
};
