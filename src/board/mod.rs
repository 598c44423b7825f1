//! The 3x3 grid and its fixed winning lines.
//!
//! `Board` answers occupancy and win questions; it has no notion of whose
//! turn it is. Turn order and scoring live in `series`.

pub mod grid;
pub mod lines;

pub use grid::{Board, EmptyPositions};
pub use lines::{LineKind, WinLine, WIN_LINES};
