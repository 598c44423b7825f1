//! The eight fixed winning lines.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Orientation of a winning line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
}

/// Three positions that win when all hold the same marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    kind: LineKind,
    positions: [Position; 3],
}

impl WinLine {
    const fn new(kind: LineKind, a: u8, b: u8, c: u8) -> Self {
        Self {
            kind,
            positions: [Position::at(a), Position::at(b), Position::at(c)],
        }
    }

    #[must_use]
    pub const fn kind(&self) -> LineKind {
        self.kind
    }

    /// The line's cells in ascending order.
    #[must_use]
    pub const fn positions(&self) -> [Position; 3] {
        self.positions
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.positions;
        write!(f, "{a}-{b}-{c}")
    }
}

/// All winning lines in scan order: rows, then columns, then diagonals.
///
/// Every scan over lines (win detection, the hard computer's offense and
/// defense) walks this table front to back, so the first match is stable.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine::new(LineKind::Row, 1, 2, 3),
    WinLine::new(LineKind::Row, 4, 5, 6),
    WinLine::new(LineKind::Row, 7, 8, 9),
    WinLine::new(LineKind::Column, 1, 4, 7),
    WinLine::new(LineKind::Column, 2, 5, 8),
    WinLine::new(LineKind::Column, 3, 6, 9),
    WinLine::new(LineKind::Diagonal, 1, 5, 9),
    WinLine::new(LineKind::Diagonal, 3, 5, 7),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_table_order() {
        let rendered: Vec<String> = WIN_LINES.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["1-2-3", "4-5-6", "7-8-9", "1-4-7", "2-5-8", "3-6-9", "1-5-9", "3-5-7"]
        );
    }

    #[test]
    fn test_line_kinds() {
        let rows = WIN_LINES.iter().filter(|l| l.kind() == LineKind::Row).count();
        let columns = WIN_LINES.iter().filter(|l| l.kind() == LineKind::Column).count();
        let diagonals = WIN_LINES.iter().filter(|l| l.kind() == LineKind::Diagonal).count();
        assert_eq!((rows, columns, diagonals), (3, 3, 2));
    }

    #[test]
    fn test_center_lines() {
        // The center sits on the middle row, middle column and both diagonals.
        let through_center = WIN_LINES
            .iter()
            .filter(|l| l.contains(Position::CENTER))
            .count();
        assert_eq!(through_center, 4);
    }
}
