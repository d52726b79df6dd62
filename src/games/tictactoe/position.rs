//! Board positions and their index/coordinate conversions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The 1-based cell number recorded for a played move (1-9).
    pub fn point(self) -> u8 {
        self as u8 + 1
    }

    /// Creates position from a 1-based cell number.
    #[instrument]
    pub fn from_point(point: u8) -> Option<Self> {
        usize::from(point).checked_sub(1).and_then(Self::from_index)
    }

    /// 1-based row (1-3).
    pub fn row(self) -> u8 {
        (self.point() - 1) / 3 + 1
    }

    /// 1-based column (1-3).
    ///
    /// Computed as `point mod 3`, with 3 standing in for a zero remainder.
    pub fn column(self) -> u8 {
        match self.point() % 3 {
            0 => 3,
            col => col,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_all_matches_declaration_order() {
        use strum::IntoEnumIterator;
        assert!(Position::iter().eq(Position::ALL));
    }

    #[test]
    fn test_point_is_one_based() {
        assert_eq!(Position::TopLeft.point(), 1);
        assert_eq!(Position::BottomRight.point(), 9);
        assert_eq!(Position::from_point(5), Some(Position::Center));
        assert_eq!(Position::from_point(0), None);
        assert_eq!(Position::from_point(10), None);
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!((Position::TopLeft.row(), Position::TopLeft.column()), (1, 1));
        assert_eq!((Position::TopRight.row(), Position::TopRight.column()), (1, 3));
        assert_eq!((Position::Center.row(), Position::Center.column()), (2, 2));
        assert_eq!(
            (Position::MiddleRight.row(), Position::MiddleRight.column()),
            (2, 3)
        );
        assert_eq!(
            (Position::BottomLeft.row(), Position::BottomLeft.column()),
            (3, 1)
        );
    }
}
