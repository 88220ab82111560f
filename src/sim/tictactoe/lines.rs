//! The eight winning lines

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Player};

/// A line of three cells that wins when uniformly marked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    Column(usize),
    Row(usize),
    /// Bottom-left to top-right
    AscendingDiagonal,
    /// Top-left to bottom-right
    DescendingDiagonal,
}

/// Every line, in evaluation order
pub const LINES: [Line; 8] = [
    Line::Column(0),
    Line::Column(1),
    Line::Column(2),
    Line::Row(0),
    Line::Row(1),
    Line::Row(2),
    Line::AscendingDiagonal,
    Line::DescendingDiagonal,
];

impl Line {
    pub fn cells(self) -> [Cell; 3] {
        match self {
            Line::Column(c) => [Cell::new(0, c), Cell::new(1, c), Cell::new(2, c)],
            Line::Row(r) => [Cell::new(r, 0), Cell::new(r, 1), Cell::new(r, 2)],
            Line::AscendingDiagonal => [Cell::new(2, 0), Cell::new(1, 1), Cell::new(0, 2)],
            Line::DescendingDiagonal => [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)],
        }
    }

    /// All three cells carry the player's mark
    pub fn is_complete_for(self, board: &Board, player: Player) -> bool {
        self.cells()
            .iter()
            .all(|cell| board.get(*cell) == Some(player))
    }
}

/// First line completed by `player`, if any
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    LINES
        .into_iter()
        .find(|line| line.is_complete_for(board, player))
}
