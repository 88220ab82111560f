//! Board, players and outcome for the turn-based grid game

use serde::{Deserialize, Serialize};

use super::lines::Line;
use crate::consts::tictactoe::*;

/// One of the two players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// Plays crosses and moves first
    #[default]
    One,
    /// Plays circles
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Where the game stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won { player: Player, line: Line },
    /// Board filled without a completed line
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// A board cell address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Map a pointer position to the square under it
    pub fn at_point(x: f32, y: f32) -> Option<Self> {
        if !(0.0..WIDTH).contains(&x) || !(0.0..HEIGHT).contains(&y) {
            return None;
        }
        let row = (y / SQUARE_SIZE) as usize;
        let col = (x / SQUARE_SIZE) as usize;
        Some(Self::new(row, col)).filter(Cell::is_on_board)
    }
}

/// Fixed square grid of marks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at `cell`; `None` for an empty or off-board cell
    pub fn get(&self, cell: Cell) -> Option<Player> {
        self.cells
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .flatten()
    }

    /// On the board and not yet marked
    pub fn is_available(&self, cell: Cell) -> bool {
        cell.is_on_board() && self.get(cell).is_none()
    }

    /// Mark an empty cell; an occupied cell is never overwritten
    ///
    /// Returns whether the mark was placed (false for off-board cells too).
    pub fn mark(&mut self, cell: Cell, player: Player) -> bool {
        let Some(slot) = self
            .cells
            .get_mut(cell.row)
            .and_then(|row| row.get_mut(cell.col))
        else {
            return false;
        };
        if slot.is_some() {
            return false;
        }
        *slot = Some(player);
        true
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Iterate every cell with its mark
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<Player>)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .map(move |(col, mark)| (Cell::new(row, col), *mark))
        })
    }
}
