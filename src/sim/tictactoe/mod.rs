//! Two-player 3x3 turn-based grid game

pub mod board;
pub mod lines;
pub mod tick;

pub use board::{Board, Cell, Outcome, Player};
pub use lines::{LINES, Line, winning_line};
pub use tick::{Placement, TicTacToeCommand, TicTacToeState, place, tick};
