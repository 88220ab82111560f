//! Turn handling for the grid game
//!
//! A placement is rejected when the cell is taken or the game is over.
//! Otherwise the cell is marked, the mover's lines are checked, and the turn
//! passes to the other player.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Outcome, Player};
use super::lines::winning_line;
use crate::input::InputEvent;

/// Complete grid game state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeState {
    pub board: Board,
    /// Player whose turn it is
    pub current: Player,
    pub outcome: Outcome,
}

impl TicTacToeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty board, Player One to move
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Result of one placement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Cell taken or game already over; nothing changed
    Rejected,
    Placed,
    Won(Player),
    Draw,
}

/// Commands recognised by the grid game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeCommand {
    Place(Cell),
    Reset,
}

impl TicTacToeCommand {
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        match *event {
            InputEvent::PointerDown { x, y } => Cell::at_point(x, y).map(TicTacToeCommand::Place),
            InputEvent::KeyDown { key } if key.is_char('r') => Some(TicTacToeCommand::Reset),
            _ => None,
        }
    }
}

/// Try to mark `cell` for the player whose turn it is
pub fn place(state: &mut TicTacToeState, cell: Cell) -> Placement {
    if state.outcome.is_over() || !state.board.is_available(cell) {
        log::debug!("Rejected placement at {:?}", cell);
        return Placement::Rejected;
    }

    let player = state.current;
    state.board.mark(cell, player);

    if let Some(line) = winning_line(&state.board, player) {
        state.outcome = Outcome::Won { player, line };
        log::info!("{:?} won on {:?}", player, line);
        return Placement::Won(player);
    }

    if state.board.is_full() {
        state.outcome = Outcome::Draw;
        log::info!("Board full, game drawn");
        return Placement::Draw;
    }

    state.current = player.other();
    Placement::Placed
}

/// Apply a tick's events in arrival order
pub fn tick(state: &mut TicTacToeState, events: &[InputEvent]) -> Vec<Placement> {
    let mut placements = Vec::new();
    for command in events.iter().filter_map(TicTacToeCommand::from_event) {
        match command {
            TicTacToeCommand::Place(cell) => placements.push(place(state, cell)),
            TicTacToeCommand::Reset => {
                log::debug!("Board reset");
                state.reset();
            }
        }
    }
    placements
}
