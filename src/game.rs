//! The seam every game variant plugs into the driver through
//!
//! A tick is split in three stages: decode the event batch, step the
//! simulation, then build the draw list from the new state.

use std::time::Duration;

use crate::consts::{self, FRAME_INTERVAL};
use crate::input::InputEvent;
use crate::render::{self, DrawCommand};
use crate::sim::pong::{self, PongState};
use crate::sim::snake::{self, SnakeState};
use crate::sim::tictactoe::{self, TicTacToeState};

pub trait Game {
    /// Display name
    fn name(&self) -> &'static str;

    /// Apply one batch of input and advance one step
    fn tick(&mut self, events: &[InputEvent]);

    /// Draw list for the current state
    fn draw(&self) -> Vec<DrawCommand>;

    /// Back to construction-time values
    fn reset(&mut self);

    /// Pacing the driver keeps between ticks
    fn tick_interval(&self) -> Duration;
}

impl Game for PongState {
    fn name(&self) -> &'static str {
        "Pong"
    }

    fn tick(&mut self, events: &[InputEvent]) {
        let input = pong::TickInput::from_events(events);
        pong::tick(self, &input);
    }

    fn draw(&self) -> Vec<DrawCommand> {
        render::pong::draw(self)
    }

    fn reset(&mut self) {
        PongState::reset(self);
    }

    fn tick_interval(&self) -> Duration {
        FRAME_INTERVAL
    }
}

impl Game for SnakeState {
    fn name(&self) -> &'static str {
        "Snake"
    }

    fn tick(&mut self, events: &[InputEvent]) {
        let input = snake::TickInput::from_events(events);
        snake::tick(self, &input);
    }

    fn draw(&self) -> Vec<DrawCommand> {
        render::snake::draw(self)
    }

    fn reset(&mut self) {
        SnakeState::reset(self);
    }

    fn tick_interval(&self) -> Duration {
        consts::snake::TICK_INTERVAL
    }
}

impl Game for TicTacToeState {
    fn name(&self) -> &'static str {
        "Tic Tac Toe"
    }

    fn tick(&mut self, events: &[InputEvent]) {
        tictactoe::tick(self, events);
    }

    fn draw(&self) -> Vec<DrawCommand> {
        render::tictactoe::draw(self)
    }

    fn reset(&mut self) {
        TicTacToeState::reset(self);
    }

    fn tick_interval(&self) -> Duration {
        FRAME_INTERVAL
    }
}
