//! Fixed-step tick for the snake game
//!
//! Order within a tick: input, move, wall check, self check, food check.

use glam::IVec2;

use super::collision::{head_hits_body, head_hits_food, head_hits_wall};
use super::state::{Direction, SnakeState};
use crate::consts::snake::*;
use crate::input::{InputEvent, KeyCode};

/// Commands recognised by the snake game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    Stop,
    Reset,
}

impl SnakeCommand {
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        let InputEvent::KeyDown { key } = *event else {
            return None;
        };
        match key {
            KeyCode::Up => Some(SnakeCommand::Turn(Direction::Up)),
            KeyCode::Down => Some(SnakeCommand::Turn(Direction::Down)),
            KeyCode::Left => Some(SnakeCommand::Turn(Direction::Left)),
            KeyCode::Right => Some(SnakeCommand::Turn(Direction::Right)),
            k if k.is_char('p') => Some(SnakeCommand::Stop),
            k if k.is_char('r') => Some(SnakeCommand::Reset),
            _ => None,
        }
    }
}

/// Input for a single tick, in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub commands: Vec<SnakeCommand>,
}

impl TickInput {
    pub fn from_events(events: &[InputEvent]) -> Self {
        Self {
            commands: events.iter().filter_map(SnakeCommand::from_event).collect(),
        }
    }
}

/// Why a life ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    Wall,
    OwnBody,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub moved: bool,
    pub ate: bool,
    pub died: Option<DeathCause>,
}

/// Advance the snake game by one tick
pub fn tick(state: &mut SnakeState, input: &TickInput) -> TickEvents {
    let mut events = TickEvents::default();

    for command in &input.commands {
        match *command {
            SnakeCommand::Turn(direction) => {
                if !state.snake.turn(direction) {
                    log::debug!("Ignored reversal to {:?}", direction);
                }
            }
            SnakeCommand::Stop => {
                state.snake.turn(Direction::Stopped);
            }
            SnakeCommand::Reset => {
                log::debug!("Snake game reset");
                state.reset();
            }
        }
    }

    let Some(vacated) = state.snake.advance() else {
        return events;
    };
    events.moved = true;

    let arena = IVec2::new(ARENA_WIDTH, ARENA_HEIGHT);
    let cause = if head_hits_wall(&state.snake, arena, CELL_SIZE) {
        Some(DeathCause::Wall)
    } else if head_hits_body(&state.snake, CELL_SIZE) {
        Some(DeathCause::OwnBody)
    } else {
        None
    };

    if let Some(cause) = cause {
        log::info!(
            "Snake died ({:?}) with score {}",
            cause,
            state.score.points()
        );
        state.die();
        events.died = Some(cause);
        return events;
    }

    let ate = state
        .food
        .is_some_and(|food| head_hits_food(&state.snake, food, CELL_SIZE));
    if ate {
        state.snake.grow(vacated);
        state.score.increase();
        state.spawn_food();
        events.ate = true;
        log::debug!("Snake grew to length {}", state.snake.body.len());
    }

    events
}
