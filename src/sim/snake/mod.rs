//! Self-growing snake on a grid

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{head_hits_body, head_hits_food, head_hits_wall};
pub use state::{Direction, Snake, SnakeState};
pub use tick::{DeathCause, SnakeCommand, TickEvents, TickInput, tick};
