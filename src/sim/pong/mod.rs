//! Two-paddle ball game

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    Wall, ball_hits_left_paddle, ball_hits_right_paddle, ball_hits_wall, ball_wall_contact,
    goal_for_left, goal_for_right,
};
pub use state::{Ball, GamePhase, Paddle, PaddleMotion, PongState, Side};
pub use tick::{PongCommand, TickEvents, TickInput, tick};
