//! Arcade Trio - fixed-step kernels for three small arcade games
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, scoring, game state)
//! - `render`: Draw-command scenes built from simulation state
//! - `input`: Logical input events consumed by the simulation
//! - `driver`: Tick loop that connects input, simulation and a frame sink
//! - `settings`: Runtime driver settings

pub mod driver;
pub mod game;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use input::{InputEvent, KeyCode};
pub use render::{Color, DrawCommand, Frame};
pub use settings::{Settings, Variant};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// One display refresh at 60 Hz
    pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

    /// Two-paddle ball game
    pub mod pong {
        pub const ARENA_WIDTH: f32 = 900.0;
        pub const ARENA_HEIGHT: f32 = 500.0;

        pub const BALL_RADIUS: f32 = 15.0;
        /// Launch velocity in pixels per tick
        pub const BALL_LAUNCH_DX: f32 = 10.0;
        pub const BALL_LAUNCH_DY: f32 = 5.0;

        pub const PADDLE_WIDTH: f32 = 20.0;
        pub const PADDLE_HEIGHT: f32 = 120.0;
        /// Gap between a paddle and its side of the arena
        pub const PADDLE_MARGIN: f32 = 15.0;
        /// Paddle step in pixels per tick
        pub const PADDLE_SPEED: f32 = 10.0;

        pub const CENTER_LINE_WIDTH: f32 = 5.0;
        pub const SCORE_TEXT_SIZE: f32 = 80.0;
        pub const SCORE_TEXT_Y: f32 = 15.0;
    }

    /// Self-growing snake on a square grid
    pub mod snake {
        use std::time::Duration;

        pub const ARENA_WIDTH: i32 = 640;
        pub const ARENA_HEIGHT: i32 = 640;
        pub const CELL_SIZE: i32 = 32;
        pub const COLUMNS: i32 = ARENA_WIDTH / CELL_SIZE;
        pub const ROWS: i32 = ARENA_HEIGHT / CELL_SIZE;

        /// Grid cadence is slower than the display refresh
        pub const TICK_INTERVAL: Duration = Duration::from_millis(150);

        /// Blue channel lost per body segment (shading toward black)
        pub const BODY_SHADE_STEP: u8 = 5;
        pub const SCORE_TEXT_SIZE: f32 = 30.0;
    }

    /// 3x3 turn-based grid
    pub mod tictactoe {
        pub const BOARD_SIZE: usize = 3;
        pub const WIDTH: f32 = 600.0;
        pub const HEIGHT: f32 = 600.0;
        pub const SQUARE_SIZE: f32 = 200.0;

        pub const LINE_WIDTH: f32 = 13.0;
        /// Inset of grid lines from the board edge
        pub const GRID_INSET: f32 = 15.0;
        /// Inset of diagonal winning lines from the board corners
        pub const DIAGONAL_INSET: f32 = 30.0;
        pub const CIRCLE_RADIUS: f32 = 60.0;
        pub const CIRCLE_WIDTH: f32 = 13.0;
        pub const CROSS_WIDTH: f32 = 20.0;
        /// Padding between a cross and its square's edges
        pub const CROSS_SPACE: f32 = 55.0;
    }
}
