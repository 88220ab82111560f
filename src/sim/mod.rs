//! Deterministic simulation module
//!
//! All gameplay logic lives here. Each variant splits into the same parts:
//! - `state`: entities and their motion steps
//! - `collision`: pure predicates over entity snapshots
//! - `tick`: input decoding and the per-tick state machine
//!
//! No rendering, timing or platform dependencies.

pub mod pong;
pub mod score;
pub mod snake;
pub mod tictactoe;

pub use pong::PongState;
pub use score::Score;
pub use snake::SnakeState;
pub use tictactoe::TicTacToeState;
