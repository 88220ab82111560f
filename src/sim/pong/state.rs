//! Ball game state and entity motion

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::pong::*;
use crate::sim::Score;

/// Current phase of the ball game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball at rest in the center, waiting for the start key
    Idle,
    /// Ball and paddles advance every tick
    Playing,
}

/// Which side of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Vertical motion requested for a paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleMotion {
    #[default]
    Idle,
    Up,
    Down,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: arena_center(),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// A ball at the given position with the standard radius, at rest
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    /// Radius never changes after construction
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Give the ball its launch velocity
    pub fn launch(&mut self) {
        self.vel = Vec2::new(BALL_LAUNCH_DX, BALL_LAUNCH_DY);
    }

    /// Advance by one tick of velocity (no-op while at rest)
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Reflect off a paddle face
    pub fn bounce_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Reflect off the top or bottom wall
    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Back to the center, at rest
    pub fn restart(&mut self) {
        self.pos = arena_center();
        self.vel = Vec2::ZERO;
    }
}

/// A player's paddle (axis-aligned rectangle, `pos` is its top-left corner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub motion: PaddleMotion,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => ARENA_WIDTH - PADDLE_WIDTH - PADDLE_MARGIN,
        };
        Self {
            side,
            pos: Vec2::new(x, rest_y()),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            motion: PaddleMotion::Idle,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Step vertically according to the motion state
    pub fn advance(&mut self) {
        match self.motion {
            PaddleMotion::Idle => {}
            PaddleMotion::Up => self.pos.y -= PADDLE_SPEED,
            PaddleMotion::Down => self.pos.y += PADDLE_SPEED,
        }
    }

    /// Saturate into `[0, arena_height - height]`; must follow every `advance`
    pub fn clamp_to_arena(&mut self, arena_height: f32) {
        let max_y = (arena_height - self.size.y).max(0.0);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }

    /// Back to mid-height, not moving
    pub fn restart(&mut self) {
        self.pos.y = rest_y();
        self.motion = PaddleMotion::Idle;
    }
}

/// Complete ball game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PongState {
    pub phase: GamePhase,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    /// Points for the left player (scored past the right edge)
    pub left_score: Score,
    /// Points for the right player (scored past the left edge)
    pub right_score: Score,
}

impl Default for PongState {
    fn default() -> Self {
        Self::new()
    }
}

impl PongState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            ball: Ball::default(),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            left_score: Score::new(),
            right_score: Score::new(),
        }
    }

    pub fn score(&self, side: Side) -> Score {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    /// Re-center the ball and paddles after a goal; scores are kept
    pub fn restart_round(&mut self) {
        self.ball.restart();
        self.left.restart();
        self.right.restart();
        self.phase = GamePhase::Idle;
    }

    /// Full reset to construction-time values
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn arena_center() -> Vec2 {
    Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0)
}

fn rest_y() -> f32 {
    ARENA_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0
}
