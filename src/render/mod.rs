//! Draw-command output
//!
//! The simulation never touches pixels. Each tick it is turned into a list of
//! shapes that a rendering backend can paint in order.

pub mod canvas;
pub mod pong;
pub mod snake;
pub mod tictactoe;

pub use canvas::Canvas;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Which point of a text label `pos` refers to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    TopLeft,
    /// Horizontally centered on `pos.x`, top at `pos.y`
    TopCenter,
}

/// One shape to paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Axis-aligned rectangle, `pos` is the top-left corner
    Rect { pos: Vec2, size: Vec2, color: Color },
    /// Filled circle, or a ring of the given stroke width
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<f32>,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Text {
        label: String,
        pos: Vec2,
        size: f32,
        #[serde(default)]
        anchor: Anchor,
        color: Color,
    },
}

/// Everything drawn for one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub commands: Vec<DrawCommand>,
}
