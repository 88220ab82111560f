//! Point counter shared by the ball and snake games

use serde::{Deserialize, Serialize};

/// A non-negative point counter
///
/// Owns only the number; turning it into a label is the renderer's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Add exactly one point
    pub fn increase(&mut self) {
        self.points = self.points.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.points = 0;
    }
}
