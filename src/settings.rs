//! Driver settings
//!
//! Arena sizes and speeds are compile-time constants. These are only the knobs
//! of the outer loop: which game runs, how it is seeded and paced.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Which game the driver runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Pong,
    Snake,
    TicTacToe,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Pong => "pong",
            Variant::Snake => "snake",
            Variant::TicTacToe => "tictactoe",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pong" => Some(Variant::Pong),
            "snake" => Some(Variant::Snake),
            "tictactoe" | "tic-tac-toe" | "ttt" => Some(Variant::TicTacToe),
            _ => None,
        }
    }
}

/// Runtime settings for one driver run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: Variant,
    /// Seed for snake spawns and food placement
    pub seed: u64,
    /// Stop after this many ticks even without a quit event
    pub max_ticks: Option<u64>,
    /// Sleep the tick interval between ticks
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Pong,
            seed: 0,
            max_ticks: None,
            realtime: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid settings JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
