//! Snake state and grid motion
//!
//! Positions are top-left pixel corners of grid cells, so every coordinate is
//! a multiple of `CELL_SIZE`.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::snake::*;
use crate::sim::Score;

/// Heading of the snake
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Stopped,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Direction that would fold the head back onto the neck
    pub fn opposite(self) -> Self {
        match self {
            Direction::Stopped => Direction::Stopped,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// One-cell displacement in pixels
    pub fn step(self) -> IVec2 {
        match self {
            Direction::Stopped => IVec2::ZERO,
            Direction::Up => IVec2::new(0, -CELL_SIZE),
            Direction::Down => IVec2::new(0, CELL_SIZE),
            Direction::Left => IVec2::new(-CELL_SIZE, 0),
            Direction::Right => IVec2::new(CELL_SIZE, 0),
        }
    }
}

/// The snake: a head plus trailing segments (index 0 sits next to the head)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    pub head: IVec2,
    pub body: Vec<IVec2>,
    pub direction: Direction,
    /// Direction of the last step actually taken (guards reversals)
    pub last_step: Direction,
}

impl Snake {
    pub fn new(head: IVec2) -> Self {
        Self {
            head,
            body: Vec::new(),
            direction: Direction::Stopped,
            last_step: Direction::Stopped,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.direction != Direction::Stopped
    }

    /// Request a new heading
    ///
    /// Ignored when it would reverse into the segment behind the head.
    /// Returns whether the heading was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !self.body.is_empty()
            && direction != Direction::Stopped
            && direction == self.last_step.opposite()
        {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Shift the body forward and step the head one cell
    ///
    /// Returns the cell the tail vacated (the old head when there is no body),
    /// which is where a new segment grows. No-op when stopped.
    pub fn advance(&mut self) -> Option<IVec2> {
        if !self.is_moving() {
            return None;
        }
        let vacated = self.body.last().copied().unwrap_or(self.head);
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        if let Some(neck) = self.body.first_mut() {
            *neck = self.head;
        }
        self.head += self.direction.step();
        self.last_step = self.direction;
        Some(vacated)
    }

    /// Append one segment at the given cell
    pub fn grow(&mut self, at: IVec2) {
        self.body.push(at);
    }

    /// True if the head or any segment sits on the cell
    pub fn occupies(&self, cell: IVec2) -> bool {
        self.head == cell || self.body.contains(&cell)
    }
}

/// Complete snake game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeState {
    /// Seed the game was built from (a full reset replays it)
    pub seed: u64,
    pub snake: Snake,
    /// `None` only when the snake fills the whole board
    pub food: Option<IVec2>,
    pub score: Score,
    #[serde(skip, default = "detached_rng")]
    rng: Pcg32,
}

impl SnakeState {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let head = random_cell(&mut rng);
        let mut state = Self {
            seed,
            snake: Snake::new(head),
            food: None,
            score: Score::new(),
            rng,
        };
        state.spawn_food();
        state
    }

    /// Place food on a random cell the snake does not cover
    pub fn spawn_food(&mut self) {
        let free: Vec<IVec2> = all_cells().filter(|c| !self.snake.occupies(*c)).collect();
        self.food = if free.is_empty() {
            None
        } else {
            Some(free[self.rng.random_range(0..free.len())])
        };
    }

    /// End of a life: body cleared, head respawned, food moved, score zeroed
    pub fn die(&mut self) {
        let head = random_cell(&mut self.rng);
        self.snake = Snake::new(head);
        self.score.reset();
        self.spawn_food();
    }

    /// Full reset to construction-time values (same seed, same spawn)
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
    }
}

/// Pick any grid cell
fn random_cell(rng: &mut Pcg32) -> IVec2 {
    IVec2::new(
        rng.random_range(0..COLUMNS) * CELL_SIZE,
        rng.random_range(0..ROWS) * CELL_SIZE,
    )
}

fn all_cells() -> impl Iterator<Item = IVec2> {
    (0..ROWS).flat_map(|row| (0..COLUMNS).map(move |col| IVec2::new(col, row) * CELL_SIZE))
}

fn detached_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}
