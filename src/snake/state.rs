//! Snake game state
//!
//! Everything a session needs lives in [`SnakeGame`], owned by the host loop
//! and handed to [`super::tick`] once per frame.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction, Grid};
use super::spawn::place_food;
use crate::error::ConfigError;
use crate::settings::SnakeSettings;
use crate::sim::{FrameCadence, Phase, PhaseTag, seeded_rng};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cause {
    /// Head left the field
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// No free cell left for food
    FieldFull,
}

/// Outcome carried by the terminal phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub cause: Cause,
    pub score: u32,
    pub length: usize,
}

/// The snake: an ordered chain of cells, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Cell>,
    capacity: usize,
    /// Direction used by the last step
    direction: Direction,
    /// Buffered turn, committed at the start of the next step
    next_direction: Direction,
}

impl Snake {
    /// Straight snake with its head at `head`, trailing to the left, facing right
    pub fn new(head: Cell, length: usize, capacity: usize) -> Self {
        let length = length.max(1);
        let body = (0..length as i32)
            .map(|i| Cell::new(head.x - i, head.y))
            .collect();
        Self::from_cells(body, Direction::Right, capacity)
    }

    /// Snake from explicit cells (head first). Capacity is raised to fit.
    ///
    /// An empty list yields a one-cell snake at the origin.
    pub fn from_cells(cells: Vec<Cell>, direction: Direction, capacity: usize) -> Self {
        let capacity = capacity.max(cells.len()).max(1);
        let mut body = Vec::with_capacity(capacity);
        body.extend(cells);
        if body.is_empty() {
            body.push(Cell::new(0, 0));
        }
        Self {
            body,
            capacity,
            direction,
            next_direction: direction,
        }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    /// Buffer a turn. A reversal of the committed direction is rejected.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir == self.direction.opposite() {
            return false;
        }
        self.next_direction = dir;
        true
    }

    /// Latch the buffered turn for the step about to run
    pub fn commit_direction(&mut self) -> Direction {
        self.direction = self.next_direction;
        self.direction
    }

    /// Shift every segment onto its predecessor and move the head one cell
    pub fn advance(&mut self, dir: Direction) {
        let head = self.head().step(dir);
        let len = self.body.len();
        self.body.copy_within(0..len - 1, 1);
        self.body[0] = head;
    }

    /// Append a segment on top of the tail; it separates on the next advance.
    ///
    /// Returns false at capacity.
    pub fn grow(&mut self) -> bool {
        if self.body.len() >= self.capacity {
            log::debug!("Snake at capacity {}, not growing", self.capacity);
            return false;
        }
        self.body.push(self.tail());
        true
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}

/// Render snapshot for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeSnapshot {
    pub phase: PhaseTag,
    /// Occupied cells, head first
    pub cells: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub length: usize,
    /// 1 at session start, +1 per cadence step gained
    pub speed_level: u32,
    pub game_over: Option<GameOver>,
}

/// Complete snake game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeGame {
    pub settings: SnakeSettings,
    pub grid: Grid,
    /// Seed every session starts from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: Phase<GameOver>,
    pub snake: Snake,
    pub food: Option<Cell>,
    pub score: u32,
    pub cadence: FrameCadence,
    /// Simulation steps taken this session
    pub steps: u64,
}

impl SnakeGame {
    /// Build a game sitting in the menu
    pub fn new(settings: SnakeSettings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let grid = Grid::new(settings.grid_width, settings.grid_height);
        let mut game = Self {
            rng: seeded_rng(seed),
            snake: Snake::new(grid.center(), settings.initial_length, settings.max_length),
            cadence: FrameCadence::new(settings.initial_cadence, settings.min_cadence),
            settings,
            grid,
            seed,
            phase: Phase::Menu,
            food: None,
            score: 0,
            steps: 0,
        };
        game.reset_session();
        Ok(game)
    }

    /// Seed used by the next session start
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Reinitialise snake, food, score and cadence and enter Playing
    pub fn start_session(&mut self) {
        self.reset_session();
        self.phase = Phase::Playing;
        log::info!("Snake session started (seed {})", self.seed);
    }

    fn reset_session(&mut self) {
        self.rng = seeded_rng(self.seed);
        self.snake = Snake::new(
            self.grid.center(),
            self.settings.initial_length,
            self.settings.max_length,
        );
        self.cadence = FrameCadence::new(self.settings.initial_cadence, self.settings.min_cadence);
        self.score = 0;
        self.steps = 0;
        self.food = place_food(
            &mut self.rng,
            &self.grid,
            self.snake.body(),
            self.settings.spawn_attempts,
        );
    }

    /// HUD speed: 1 at the initial cadence, rising as the cadence shortens
    pub fn speed_level(&self) -> u32 {
        self.settings.initial_cadence - self.cadence.threshold() + 1
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            phase: self.phase.tag(),
            cells: self.snake.body().to_vec(),
            food: self.food,
            score: self.score,
            length: self.snake.len(),
            speed_level: self.speed_level(),
            game_over: self.phase.outcome(),
        }
    }
}
