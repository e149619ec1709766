//! Grid Snake
//!
//! Discrete simulation: the snake moves one cell per step, and steps fire on a
//! frame cadence that shortens with every food item eaten.

pub mod collision;
pub mod grid;
pub mod spawn;
pub mod state;
pub mod tick;

pub use grid::{Cell, Direction, Grid};
pub use spawn::place_food;
pub use state::{Cause, GameOver, Snake, SnakeGame, SnakeSnapshot};
pub use tick::{SnakeInput, idle_input, step, tick};
