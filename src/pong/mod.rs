//! Two-player Pong
//!
//! Continuous simulation: positions and velocities are floats, one step per
//! frame, first to the winning score takes the match.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap};
pub use state::{Ball, Paddle, PongGame, PongSnapshot, Scoreboard, Side};
pub use tick::{PongInput, idle_input, step, tick};
