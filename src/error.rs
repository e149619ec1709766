//! Configuration errors
//!
//! The simulation itself has no recoverable failures: collisions and wins are
//! phase transitions, not errors. What can go wrong is a bad set of constants,
//! and that is rejected before a game is ever built.

use thiserror::Error;

/// Errors raised when loading or validating game settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: i32, height: i32 },

    #[error("initial snake length must be at least 1")]
    EmptySnake,

    #[error("snake capacity {capacity} is smaller than its initial length {initial}")]
    CapacityBelowInitialLength { capacity: usize, initial: usize },

    #[error("initial snake of length {length} does not fit left of the centre column in a grid {width} wide")]
    SnakeDoesNotFit { length: usize, width: i32 },

    #[error("movement cadence floor must be at least one frame")]
    CadenceFloorBelowOne,

    #[error("movement cadence floor {floor} is above the initial cadence {initial}")]
    CadenceFloorAboveInitial { floor: u32, initial: u32 },

    #[error("field must have positive size, got {width}x{height}")]
    EmptyField { width: f32, height: f32 },

    #[error("paddle {width}x{height} does not fit a field {field_height} high")]
    PaddleDoesNotFit {
        width: f32,
        height: f32,
        field_height: f32,
    },

    #[error("paddles at margin {margin} and width {width} do not fit their halves of a field {field_width} wide")]
    PaddlesOverlap {
        margin: f32,
        width: f32,
        field_width: f32,
    },

    #[error("paddle speed must be finite and non-negative, got {0}")]
    PaddleSpeed(f32),

    #[error("ball of radius {radius} does not fit a field {field_height} high")]
    BallDoesNotFit { radius: f32, field_height: f32 },

    #[error("ball speed range [{start}, {max}] is invalid")]
    BallSpeedRange { start: f32, max: f32 },

    #[error("ball speed increase must be non-negative, got {0}")]
    NegativeSpeedIncrease(f32),

    #[error("ball radius must be positive, got {0}")]
    BallRadius(f32),

    #[error("{name} must lie strictly between 0 and 90 degrees, got {degrees}")]
    AngleOutOfRange { name: &'static str, degrees: f32 },

    #[error("winning score must be at least 1")]
    ZeroWinningScore,

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}
