//! Arcade Sim - deterministic simulation cores for two arcade games
//!
//! Core modules:
//! - `sim`: Shared skeleton (phase controller, frame cadence)
//! - `snake`: Grid Snake (discrete cells, fixed-rate steps)
//! - `pong`: Two-player Pong (continuous bodies, per-frame steps)
//! - `settings`: Data-driven game configuration
//!
//! Rendering, windowing and input polling are left to the host. Each frame the
//! host hands the core an input snapshot and reads back a render snapshot.

pub mod error;
pub mod pong;
pub mod settings;
pub mod sim;
pub mod snake;

pub use error::ConfigError;
pub use settings::{PongSettings, Settings, SnakeSettings};

/// Game configuration constants
pub mod consts {
    /// Nominal host frame rate the cadences are tuned for
    pub const TARGET_FPS: u32 = 60;

    /// Snake defaults
    pub mod snake {
        /// Pixel size of one grid cell (render hint only)
        pub const CELL_SIZE: u32 = 20;
        pub const GRID_WIDTH: i32 = 800 / CELL_SIZE as i32; // 40 cells
        pub const GRID_HEIGHT: i32 = 600 / CELL_SIZE as i32; // 30 cells
        pub const MAX_LENGTH: usize = 300;
        pub const INITIAL_LENGTH: usize = 3;
        /// Frames between moves at session start (lower = faster)
        pub const INITIAL_CADENCE: u32 = 15;
        /// Fastest possible cadence
        pub const MIN_CADENCE: u32 = 5;
        pub const FOOD_SCORE: u32 = 10;
        /// Random draws before the spawner falls back to a free-cell scan
        pub const SPAWN_ATTEMPTS: u32 = 64;
    }

    /// Pong defaults
    pub mod pong {
        pub const FIELD_WIDTH: f32 = 800.0;
        pub const FIELD_HEIGHT: f32 = 600.0;
        pub const PADDLE_WIDTH: f32 = 15.0;
        pub const PADDLE_HEIGHT: f32 = 80.0;
        /// Gap between a paddle and its side of the field
        pub const PADDLE_MARGIN: f32 = 30.0;
        /// Pixels per frame while a key is held
        pub const PADDLE_SPEED: f32 = 6.0;
        pub const BALL_RADIUS: f32 = 8.0;
        pub const BALL_SPEED_START: f32 = 5.0;
        pub const BALL_SPEED_MAX: f32 = 12.0;
        /// Speed added on every paddle return
        pub const BALL_SPEED_INCREASE: f32 = 0.5;
        pub const WINNING_SCORE: u32 = 5;
        /// Serve angle is drawn from ±this many degrees around the horizontal
        pub const SERVE_CONE_DEG: f32 = 30.0;
        /// Return angle spans ±this many degrees from paddle top to bottom
        pub const DEFLECTION_DEG: f32 = 30.0;
    }
}
