//! Game settings
//!
//! Every tunable number of both games, loadable from a JSON file. Missing
//! fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{pong, snake};
use crate::error::ConfigError;

/// Snake tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    /// Field width in cells
    pub grid_width: i32,
    /// Field height in cells
    pub grid_height: i32,
    /// Maximum number of body segments
    pub max_length: usize,
    /// Segments at session start
    pub initial_length: usize,
    /// Frames between moves at session start
    pub initial_cadence: u32,
    /// Fastest cadence reachable by eating
    pub min_cadence: u32,
    /// Points per food item
    pub food_score: u32,
    /// Random draws before the spawner scans for a free cell
    pub spawn_attempts: u32,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_width: snake::GRID_WIDTH,
            grid_height: snake::GRID_HEIGHT,
            max_length: snake::MAX_LENGTH,
            initial_length: snake::INITIAL_LENGTH,
            initial_cadence: snake::INITIAL_CADENCE,
            min_cadence: snake::MIN_CADENCE,
            food_score: snake::FOOD_SCORE,
            spawn_attempts: snake::SPAWN_ATTEMPTS,
        }
    }
}

impl SnakeSettings {
    /// Reject constant combinations the simulation cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < 1 || self.grid_height < 1 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.initial_length == 0 {
            return Err(ConfigError::EmptySnake);
        }
        if self.max_length < self.initial_length {
            return Err(ConfigError::CapacityBelowInitialLength {
                capacity: self.max_length,
                initial: self.initial_length,
            });
        }
        // The starting body runs left from the centre column, and food needs
        // at least one free cell.
        let room = usize::try_from(self.grid_width / 2 + 1).unwrap_or(0);
        let cells = self.grid_width as usize * self.grid_height as usize;
        if self.initial_length > room || self.initial_length >= cells {
            return Err(ConfigError::SnakeDoesNotFit {
                length: self.initial_length,
                width: self.grid_width,
            });
        }
        if self.min_cadence < 1 {
            return Err(ConfigError::CadenceFloorBelowOne);
        }
        if self.min_cadence > self.initial_cadence {
            return Err(ConfigError::CadenceFloorAboveInitial {
                floor: self.min_cadence,
                initial: self.initial_cadence,
            });
        }
        Ok(())
    }
}

/// Pong tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongSettings {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its side wall
    pub paddle_margin: f32,
    /// Pixels per frame while held
    pub paddle_speed: f32,
    pub ball_radius: f32,
    /// Serve speed, also the lower speed bound
    pub ball_speed_start: f32,
    pub ball_speed_max: f32,
    /// Speed gained per paddle return
    pub ball_speed_increase: f32,
    pub winning_score: u32,
    /// Half-angle of the random serve cone (degrees)
    pub serve_cone_deg: f32,
    /// Return angle at the paddle's extreme ends (degrees)
    pub deflection_deg: f32,
}

impl Default for PongSettings {
    fn default() -> Self {
        Self {
            field_width: pong::FIELD_WIDTH,
            field_height: pong::FIELD_HEIGHT,
            paddle_width: pong::PADDLE_WIDTH,
            paddle_height: pong::PADDLE_HEIGHT,
            paddle_margin: pong::PADDLE_MARGIN,
            paddle_speed: pong::PADDLE_SPEED,
            ball_radius: pong::BALL_RADIUS,
            ball_speed_start: pong::BALL_SPEED_START,
            ball_speed_max: pong::BALL_SPEED_MAX,
            ball_speed_increase: pong::BALL_SPEED_INCREASE,
            winning_score: pong::WINNING_SCORE,
            serve_cone_deg: pong::SERVE_CONE_DEG,
            deflection_deg: pong::DEFLECTION_DEG,
        }
    }
}

impl PongSettings {
    /// Reject constant combinations the simulation cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = self.field_width.is_finite() && self.field_height.is_finite();
        if !(finite && self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(ConfigError::EmptyField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !(self.paddle_width > 0.0
            && self.paddle_height > 0.0
            && self.paddle_height <= self.field_height)
        {
            return Err(ConfigError::PaddleDoesNotFit {
                width: self.paddle_width,
                height: self.paddle_height,
                field_height: self.field_height,
            });
        }
        // Each paddle keeps to its own half, face clear of the centre line
        if !(self.paddle_margin >= 0.0
            && self.paddle_margin + self.paddle_width < self.field_width / 2.0)
        {
            return Err(ConfigError::PaddlesOverlap {
                margin: self.paddle_margin,
                width: self.paddle_width,
                field_width: self.field_width,
            });
        }
        if !(self.paddle_speed.is_finite() && self.paddle_speed >= 0.0) {
            return Err(ConfigError::PaddleSpeed(self.paddle_speed));
        }
        if !(self.ball_radius > 0.0) {
            return Err(ConfigError::BallRadius(self.ball_radius));
        }
        if self.ball_radius * 2.0 > self.field_height {
            return Err(ConfigError::BallDoesNotFit {
                radius: self.ball_radius,
                field_height: self.field_height,
            });
        }
        if !(self.ball_speed_start > 0.0
            && self.ball_speed_start <= self.ball_speed_max
            && self.ball_speed_max.is_finite())
        {
            return Err(ConfigError::BallSpeedRange {
                start: self.ball_speed_start,
                max: self.ball_speed_max,
            });
        }
        if !(self.ball_speed_increase >= 0.0) {
            return Err(ConfigError::NegativeSpeedIncrease(self.ball_speed_increase));
        }
        for (name, degrees) in [
            ("serve cone", self.serve_cone_deg),
            ("deflection", self.deflection_deg),
        ] {
            if !(degrees > 0.0 && degrees < 90.0) {
                return Err(ConfigError::AngleOutOfRange { name, degrees });
            }
        }
        if self.winning_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }
        Ok(())
    }
}

/// Settings for both games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub snake: SnakeSettings,
    pub pong: PongSettings,
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON (for writing a template file)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.snake.validate()?;
        self.pong.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "snake": { "grid_width": 20 }, "pong": { "winning_score": 3 } }"#)
                .unwrap();
        assert_eq!(settings.snake.grid_width, 20);
        assert_eq!(settings.snake.grid_height, snake::GRID_HEIGHT);
        assert_eq!(settings.pong.winning_score, 3);
        assert_eq!(settings.pong.paddle_height, pong::PADDLE_HEIGHT);
    }

    #[test]
    fn test_json_roundtrip() {
        let json = Settings::default().to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_cadence_floor_below_one() {
        let settings = SnakeSettings {
            min_cadence: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::CadenceFloorBelowOne)
        ));
    }

    #[test]
    fn test_capacity_below_initial_length() {
        let settings = SnakeSettings {
            max_length: 2,
            initial_length: 3,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::CapacityBelowInitialLength { .. })
        ));
    }

    #[test]
    fn test_snake_must_fit_grid() {
        let settings = SnakeSettings {
            grid_width: 4,
            initial_length: 4,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::SnakeDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_ball_speed_range() {
        let settings = PongSettings {
            ball_speed_start: 15.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::BallSpeedRange { .. })
        ));
    }

    #[test]
    fn test_deflection_angle_range() {
        let settings = PongSettings {
            deflection_deg: 90.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::AngleOutOfRange { name: "deflection", .. })
        ));
    }

    #[test]
    fn test_ball_must_fit_between_walls() {
        let settings = PongSettings {
            ball_radius: 400.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::BallDoesNotFit { .. })
        ));
        // Exactly the field height still fits
        let settings = PongSettings {
            ball_radius: 300.0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_paddle_speed_must_be_finite() {
        for speed in [f32::NAN, f32::INFINITY, -1.0] {
            let settings = PongSettings {
                paddle_speed: speed,
                ..Default::default()
            };
            assert!(matches!(
                settings.validate(),
                Err(ConfigError::PaddleSpeed(_))
            ));
        }
    }

    #[test]
    fn test_paddles_keep_to_their_half() {
        let settings = PongSettings {
            paddle_margin: 5000.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::PaddlesOverlap { .. })
        ));
        let settings = PongSettings {
            paddle_margin: 385.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::PaddlesOverlap { .. })
        ));
        let settings = PongSettings {
            paddle_margin: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::PaddlesOverlap { .. })
        ));
    }

    #[test]
    fn test_zero_winning_score() {
        let settings = PongSettings {
            winning_score: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::ZeroWinningScore)));
    }
}
