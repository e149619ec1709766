//! Pong game state and bodies

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::error::ConfigError;
use crate::settings::PongSettings;
use crate::sim::{FrameCadence, Phase, PhaseTag, seeded_rng};

/// A player, identified by the side of the field they defend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of an x velocity pointing toward this side
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A paddle: axis-aligned box that slides vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame while held
    pub speed: f32,
}

impl Paddle {
    /// Paddle on `side`, vertically centred
    pub fn new(side: Side, settings: &PongSettings) -> Self {
        let x = match side {
            Side::Left => settings.paddle_margin,
            Side::Right => settings.field_width - settings.paddle_margin - settings.paddle_width,
        };
        Self {
            pos: Vec2::new(x, settings.field_height / 2.0 - settings.paddle_height / 2.0),
            size: Vec2::new(settings.paddle_width, settings.paddle_height),
            speed: settings.paddle_speed,
        }
    }

    /// Apply held input, then clamp to `[0, field_height - height]`
    pub fn drive(&mut self, up: bool, down: bool, field_height: f32) {
        if up {
            self.pos.y -= self.speed;
        }
        if down {
            self.pos.y += self.speed;
        }
        self.pos.y = self.pos.y.clamp(0.0, field_height - self.size.y);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at field centre heading toward `toward` at the start speed, at a
    /// random angle inside the serve cone
    pub fn serve<R: Rng>(rng: &mut R, settings: &PongSettings, toward: Side) -> Self {
        let cone = settings.serve_cone_deg;
        let angle = rng.random_range(-cone..cone).to_radians();
        let speed = settings.ball_speed_start;
        Self {
            pos: Vec2::new(settings.field_width / 2.0, settings.field_height / 2.0),
            vel: Vec2::new(angle.cos() * speed * toward.sign(), angle.sin() * speed),
            radius: settings.ball_radius,
        }
    }

    /// Constant-velocity move for one step
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Points per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add a point for `side`, returning its new total
    pub fn award(&mut self, side: Side) -> u32 {
        let points = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *points += 1;
        *points
    }
}

/// Render snapshot for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PongSnapshot {
    pub phase: PhaseTag,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Vec2,
    pub ball_radius: f32,
    pub scores: Scoreboard,
    pub winner: Option<Side>,
}

/// Complete pong state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, PartialEq)]
pub struct PongGame {
    pub settings: PongSettings,
    /// Seed every session starts from
    pub seed: u64,
    pub rng: Pcg32,
    /// The winner is carried by the terminal phase
    pub phase: Phase<Side>,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub scores: Scoreboard,
    /// Continuous simulation: steps every frame
    pub cadence: FrameCadence,
    /// Simulation steps taken this session
    pub steps: u64,
}

impl PongGame {
    /// Build a game sitting in the menu
    pub fn new(settings: PongSettings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let mut rng = seeded_rng(seed);
        let mut game = Self {
            left: Paddle::new(Side::Left, &settings),
            right: Paddle::new(Side::Right, &settings),
            ball: Ball::serve(&mut rng, &settings, Side::Right),
            rng,
            settings,
            seed,
            phase: Phase::Menu,
            scores: Scoreboard::default(),
            cadence: FrameCadence::every_frame(),
            steps: 0,
        };
        game.reset_session();
        Ok(game)
    }

    /// Seed used by the next session start
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Reinitialise paddles, scores and ball and enter Playing
    pub fn start_session(&mut self) {
        self.reset_session();
        self.phase = Phase::Playing;
        log::info!("Pong session started (seed {})", self.seed);
    }

    fn reset_session(&mut self) {
        self.rng = seeded_rng(self.seed);
        self.left = Paddle::new(Side::Left, &self.settings);
        self.right = Paddle::new(Side::Right, &self.settings);
        self.scores = Scoreboard::default();
        self.cadence = FrameCadence::every_frame();
        self.steps = 0;
        self.serve(Side::Right);
    }

    /// Recentre the ball and serve it toward `toward`
    pub fn serve(&mut self, toward: Side) {
        self.ball = Ball::serve(&mut self.rng, &self.settings, toward);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn snapshot(&self) -> PongSnapshot {
        PongSnapshot {
            phase: self.phase.tag(),
            left_paddle: self.left.rect(),
            right_paddle: self.right.rect(),
            ball: self.ball.pos,
            ball_radius: self.ball.radius,
            scores: self.scores,
            winner: self.phase.outcome(),
        }
    }
}
