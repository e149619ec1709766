//! Collision detection and response for the pong field
//!
//! Pure functions: a circle against axis-aligned boxes and the horizontal
//! walls, plus the paddle return that re-aims the ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Side};
use crate::settings::PongSettings;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Point of the rectangle closest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max())
    }
}

/// Circle vs rectangle overlap (touching counts)
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.distance_squared(rect.closest_point(center)) <= radius * radius
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Bounce the ball off the top and bottom walls.
///
/// The ball is pushed back inside in the same step so it can never sit past a
/// wall for more than one frame. Returns true on a bounce.
pub fn bounce_off_walls(ball: &mut Ball, field_height: f32) -> bool {
    let (normal, limit) = if ball.pos.y - ball.radius <= 0.0 {
        (Vec2::Y, ball.radius)
    } else if ball.pos.y + ball.radius >= field_height {
        (Vec2::NEG_Y, field_height - ball.radius)
    } else {
        return false;
    };

    // Only reflect when heading into the wall; a ball already leaving keeps going
    if ball.vel.dot(normal) < 0.0 {
        ball.vel = reflect_velocity(ball.vel, normal);
    }
    ball.pos.y = if normal.y > 0.0 {
        ball.pos.y.max(limit)
    } else {
        ball.pos.y.min(limit)
    };
    true
}

/// Normalised hit position along the paddle: 0.0 at the top, 1.0 at the bottom
pub fn hit_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    ((ball.pos.y - paddle.pos.y) / paddle.size.y).clamp(0.0, 1.0)
}

/// Return the ball off the paddle defending `side`.
///
/// Only fires while the ball moves toward that paddle, so an overlap that
/// survives into the next frame cannot trigger twice. The outgoing angle comes
/// from where the ball struck (±deflection from top to bottom), the speed
/// grows by the configured increment and stays within
/// `[ball_speed_start, ball_speed_max]`, and the ball is placed just outside
/// the paddle's face.
pub fn return_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side, settings: &PongSettings) -> bool {
    let approaching = ball.vel.x * side.sign() > 0.0;
    if !approaching || !circle_rect_overlap(ball.pos, ball.radius, &paddle.rect()) {
        return false;
    }

    let offset = hit_offset(ball, paddle);
    let angle = (offset - 0.5) * 2.0 * settings.deflection_deg.to_radians();
    let speed = (ball.speed() + settings.ball_speed_increase)
        .clamp(settings.ball_speed_start, settings.ball_speed_max);
    let away = side.opponent().sign();

    ball.vel = Vec2::new(angle.cos() * speed * away, angle.sin() * speed);
    ball.pos.x = match side {
        Side::Left => paddle.pos.x + paddle.size.x + ball.radius,
        Side::Right => paddle.pos.x - ball.radius,
    };
    true
}

/// Side that scores when the ball has left the field horizontally
pub fn scoring_side(ball: &Ball, field_width: f32) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > field_width {
        Some(Side::Left)
    } else {
        None
    }
}
