//! Per-frame pong update
//!
//! Pong is continuous: every Playing frame is a simulation step.

use super::collision::{bounce_off_walls, return_off_paddle, scoring_side};
use super::state::{PongGame, Side};
use crate::sim::{Phase, Transition};

/// Input for a single frame. Paddle controls are held levels, confirm is an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PongInput {
    /// Start / restart
    pub confirm: bool,
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Idle/demo mode - both paddles are driven by the autopilot
    pub idle_mode: bool,
}

impl PongInput {
    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Default::default()
        }
    }
}

/// Advance the game by one rendered frame
pub fn tick(game: &mut PongGame, input: &PongInput) {
    let input = if input.idle_mode {
        idle_input(game)
    } else {
        *input
    };

    let outcome = if game.phase.is_playing() && game.cadence.tick() {
        step(game, &input)
    } else {
        None
    };

    match game.phase.transition(input.confirm, outcome) {
        Transition::Stay => {}
        Transition::Start => game.start_session(),
        Transition::Finish(winner) => {
            log::info!(
                "Pong won by {:?}, {} - {}",
                winner,
                game.scores.left,
                game.scores.right
            );
            game.phase = Phase::Terminal(winner);
        }
    }
}

/// One simulation step. Returns the winner when a point ends the match.
pub fn step(game: &mut PongGame, input: &PongInput) -> Option<Side> {
    let settings = &game.settings;
    game.steps += 1;

    game.left.drive(input.left_up, input.left_down, settings.field_height);
    game.right.drive(input.right_up, input.right_down, settings.field_height);

    game.ball.integrate();
    bounce_off_walls(&mut game.ball, settings.field_height);

    for (side, paddle) in [(Side::Left, &game.left), (Side::Right, &game.right)] {
        if return_off_paddle(&mut game.ball, paddle, side, settings) {
            log::trace!(
                "{:?} paddle return at step {}, speed {:.2}",
                side,
                game.steps,
                game.ball.speed()
            );
        }
    }

    let scorer = scoring_side(&game.ball, settings.field_width)?;
    let points = game.scores.award(scorer);
    log::debug!(
        "Point to {:?}: {} - {}",
        scorer,
        game.scores.left,
        game.scores.right
    );
    if points >= game.settings.winning_score {
        return Some(scorer);
    }

    // Serve toward the player who just conceded
    game.serve(scorer.opponent());
    None
}

/// Autopilot: confirm on menus, otherwise each paddle chases the ball while it
/// approaches and drifts back to centre while it recedes.
pub fn idle_input(game: &PongGame) -> PongInput {
    if !game.phase.is_playing() {
        return PongInput::confirm();
    }

    let mut input = PongInput::default();
    let center = game.settings.field_height / 2.0;
    for side in [Side::Left, Side::Right] {
        let paddle = game.paddle(side);
        let incoming = game.ball.vel.x * side.sign() > 0.0;
        let target = if incoming { game.ball.pos.y } else { center };
        let dead_zone = paddle.speed.max(paddle.size.y / 8.0);
        let up = target < paddle.center_y() - dead_zone;
        let down = target > paddle.center_y() + dead_zone;
        match side {
            Side::Left => (input.left_up, input.left_down) = (up, down),
            Side::Right => (input.right_up, input.right_down) = (up, down),
        }
    }
    input
}
