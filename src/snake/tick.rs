//! Per-frame snake update
//!
//! Called once per rendered frame. The cadence decides whether this frame
//! also runs a simulation step.

use super::collision;
use super::grid::Direction;
use super::spawn::place_food;
use super::state::{Cause, GameOver, SnakeGame};
use crate::sim::{Phase, Transition};

/// Input edges for a single frame ("pressed this frame", not held)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnakeInput {
    /// Start / restart
    pub confirm: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

impl SnakeInput {
    /// Input with a single direction pressed
    pub fn turn(dir: Direction) -> Self {
        let mut input = Self::default();
        match dir {
            Direction::Up => input.up = true,
            Direction::Down => input.down = true,
            Direction::Left => input.left = true,
            Direction::Right => input.right = true,
        }
        input
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Default::default()
        }
    }

    pub fn is_pressed(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Pressed directions in polling order
    pub fn pressed(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.is_pressed(dir))
    }
}

/// Advance the game by one rendered frame
pub fn tick(game: &mut SnakeGame, input: &SnakeInput) {
    let input = if input.idle_mode {
        idle_input(game)
    } else {
        *input
    };

    let outcome = if game.phase.is_playing() {
        for dir in input.pressed() {
            game.snake.steer(dir);
        }
        if game.cadence.tick() { step(game) } else { None }
    } else {
        None
    };

    match game.phase.transition(input.confirm, outcome) {
        Transition::Stay => {}
        Transition::Start => game.start_session(),
        Transition::Finish(over) => {
            log::info!(
                "Snake game over: {:?}, score {}, length {}",
                over.cause,
                over.score,
                over.length
            );
            game.phase = Phase::Terminal(over);
        }
    }
}

/// One simulation step: move, eat, then check for death
pub fn step(game: &mut SnakeGame) -> Option<GameOver> {
    let dir = game.snake.commit_direction();
    game.snake.advance(dir);
    game.steps += 1;

    if collision::eats_food(&game.snake, game.food) {
        game.snake.grow();
        game.score += game.settings.food_score;
        game.cadence.quicken();
        game.food = place_food(
            &mut game.rng,
            &game.grid,
            game.snake.body(),
            game.settings.spawn_attempts,
        );
        log::debug!(
            "Food eaten at step {}: score {}, length {}, cadence {}",
            game.steps,
            game.score,
            game.snake.len(),
            game.cadence.threshold()
        );
        if game.food.is_none() {
            return Some(game_over(game, Cause::FieldFull));
        }
    }

    collision::fatal_collision(&game.grid, &game.snake).map(|cause| game_over(game, cause))
}

fn game_over(game: &SnakeGame, cause: Cause) -> GameOver {
    GameOver {
        cause,
        score: game.score,
        length: game.snake.len(),
    }
}

/// Autopilot: confirm on menus, otherwise head greedily for the food while
/// avoiding walls and the body.
pub fn idle_input(game: &SnakeGame) -> SnakeInput {
    if !game.phase.is_playing() {
        return SnakeInput::confirm();
    }

    let snake = &game.snake;
    let head = snake.head();
    let current = snake.direction();
    // The tail cell is vacated by the next advance
    let body = &snake.body()[..snake.len() - 1];
    let target = game.food.unwrap_or(head);

    let best = Direction::ALL
        .into_iter()
        .filter(|&dir| dir != current.opposite())
        .filter(|&dir| {
            let next = head.step(dir);
            game.grid.contains(next) && !body.contains(&next)
        })
        .min_by_key(|&dir| {
            let next = head.step(dir);
            let dist = (next.x - target.x).abs() + (next.y - target.y).abs();
            (dist, dir != current)
        });

    SnakeInput::turn(best.unwrap_or(current))
}
