//! Property-based tests for both simulation cores.
//!
//! Random input streams are replayed frame by frame and the game state is
//! checked after every tick.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use glam::Vec2;
use proptest::prelude::*;

use arcade_sim::pong::collision::return_off_paddle;
use arcade_sim::pong::{self, Ball, Paddle, PongGame, PongInput, Side};
use arcade_sim::sim::{Phase, seeded_rng};
use arcade_sim::snake::{self, Cause, Cell, Direction, GameOver, Grid, SnakeGame, SnakeInput, place_food};
use arcade_sim::{PongSettings, SnakeSettings};

/// Small fast field so random play reaches food, walls and the body
fn small_snake() -> SnakeSettings {
    SnakeSettings {
        grid_width: 10,
        grid_height: 8,
        initial_cadence: 2,
        min_cadence: 1,
        ..Default::default()
    }
}

fn snake_input(code: u8) -> SnakeInput {
    match code {
        0 => SnakeInput::turn(Direction::Up),
        1 => SnakeInput::turn(Direction::Down),
        2 => SnakeInput::turn(Direction::Left),
        3 => SnakeInput::turn(Direction::Right),
        4 => SnakeInput::confirm(),
        5 => SnakeInput {
            up: true,
            left: true,
            ..Default::default()
        },
        _ => SnakeInput::default(),
    }
}

fn pong_input(code: u8) -> PongInput {
    PongInput {
        confirm: false,
        left_up: code & 1 != 0,
        left_down: code & 2 != 0,
        right_up: code & 4 != 0,
        right_down: code & 8 != 0,
        idle_mode: false,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A committed direction is never the reverse of the one before it.
    #[test]
    fn prop_snake_never_reverses(
        seed in any::<u64>(),
        codes in prop::collection::vec(0u8..8, 1..400)
    ) {
        let mut game = SnakeGame::new(small_snake(), seed).unwrap();
        snake::tick(&mut game, &SnakeInput::confirm());

        for code in codes {
            let was_playing = game.phase.is_playing();
            let before = game.snake.direction();
            let steps = game.steps;
            snake::tick(&mut game, &snake_input(code));

            if was_playing && game.steps > steps {
                prop_assert_ne!(game.snake.direction(), before.opposite());
            }
        }
    }

    /// While playing, the food is off the body, the body is on the grid and
    /// no segment other than a freshly grown tail repeats.
    #[test]
    fn prop_snake_body_and_food_consistent(
        seed in any::<u64>(),
        codes in prop::collection::vec(0u8..8, 1..400)
    ) {
        let mut game = SnakeGame::new(small_snake(), seed).unwrap();
        snake::tick(&mut game, &SnakeInput::confirm());

        for code in codes {
            snake::tick(&mut game, &snake_input(code));
            if !game.phase.is_playing() {
                continue;
            }

            let body = game.snake.body();
            prop_assert!(body.len() <= game.snake.capacity());
            prop_assert!(body.iter().all(|&c| game.grid.contains(c)));
            let food = game.food.unwrap();
            prop_assert!(!game.snake.occupies(food));

            let unique: HashSet<Cell> = body[..body.len() - 1].iter().copied().collect();
            prop_assert_eq!(unique.len(), body.len() - 1);
        }
    }

    /// The spawner never lands on the body and only gives up on a full field.
    #[test]
    fn prop_spawner_avoids_body(
        seed in any::<u64>(),
        occupied in prop::collection::vec(any::<bool>(), 20),
        attempts in 0u32..8
    ) {
        let grid = Grid::new(5, 4);
        let body: Vec<Cell> = grid
            .cells()
            .zip(&occupied)
            .filter(|&(_, &taken)| taken)
            .map(|(cell, _)| cell)
            .collect();
        let mut rng = seeded_rng(seed);

        match place_food(&mut rng, &grid, &body, attempts) {
            Some(cell) => {
                prop_assert!(grid.contains(cell));
                prop_assert!(!body.contains(&cell));
            }
            None => prop_assert_eq!(body.len(), grid.cell_count()),
        }
    }

    /// Paddle returns keep the speed inside [start, max] and send the ball away.
    #[test]
    fn prop_pong_return_speed_bounded(
        offset in 0.0f32..=1.0,
        incoming in 5.0f32..12.0,
        angle in -1.0f32..1.0,
        right in any::<bool>()
    ) {
        let settings = PongSettings::default();
        let side = if right { Side::Right } else { Side::Left };
        let paddle = Paddle::new(side, &settings);
        let face = match side {
            Side::Left => paddle.pos.x + paddle.size.x,
            Side::Right => paddle.pos.x,
        };
        let dir = Vec2::new(angle.cos() * side.sign(), angle.sin());
        let mut ball = Ball {
            pos: Vec2::new(face, paddle.pos.y + offset * paddle.size.y),
            vel: dir * incoming,
            radius: settings.ball_radius,
        };

        prop_assert!(return_off_paddle(&mut ball, &paddle, side, &settings));
        let speed = ball.speed();
        prop_assert!(speed >= settings.ball_speed_start - 1e-3);
        prop_assert!(speed <= settings.ball_speed_max + 1e-3);
        prop_assert!(ball.vel.x * side.sign() < 0.0);
    }

    /// The ball stays between the walls and paddles stay on the field.
    #[test]
    fn prop_pong_bodies_stay_in_field(
        seed in any::<u64>(),
        codes in prop::collection::vec(0u8..16, 1..1500)
    ) {
        let settings = PongSettings::default();
        let mut game = PongGame::new(settings.clone(), seed).unwrap();
        pong::tick(&mut game, &PongInput::confirm());

        for code in codes {
            pong::tick(&mut game, &pong_input(code));
            if !game.phase.is_playing() {
                break;
            }
            let y = game.ball.pos.y;
            prop_assert!(y >= settings.ball_radius - 1e-3);
            prop_assert!(y <= settings.field_height - settings.ball_radius + 1e-3);
            for paddle in [&game.left, &game.right] {
                prop_assert!(paddle.pos.y >= 0.0);
                prop_assert!(paddle.pos.y + paddle.size.y <= settings.field_height + 1e-3);
            }
        }
    }

    /// Without confirm, menu frames change nothing whatever else is pressed.
    #[test]
    fn prop_menu_is_inert(
        seed in any::<u64>(),
        snake_codes in prop::collection::vec(0u8..8, 1..100),
        pong_codes in prop::collection::vec(0u8..16, 1..100)
    ) {
        let mut sg = SnakeGame::new(small_snake(), seed).unwrap();
        let snake_menu = sg.clone();
        for code in snake_codes.into_iter().filter(|&c| c != 4) {
            snake::tick(&mut sg, &snake_input(code));
        }
        prop_assert_eq!(&sg, &snake_menu);

        let mut pg = PongGame::new(PongSettings::default(), seed).unwrap();
        let pong_menu = pg.clone();
        for code in pong_codes {
            pong::tick(&mut pg, &pong_input(code));
        }
        prop_assert_eq!(&pg, &pong_menu);
    }

    /// Restarting from a finished game is indistinguishable from a fresh start.
    #[test]
    fn prop_restart_equals_fresh_start(
        seed in any::<u64>(),
        snake_codes in prop::collection::vec(0u8..8, 1..300),
        pong_codes in prop::collection::vec(0u8..16, 1..300)
    ) {
        let mut fresh = SnakeGame::new(small_snake(), seed).unwrap();
        snake::tick(&mut fresh, &SnakeInput::confirm());
        let mut played = fresh.clone();
        for code in snake_codes {
            snake::tick(&mut played, &snake_input(code));
        }
        played.phase = Phase::Terminal(GameOver {
            cause: Cause::Wall,
            score: played.score,
            length: played.snake.len(),
        });
        snake::tick(&mut played, &SnakeInput::confirm());
        prop_assert_eq!(&played, &fresh);

        let mut fresh = PongGame::new(PongSettings::default(), seed).unwrap();
        pong::tick(&mut fresh, &PongInput::confirm());
        let mut played = fresh.clone();
        for code in pong_codes {
            pong::tick(&mut played, &pong_input(code));
        }
        played.phase = Phase::Terminal(Side::Left);
        pong::tick(&mut played, &PongInput::confirm());
        prop_assert_eq!(&played, &fresh);
    }
}
